pub mod invoices;
pub mod presentation;
pub mod taxes;
pub mod words;
