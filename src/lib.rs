//! GST Invoice Engine Library
//!
//! Computes tax-inclusive invoice totals from editable line items, under either
//! the CGST/SGST split or IGST, and spells the grand total out in Indian
//! numbering words.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::invoices;
pub use modules::presentation;
pub use modules::taxes;
pub use modules::words;

pub use invoices::{recompute, Invoice, InvoiceView};
