pub mod services;

pub use services::AmountInWords;
