pub mod currency;
pub mod error;
pub mod number;

pub use currency::Rupee;
pub use error::{AppError, Result};
pub use number::parse_number;
