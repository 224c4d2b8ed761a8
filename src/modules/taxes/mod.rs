pub mod models;
pub mod services;

pub use models::{GstRate, TaxRegime};
pub use services::GstClassifier;
