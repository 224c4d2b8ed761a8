mod gst_rate;

pub use gst_rate::{GstRate, TaxRegime};
