mod gst_classifier;

pub use gst_classifier::GstClassifier;
