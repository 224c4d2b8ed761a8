/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised at the edges of the engine (editing API, sheet loading,
/// configuration, access gate). Recomputation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Rejected edits or sheets (row out of range, too many rows)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Access gate rejected the supplied secret
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Reading an invoice sheet failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }
}
