use crate::core::{AppError, Result};

/// Password screen shown before the invoice can be edited.
///
/// A plain equality check against one fixed secret; it keeps casual
/// viewers out and is not an authentication mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    pub const DEFAULT_SECRET: &'static str = "12345";

    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Accept the attempt if it matches the secret exactly
    pub fn check(&self, attempt: &str) -> Result<()> {
        if attempt == self.secret {
            Ok(())
        } else {
            Err(AppError::unauthorized("Incorrect password"))
        }
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SECRET)
    }
}
