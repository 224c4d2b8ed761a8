use crate::core::{AppError, Result};
use std::env;

pub mod invoice;
pub mod presentation;

pub use invoice::InvoiceConfig;
pub use presentation::PresentationConfig;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app: AppConfig,
    pub invoice: InvoiceConfig,
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            invoice: InvoiceConfig::from_vars(&lookup)?,
            presentation: PresentationConfig::from_vars(&lookup)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.invoice.max_rows == 0 {
            return Err(AppError::Configuration(
                "Invoice must have at least one row".to_string(),
            ));
        }

        if self.presentation.password.is_empty() {
            return Err(AppError::Configuration(
                "INVOICE_PASSWORD cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
