use crate::core::{AppError, Result};
use crate::modules::invoices::MAX_ROWS;
use crate::modules::taxes::TaxRegime;

/// Invoice layout and input configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceConfig {
    /// Number of rows on a fresh invoice
    pub max_rows: usize,
    /// Regime used when a sheet does not name one
    pub default_regime: TaxRegime,
    /// Sheet to load when none is given on the command line
    pub sheet_path: Option<String>,
}

impl InvoiceConfig {
    pub(crate) fn from_vars<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_rows = match lookup("INVOICE_MAX_ROWS") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::configuration("Invalid INVOICE_MAX_ROWS"))?,
            None => MAX_ROWS,
        };

        Ok(Self {
            max_rows,
            default_regime: lookup("INVOICE_DEFAULT_REGIME")
                .map(|token| TaxRegime::from_selector(token.trim()))
                .unwrap_or_default(),
            sheet_path: lookup("INVOICE_FILE").filter(|path| !path.trim().is_empty()),
        })
    }
}

impl Default for InvoiceConfig {
    fn default() -> Self {
        Self {
            max_rows: MAX_ROWS,
            default_regime: TaxRegime::default(),
            sheet_path: None,
        }
    }
}
