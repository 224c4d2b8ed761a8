use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GST slab assigned to a line by its unit price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstRate {
    /// Goods priced up to the low-slab ceiling
    #[serde(rename = "5")]
    Five,
    /// Goods priced above the low-slab ceiling
    #[serde(rename = "12")]
    Twelve,
}

impl GstRate {
    /// Rate as a percentage (5 or 12)
    pub fn percent(&self) -> Decimal {
        match self {
            GstRate::Five => Decimal::from(5),
            GstRate::Twelve => Decimal::from(12),
        }
    }
}

impl fmt::Display for GstRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GstRate::Five => write!(f, "5"),
            GstRate::Twelve => write!(f, "12"),
        }
    }
}

/// How the invoice's total GST is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// Intra-state sale: half CGST, half SGST
    #[default]
    #[serde(rename = "cgst_sgst")]
    SplitCgstSgst,
    /// Inter-state sale: the whole amount as IGST
    Igst,
}

impl TaxRegime {
    /// Maps a selector token to a regime. Only `"igst"` selects IGST;
    /// every other value falls back to the CGST/SGST split.
    pub fn from_selector(token: &str) -> Self {
        if token == "igst" {
            TaxRegime::Igst
        } else {
            TaxRegime::SplitCgstSgst
        }
    }

    pub fn as_selector(&self) -> &'static str {
        match self {
            TaxRegime::SplitCgstSgst => "cgst_sgst",
            TaxRegime::Igst => "igst",
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_selector())
    }
}
