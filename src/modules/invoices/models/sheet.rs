// Serde input documents for invoices loaded from YAML or JSON.
//
// Cells are kept as raw text so a sheet behaves exactly like typed input:
// `quantity: 2` and `quantity: "2"` are the same cell.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::Result;

/// Typed cell values for one invoice row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowInput {
    #[serde(default, deserialize_with = "raw_text")]
    pub description: String,

    #[serde(default, deserialize_with = "raw_text")]
    pub quantity: String,

    #[serde(default, deserialize_with = "raw_text", alias = "rate")]
    pub unit_rate: String,

    #[serde(default, deserialize_with = "raw_text")]
    pub gst_rate: String,
}

impl RowInput {
    /// Row with quantity and unit rate filled in
    pub fn new(
        description: impl Into<String>,
        quantity: impl Into<String>,
        unit_rate: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            quantity: quantity.into(),
            unit_rate: unit_rate.into(),
            gst_rate: String::new(),
        }
    }
}

/// A whole invoice as written in a sheet file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSheet {
    /// Regime selector token (`"igst"` or anything else for CGST/SGST)
    #[serde(default)]
    pub regime: Option<String>,

    /// Raw transport charge
    #[serde(default, deserialize_with = "raw_text")]
    pub transport: String,

    /// Filled rows, in display order
    #[serde(default)]
    pub rows: Vec<RowInput>,
}

impl InvoiceSheet {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read a sheet file: JSON when the extension is `.json`, YAML otherwise
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_yaml_str(&contents)
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

/// Accepts any scalar (or null) and keeps its textual form
fn raw_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<RawScalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawScalar::Text(text)) => text,
        Some(RawScalar::Integer(value)) => value.to_string(),
        Some(RawScalar::Float(value)) => value.to_string(),
        Some(RawScalar::Flag(value)) => value.to_string(),
    };
    Ok(text)
}
