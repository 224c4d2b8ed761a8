use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::AppError;

/// Named style presets for the printed invoice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Mustard page, black header and rules
    #[default]
    Classic,
    /// White page, charcoal text, gold accent
    Luxury,
}

const CLASSIC_VARIABLES: [(&str, &str); 7] = [
    ("--bg-page", "#d7bc34ff"),
    ("--bg-header", "#000"),
    ("--text-main", "#000"),
    ("--text-light", "#fff"),
    ("--border-color", "#000"),
    ("--table-border", "#000"),
    ("--accent", "#000"),
];

const LUXURY_VARIABLES: [(&str, &str); 7] = [
    ("--bg-page", "#ffffff"),
    ("--bg-header", "#000000ff"),
    ("--text-main", "#1c1c1c"),
    ("--text-light", "#f5f2ed"),
    ("--border-color", "#555"),
    ("--table-border", "#777"),
    ("--accent", "#bfa76f"),
];

impl Theme {
    /// Style variables set by this preset, in application order
    pub fn variables(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Classic => &CLASSIC_VARIABLES,
            Theme::Luxury => &LUXURY_VARIABLES,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Classic => write!(f, "classic"),
            Theme::Luxury => write!(f, "luxury"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "luxury" => Ok(Theme::Luxury),
            _ => Err(AppError::validation(format!("Invalid theme: {}", s))),
        }
    }
}
