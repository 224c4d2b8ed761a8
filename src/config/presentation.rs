use crate::core::Result;
use crate::modules::presentation::{AccessGate, Theme};

/// Theme and access gate settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationConfig {
    pub theme: Theme,
    /// Secret the access gate compares against
    pub password: String,
    /// Password attempt supplied by the caller, if any
    pub password_attempt: Option<String>,
}

impl PresentationConfig {
    pub(crate) fn from_vars<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = match lookup("INVOICE_THEME") {
            Some(name) => name.parse()?,
            None => Theme::default(),
        };

        Ok(Self {
            theme,
            password: lookup("INVOICE_PASSWORD")
                .unwrap_or_else(|| AccessGate::DEFAULT_SECRET.to_string()),
            password_attempt: lookup("INVOICE_PASSWORD_ATTEMPT"),
        })
    }

    pub fn access_gate(&self) -> AccessGate {
        AccessGate::new(self.password.clone())
    }
}
