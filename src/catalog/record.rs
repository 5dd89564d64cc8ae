//! Pattern records and alert levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{CatalogError, CatalogResult};

/// Severity attached to a catalog pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Requires immediate attention
    High,
    /// Should be reviewed
    Medium,
    /// Informational
    Low,
}

impl AlertLevel {
    /// Every alert level, most severe first.
    pub const ALL: [AlertLevel; 3] = [AlertLevel::High, AlertLevel::Medium, AlertLevel::Low];

    /// Lower-case name used in files and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::High => "high",
            AlertLevel::Medium => "medium",
            AlertLevel::Low => "low",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(AlertLevel::High),
            "medium" => Ok(AlertLevel::Medium),
            "low" => Ok(AlertLevel::Low),
            other => Err(format!(
                "invalid alert level '{other}': expected high, medium or low"
            )),
        }
    }
}

/// A complaint-indicative phrase with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Display text of the pattern, before normalization
    pub pattern: String,

    /// Category label (e.g. "producto", "servicio")
    pub category: String,

    /// Severity of a match
    pub alert_level: AlertLevel,

    /// Human-readable alert message; may be empty
    #[serde(default)]
    pub alert_message: String,
}

impl PatternRecord {
    /// Creates a record with every text field trimmed.
    pub fn new(
        pattern: impl AsRef<str>,
        category: impl AsRef<str>,
        alert_level: AlertLevel,
        alert_message: impl AsRef<str>,
    ) -> Self {
        Self {
            pattern: pattern.as_ref().trim().to_string(),
            category: category.as_ref().trim().to_string(),
            alert_level,
            alert_message: alert_message.as_ref().trim().to_string(),
        }
    }

    /// Returns a copy with every text field trimmed.
    pub(crate) fn trimmed(self) -> Self {
        Self::new(self.pattern, self.category, self.alert_level, self.alert_message)
    }

    /// Checks that the required fields are present.
    ///
    /// `index` is only used to locate the record in the error.
    pub fn validate(&self, index: usize) -> CatalogResult<()> {
        if self.pattern.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: "pattern must not be empty".to_string(),
            });
        }
        if self.category.trim().is_empty() {
            return Err(CatalogError::InvalidRecord {
                index,
                reason: "category must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
