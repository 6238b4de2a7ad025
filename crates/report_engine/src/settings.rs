use std::path::Path;

use serde::Deserialize;

use data_normalization::Locale;

/// Day windows for the receivables aging buckets.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AgingThresholds {
    /// Titles due within this many days count as "due soon".
    pub upcoming_days: i64,
    /// Overdue titles within this many days count as recently overdue.
    pub overdue_near_days: i64,
    /// Overdue titles within this many days (but past the near window)
    /// count as mid-range; older ones are late.
    pub overdue_far_days: i64,
}

impl Default for AgingThresholds {
    fn default() -> Self {
        Self {
            upcoming_days: 30,
            overdue_near_days: 30,
            overdue_far_days: 60,
        }
    }
}

/// Report-level configuration, with working defaults for the Brazilian
/// deployment.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportSettings {
    pub locale: Locale,
    pub currency: String,
    pub aging: AgingThresholds,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            locale: Locale::PtBr,
            currency: "BRL".to_string(),
            aging: AgingThresholds::default(),
        }
    }
}

/// Loads settings from a JSON file, falling back to defaults when the file
/// is missing or malformed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> ReportSettings {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => ReportSettings::default(),
    }
}
