//! Configuration for triage intake and reporting.
//!
//! Nothing here affects scoring. The rule table is fixed.

use crate::error::{Result, TriageError};
use crate::report::format_timestamp;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Entry the intake form sends when no option in a list applies
pub const NONE_OF_THE_ABOVE: &str = "None of the above";

/// Configuration for intake and reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// `chrono` format string for report timestamps
    pub timestamp_format: String,
    /// List entries dropped by intake before counting
    pub ignored_list_entries: Vec<String>,
    /// Reject payload keys intake does not know
    pub reject_unknown_fields: bool,
    /// Log one line per evaluation
    pub log_evaluations: bool,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            ignored_list_entries: Vec::new(),
            reject_unknown_fields: false,
            log_evaluations: true,
        }
    }
}

impl TriageConfig {
    /// Preset for payloads posted by the intake form, which sends
    /// [`NONE_OF_THE_ABOVE`] as a list entry
    #[must_use]
    pub fn survey_form() -> Self {
        Self {
            ignored_list_entries: vec![NONE_OF_THE_ABOVE.to_string()],
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.timestamp_format.trim().is_empty() {
            return Err(TriageError::Config(
                "timestamp_format must not be empty".to_string(),
            ));
        }

        // chrono reports bad specifiers as a fmt::Error when rendering
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .ok_or_else(|| TriageError::Config("invalid sample date".to_string()))?;
        format_timestamp(sample, self)?;

        Ok(())
    }

    /// Whether intake should drop this list entry
    #[must_use]
    pub fn is_ignored_entry(&self, entry: &str) -> bool {
        self.ignored_list_entries
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(entry.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TriageConfig::default().validate().is_ok());
        assert!(TriageConfig::survey_form().validate().is_ok());
    }

    #[test]
    fn test_invalid_timestamp_format() {
        let config = TriageConfig {
            timestamp_format: "%Q".to_string(),
            ..TriageConfig::default()
        };
        assert!(matches!(config.validate(), Err(TriageError::Config(_))));

        let config = TriageConfig {
            timestamp_format: "  ".to_string(),
            ..TriageConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TriageConfig =
            serde_json::from_str(r#"{"reject_unknown_fields": true}"#).unwrap();
        assert!(config.reject_unknown_fields);
        assert_eq!(config.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert!(config.log_evaluations);
    }

    #[test]
    fn test_ignored_entries_match_case_insensitively() {
        let config = TriageConfig::survey_form();
        assert!(config.is_ignored_entry("none of the above"));
        assert!(!config.is_ignored_entry("Bathing"));
        assert!(!TriageConfig::default().is_ignored_entry(NONE_OF_THE_ABOVE));
    }
}
