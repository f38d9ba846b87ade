//! Collector configuration.
//!
//! Build integrations usually keep this next to their own settings:
//!
//! ```yaml
//! identOption: short
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapter::IdentOption;

/// Error returned when a configuration document cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid collector config: {0}")]
pub struct ConfigError(String);

/// Settings for a [`Collector`](crate::Collector).
///
/// # Example
///
/// ```rust
/// use cssforge::{CollectorConfig, IdentOption};
///
/// let config = CollectorConfig::from_yaml_str("identOption: short").unwrap();
/// assert_eq!(config.ident_option, IdentOption::Short);
///
/// assert_eq!(CollectorConfig::default().ident_option, IdentOption::Debug);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CollectorConfig {
    pub ident_option: IdentOption,
}

impl CollectorConfig {
    pub fn with_ident_option(mut self, ident_option: IdentOption) -> Self {
        self.ident_option = ident_option;
        self
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(source).map_err(|e| ConfigError(e.to_string()))
    }

    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CollectorConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CollectorConfig::default());
    }

    #[test]
    fn test_json_config() {
        let config = CollectorConfig::from_json_str(r#"{"identOption": "short"}"#).unwrap();
        assert_eq!(config.ident_option, IdentOption::Short);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(CollectorConfig::from_yaml_str("identOption: verbose").is_err());
        assert!(CollectorConfig::from_yaml_str("identOptions: short").is_err());
    }
}
