//! Process settings read from the environment

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::observability::LogFormat;

/// Prefix for every settings variable, e.g. `KUBE_AUDIT_LOG_FORMAT`
pub const ENV_PREFIX: &str = "KUBE_AUDIT";

/// Settings shared by all utilities
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Log line format on stderr
    #[serde(default)]
    pub log_format: LogFormat,

    /// Field manager recorded on objects this tool creates
    #[serde(default = "default_field_manager")]
    pub field_manager: String,
}

fn default_field_manager() -> String {
    "kube-audit".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            field_manager: default_field_manager(),
        }
    }
}

impl Settings {
    /// Load settings from `KUBE_AUDIT_*` environment variables
    pub fn load() -> Result<Self> {
        Self::from_source(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(env)
            .build()
            .context("Failed to read settings from environment")?;

        config
            .try_deserialize()
            .context("Invalid KUBE_AUDIT_* settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> config::Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        config::Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_source(env(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.field_manager, "kube-audit");
        assert_eq!(settings.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides_from_environment() {
        let settings = Settings::from_source(env(&[
            ("KUBE_AUDIT_LOG_FORMAT", "json"),
            ("KUBE_AUDIT_FIELD_MANAGER", "platform-team"),
        ]))
        .unwrap();
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.field_manager, "platform-team");
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let result = Settings::from_source(env(&[("KUBE_AUDIT_LOG_FORMAT", "xml")]));
        assert!(result.is_err());
    }
}
