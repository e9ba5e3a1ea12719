//! User settings.

use serde::{Deserialize, Serialize};

use crate::consistency::ConsistencyPolicy;
use crate::error::{Error, Result};

/// Settings that persist across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the build-default consistency policy.
    pub consistency_policy: Option<ConsistencyPolicy>,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: Option<String>,
}

impl Settings {
    /// Parses settings from JSON. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }

    /// Serializes settings as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Effective consistency policy.
    #[must_use]
    pub fn consistency_policy(&self) -> ConsistencyPolicy {
        self.consistency_policy.unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_policy_override() {
        let settings = Settings::from_json(r#"{"consistency_policy": "lenient"}"#).unwrap();
        assert_eq!(settings.consistency_policy(), ConsistencyPolicy::Lenient);
    }

    #[test]
    fn test_missing_policy_uses_build_default() {
        let settings = Settings::default();
        assert_eq!(settings.consistency_policy(), ConsistencyPolicy::for_build());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        assert!(matches!(
            Settings::from_json(r#"{"consistency_policy": "sometimes"}"#),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings {
            consistency_policy: Some(ConsistencyPolicy::Strict),
            log_filter: Some("dank=debug".to_string()),
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
