//! Internal-consistency checks.
//!
//! Some classification rules encode assumptions about how Reddit shapes its
//! data. When an assumption is violated the [`ConsistencyPolicy`] decides
//! whether to fail loudly (debug builds, test suites) or to log the anomaly
//! and carry on with a best-effort value (release builds, where the UI still
//! has to render something).

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConsistencyError;

/// How consistency violations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsistencyPolicy {
    /// Panic as soon as a violation is seen.
    Strict,
    /// Log a warning and fall back to a best-effort value.
    Lenient,
}

impl ConsistencyPolicy {
    /// Policy for the current build: strict with debug assertions, lenient
    /// otherwise.
    #[must_use]
    pub const fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }

    /// Parse from the string used in settings and on the command line.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    /// Resolves the outcome of a checked operation.
    ///
    /// # Panics
    ///
    /// Panics under [`ConsistencyPolicy::Strict`] when `outcome` is an error.
    pub fn resolve<T>(
        self,
        outcome: Result<T, ConsistencyError>,
        fallback: impl FnOnce(&ConsistencyError) -> T,
    ) -> T {
        match outcome {
            Ok(value) => value,
            Err(err) => match self {
                Self::Strict => panic!("internal consistency check failed: {err}"),
                Self::Lenient => {
                    warn!(error = %err, "Internal consistency check failed, degrading");
                    fallback(&err)
                }
            },
        }
    }
}

impl Default for ConsistencyPolicy {
    fn default() -> Self {
        Self::for_build()
    }
}

impl std::str::FromStr for ConsistencyPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown consistency policy: {s}"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn violation() -> ConsistencyError {
        ConsistencyError::UnreachableState {
            parent_id: "t4_abc".to_string(),
        }
    }

    #[test]
    fn test_policy_roundtrip() {
        for policy in [ConsistencyPolicy::Strict, ConsistencyPolicy::Lenient] {
            assert_eq!(ConsistencyPolicy::parse(policy.as_str()), Some(policy));
        }
        assert_eq!(ConsistencyPolicy::parse("STRICT"), Some(ConsistencyPolicy::Strict));
        assert_eq!(ConsistencyPolicy::parse("loose"), None);
    }

    #[test]
    fn test_ok_passes_through_under_both_policies() {
        for policy in [ConsistencyPolicy::Strict, ConsistencyPolicy::Lenient] {
            assert_eq!(policy.resolve(Ok(7), |_| 0), 7);
        }
    }

    #[test]
    fn test_lenient_uses_fallback() {
        let value = ConsistencyPolicy::Lenient.resolve(Err(violation()), |_| 42);
        assert_eq!(value, 42);
    }

    #[test]
    #[should_panic(expected = "internal consistency check failed")]
    fn test_strict_panics() {
        let _ = ConsistencyPolicy::Strict.resolve(Err(violation()), |_| 0);
    }

    #[test]
    fn test_default_follows_build() {
        let expected = if cfg!(debug_assertions) {
            ConsistencyPolicy::Strict
        } else {
            ConsistencyPolicy::Lenient
        };
        assert_eq!(ConsistencyPolicy::default(), expected);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let policy: ConsistencyPolicy = serde_json::from_str("\"lenient\"").unwrap();
        assert_eq!(policy, ConsistencyPolicy::Lenient);
    }
}
