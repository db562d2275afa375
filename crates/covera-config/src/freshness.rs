//! Freshness rule configuration.

use covera_core::freshness::{DEFAULT_VALID_DAYS, EmptyEvaluationPolicy, FreshnessPolicy};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_valid_days() -> u32 {
    DEFAULT_VALID_DAYS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FreshnessConfig {
    /// Validity window for knowledge objects that do not set one.
    #[serde(default = "default_valid_days")]
    pub default_valid_days: u32,

    /// Behaviour when a knowledge object has no detailed evaluations:
    /// `error` or `fallback_to_review_date`.
    #[serde(default)]
    pub empty_evaluations: EmptyEvaluationPolicy,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            default_valid_days: default_valid_days(),
            empty_evaluations: EmptyEvaluationPolicy::default(),
        }
    }
}

impl FreshnessConfig {
    /// The core policy described by this section.
    #[must_use]
    pub const fn policy(&self) -> FreshnessPolicy {
        FreshnessPolicy {
            default_valid_days: self.default_valid_days,
            empty_evaluations: self.empty_evaluations,
        }
    }

    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        if self.default_valid_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "freshness.default_valid_days".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_policy() {
        let config = FreshnessConfig::default();
        assert_eq!(config.policy(), FreshnessPolicy::default());
        assert!(config.check().is_ok());
    }

    #[test]
    fn zero_window_is_rejected() {
        let config = FreshnessConfig {
            default_valid_days: 0,
            ..FreshnessConfig::default()
        };
        assert!(matches!(
            config.check(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "freshness.default_valid_days"
        ));
    }
}
