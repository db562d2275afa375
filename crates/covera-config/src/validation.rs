//! Integrity validation configuration.

use covera_core::validation::{DEFAULT_COVERAGE_TOLERANCE, ValidationOptions};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_coverage_tolerance() -> f64 {
    DEFAULT_COVERAGE_TOLERANCE
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Treat warnings (coverage mismatch, timeline order, ...) as failures.
    #[serde(default)]
    pub strict: bool,

    /// Allowed difference between `ai_coverage_score` and `total / 100`.
    #[serde(default = "default_coverage_tolerance")]
    pub coverage_tolerance: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: false,
            coverage_tolerance: default_coverage_tolerance(),
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub const fn options(&self) -> ValidationOptions {
        ValidationOptions {
            coverage_tolerance: self.coverage_tolerance,
        }
    }

    pub(crate) fn check(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.coverage_tolerance) {
            return Err(ConfigError::InvalidValue {
                field: "validation.coverage_tolerance".to_string(),
                reason: format!("{} is outside [0, 1]", self.coverage_tolerance),
            });
        }
        Ok(())
    }
}
