use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FrameworkStatus;

/// A scored security framework.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub url: String,
    /// Where the scoring evidence was taken from, when it differs from `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source: Option<String>,
    /// Share of the rubric the framework covers, in `[0, 1]`.
    pub ai_coverage_score: f64,
    pub status: FrameworkStatus,
    #[serde(default)]
    pub gaps: Vec<String>,
    /// Format: `YYYY-MM` (e.g., `2024-11`).
    pub last_framework_update: String,
}

impl Framework {
    /// Coverage as a whole percentage, rounded half away from zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn coverage_percent(&self) -> u32 {
        (self.ai_coverage_score * 100.0).round().max(0.0) as u32
    }
}
