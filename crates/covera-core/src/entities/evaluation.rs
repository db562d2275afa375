use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CriterionValue, ScoreCategory};
use crate::errors::CoreError;

/// Category sub-scores of a detailed evaluation.
///
/// `total` is authored alongside the sub-scores and must equal their sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Scores {
    pub ai_specific: u32,
    pub implementation: u32,
    pub governance: u32,
    pub currency: u32,
    pub total: u32,
}

impl Scores {
    /// Sub-score for a single category.
    #[must_use]
    pub const fn get(&self, category: ScoreCategory) -> u32 {
        match category {
            ScoreCategory::AiSpecific => self.ai_specific,
            ScoreCategory::Implementation => self.implementation,
            ScoreCategory::Governance => self.governance,
            ScoreCategory::Currency => self.currency,
        }
    }

    /// Sum of the four category sub-scores.
    ///
    /// Widened to `u64` so authored values far outside their budgets cannot overflow.
    #[must_use]
    pub const fn sub_score_sum(&self) -> u64 {
        self.ai_specific as u64
            + self.implementation as u64
            + self.governance as u64
            + self.currency as u64
    }

    /// Check that `total` equals the sum of the sub-scores.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedScoreTotal`] naming `framework` when they differ.
    pub fn verify_total(&self, framework: &str) -> Result<(), CoreError> {
        let expected = self.sub_score_sum();
        if u64::from(self.total) == expected {
            Ok(())
        } else {
            Err(CoreError::MalformedScoreTotal {
                framework: framework.to_string(),
                total: self.total,
                expected,
            })
        }
    }
}

/// Per-framework scoring record with a criterion breakdown and narrative verdict.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DetailedEvaluation {
    pub framework_name: String,
    pub evaluation_date: DateTime<Utc>,
    pub evaluated_by: String,
    pub scores: Scores,
    /// Criterion name → outcome. Keys follow the criteria catalog.
    pub breakdown: BTreeMap<String, CriterionValue>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub verdict: String,
}

impl DetailedEvaluation {
    /// Criteria that could not be evaluated yet.
    pub fn unknown_criteria(&self) -> impl Iterator<Item = &str> {
        self.breakdown
            .iter()
            .filter(|(_, value)| **value == CriterionValue::Unknown)
            .map(|(name, _)| name.as_str())
    }
}
