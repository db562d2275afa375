use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{DetailedEvaluation, Framework, TimelineEvent};

/// The last human review of a knowledge object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewRecord {
    pub date: DateTime<Utc>,
    pub by: String,
    /// Validity window in days. `None` or `0` falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_days: Option<u32>,
    /// Free-text scoring rubric.
    pub methodology: String,
}

impl ReviewRecord {
    /// Validity window, substituting `default_days` when unset or zero.
    #[must_use]
    pub fn valid_days_or(&self, default_days: u32) -> u32 {
        self.valid_days.filter(|days| *days > 0).unwrap_or(default_days)
    }
}

/// Display metadata. Never read by the freshness or summary rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnowledgeMetadata {
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A versioned bundle of review record, scored frameworks, and change timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KnowledgeObject {
    pub id: String,
    pub name: String,
    pub version: String,
    pub evaluation: ReviewRecord,
    pub frameworks: Vec<Framework>,
    /// Keyed by framework id.
    #[serde(default)]
    pub detailed_evaluations: BTreeMap<String, DetailedEvaluation>,
    /// Chronological by position. Never re-sorted.
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,
    pub metadata: KnowledgeMetadata,
}

impl KnowledgeObject {
    /// Look up a framework by id.
    #[must_use]
    pub fn framework(&self, id: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|framework| framework.id == id)
    }

    /// Look up the detailed evaluation for a framework id.
    #[must_use]
    pub fn detailed_evaluation(&self, id: &str) -> Option<&DetailedEvaluation> {
        self.detailed_evaluations.get(id)
    }

    /// Most recent `evaluation_date` across all detailed evaluations.
    #[must_use]
    pub fn latest_evaluation_date(&self) -> Option<DateTime<Utc>> {
        self.detailed_evaluations
            .values()
            .map(|evaluation| evaluation.evaluation_date)
            .max()
    }
}
