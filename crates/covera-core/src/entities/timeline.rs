use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Confidence;

/// A dated change to one of the tracked frameworks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Format: `YYYY-MM` or `YYYY-MM-DD`.
    pub date: String,
    pub framework: String,
    pub change: String,
    pub confidence: Confidence,
}
