//! Cross-cutting error types for Covera.
//!
//! Configuration and schema errors live in their own crates. The binary
//! converges everything into `anyhow::Error`.

use thiserror::Error;

/// Errors raised by the knowledge core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Confidence classification had no dated detailed evaluations to reduce over.
    #[error("Knowledge object '{knowledge_id}' has no detailed evaluations to date")]
    EmptyEvaluationSet { knowledge_id: String },

    /// A score total does not equal the sum of its sub-scores.
    #[error("Malformed score total for {framework}: total is {total}, sub-scores sum to {expected}")]
    MalformedScoreTotal {
        framework: String,
        total: u32,
        expected: u64,
    },

    /// Lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A knowledge object failed integrity validation.
    #[error("Knowledge object '{knowledge_id}' failed validation: {}", issues.join("; "))]
    InvalidKnowledge {
        knowledge_id: String,
        issues: Vec<String>,
    },

    /// Embedded knowledge data could not be deserialized.
    #[error("Failed to parse knowledge data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
