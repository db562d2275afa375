//! Freshness and confidence classification.
//!
//! Two reference dates are in play and they are deliberately kept apart:
//! - [`confidence_status`] measures age from the most recent detailed
//!   evaluation date.
//! - [`is_stale`] measures age from the top-level review date
//!   (`evaluation.date`).
//!
//! The integrity validator reports when the two diverge.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::KnowledgeObject;
use crate::enums::FreshnessTier;
use crate::errors::CoreError;

/// Validity window used when a knowledge object does not set one.
pub const DEFAULT_VALID_DAYS: u32 = 90;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// What to do when a knowledge object has no detailed evaluations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmptyEvaluationPolicy {
    /// Fail with [`CoreError::EmptyEvaluationSet`].
    #[default]
    Error,
    /// Measure age from the top-level review date instead.
    FallbackToReviewDate,
}

/// Parameters of the freshness rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FreshnessPolicy {
    pub default_valid_days: u32,
    pub empty_evaluations: EmptyEvaluationPolicy,
}

impl Default for FreshnessPolicy {
    fn default() -> Self {
        Self {
            default_valid_days: DEFAULT_VALID_DAYS,
            empty_evaluations: EmptyEvaluationPolicy::Error,
        }
    }
}

/// Result of [`confidence_status`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ConfidenceStatus {
    pub confidence: f64,
    pub status: String,
    pub tier: FreshnessTier,
    /// Whole days elapsed since `reference_date`, floored.
    pub days_since: i64,
    pub days_until_stale: i64,
    pub valid_days: u32,
    pub reference_date: DateTime<Utc>,
}

/// Fractional days from `from` to `to`. Negative when `from` is in the future.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / SECONDS_PER_DAY
}

/// Classify how trustworthy `knowledge` is at `now`.
///
/// # Errors
///
/// Returns [`CoreError::EmptyEvaluationSet`] when there are no detailed
/// evaluations and the policy does not allow falling back to the review date.
#[allow(clippy::cast_possible_truncation)]
pub fn confidence_status(
    knowledge: &KnowledgeObject,
    now: DateTime<Utc>,
    policy: &FreshnessPolicy,
) -> Result<ConfidenceStatus, CoreError> {
    let reference_date = match knowledge.latest_evaluation_date() {
        Some(date) => date,
        None => match policy.empty_evaluations {
            EmptyEvaluationPolicy::Error => {
                return Err(CoreError::EmptyEvaluationSet {
                    knowledge_id: knowledge.id.clone(),
                });
            }
            EmptyEvaluationPolicy::FallbackToReviewDate => {
                tracing::debug!(
                    knowledge_id = %knowledge.id,
                    "no detailed evaluations; using review date"
                );
                knowledge.evaluation.date
            }
        },
    };

    let valid_days = knowledge.evaluation.valid_days_or(policy.default_valid_days);
    let days_since = days_between(reference_date, now);
    let tier = FreshnessTier::classify(days_since, valid_days);
    let days_until_stale = if tier == FreshnessTier::Expired {
        0
    } else {
        ((f64::from(valid_days) - days_since).floor() as i64).max(0)
    };

    Ok(ConfidenceStatus {
        confidence: tier.confidence(),
        status: tier.label().to_string(),
        tier,
        days_since: days_since.floor() as i64,
        days_until_stale,
        valid_days,
        reference_date,
    })
}

/// [`confidence_status`] evaluated against the current time.
///
/// # Errors
///
/// See [`confidence_status`].
pub fn confidence_status_now(
    knowledge: &KnowledgeObject,
    policy: &FreshnessPolicy,
) -> Result<ConfidenceStatus, CoreError> {
    confidence_status(knowledge, Utc::now(), policy)
}

/// Whether the top-level review is older than the validity window at `now`.
#[must_use]
pub fn is_stale(knowledge: &KnowledgeObject, now: DateTime<Utc>, policy: &FreshnessPolicy) -> bool {
    let valid_days = knowledge.evaluation.valid_days_or(policy.default_valid_days);
    days_between(knowledge.evaluation.date, now) > f64::from(valid_days)
}

/// [`is_stale`] evaluated against the current time.
#[must_use]
pub fn is_stale_now(knowledge: &KnowledgeObject, policy: &FreshnessPolicy) -> bool {
    is_stale(knowledge, Utc::now(), policy)
}
