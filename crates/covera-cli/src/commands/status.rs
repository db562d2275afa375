use chrono::{DateTime, Utc};
use covera_config::CoveraConfig;
use covera_core::entities::KnowledgeObject;
use covera_core::freshness::{FreshnessPolicy, confidence_status, is_stale};
use covera_core::responses::StatusResponse;
use covera_core::store::KnowledgeStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TargetArgs;
use crate::commands::shared::knowledge::resolve;
use crate::output::output;

/// Handle `covera status`.
pub fn handle(args: &TargetArgs, config: &CoveraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = KnowledgeStore::builtin()?;
    let knowledge = resolve(store, args.id.as_deref(), config)?;
    let response = build(knowledge, flags.now(), &config.freshness.policy());
    output(&response, flags)
}

/// A freshness error degrades to an unknown-confidence response.
fn build(knowledge: &KnowledgeObject, now: DateTime<Utc>, policy: &FreshnessPolicy) -> StatusResponse {
    let confidence = confidence_status(knowledge, now, policy);
    if let Err(error) = &confidence {
        tracing::warn!(knowledge_id = %knowledge.id, %error, "confidence unavailable");
    }

    StatusResponse::new(
        &knowledge.id,
        knowledge.evaluation.date,
        confidence,
        is_stale(knowledge, now, policy),
    )
}
