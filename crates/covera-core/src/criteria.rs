//! Scoring criteria catalog.
//!
//! Nineteen named criteria grouped into four categories. Each criterion carries
//! a point weight; the weights of a category add up to that category's budget
//! (40/30/20/10), so a framework meeting every criterion scores 100.

use std::collections::BTreeMap;

use crate::entities::Scores;
use crate::enums::{CriterionValue, ScoreCategory};

/// A single rubric criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub name: &'static str,
    pub category: ScoreCategory,
    pub points: u32,
    pub description: &'static str,
}

const fn criterion(
    name: &'static str,
    category: ScoreCategory,
    points: u32,
    description: &'static str,
) -> Criterion {
    Criterion {
        name,
        category,
        points,
        description,
    }
}

/// The full rubric, ordered by category.
pub const CATALOG: [Criterion; 19] = [
    // AI-specific coverage (40)
    criterion(
        "prompt_injection",
        ScoreCategory::AiSpecific,
        8,
        "Direct and indirect prompt injection",
    ),
    criterion(
        "model_supply_chain",
        ScoreCategory::AiSpecific,
        6,
        "Provenance of models, weights, and third-party components",
    ),
    criterion(
        "training_data_poisoning",
        ScoreCategory::AiSpecific,
        6,
        "Integrity of training and fine-tuning data",
    ),
    criterion(
        "model_theft",
        ScoreCategory::AiSpecific,
        6,
        "Model extraction and weight exfiltration",
    ),
    criterion(
        "insecure_output_handling",
        ScoreCategory::AiSpecific,
        6,
        "Downstream handling of model output",
    ),
    criterion(
        "agent_autonomy",
        ScoreCategory::AiSpecific,
        4,
        "Excessive agency and tool-use controls",
    ),
    criterion(
        "ai_incident_response",
        ScoreCategory::AiSpecific,
        4,
        "Detection and response for AI-specific incidents",
    ),
    // Implementation guidance (30)
    criterion(
        "actionable_controls",
        ScoreCategory::Implementation,
        6,
        "Concrete controls rather than principles",
    ),
    criterion(
        "testing_guidance",
        ScoreCategory::Implementation,
        6,
        "How to test or red-team the controls",
    ),
    criterion(
        "tooling_mappings",
        ScoreCategory::Implementation,
        6,
        "Mappings to tools or detection content",
    ),
    criterion(
        "code_examples",
        ScoreCategory::Implementation,
        6,
        "Worked examples or reference code",
    ),
    criterion(
        "maturity_levels",
        ScoreCategory::Implementation,
        6,
        "Graduated maturity or implementation tiers",
    ),
    // Governance (20)
    criterion(
        "risk_management",
        ScoreCategory::Governance,
        5,
        "Risk identification and treatment process",
    ),
    criterion(
        "accountability",
        ScoreCategory::Governance,
        5,
        "Roles, ownership, and oversight",
    ),
    criterion(
        "regulatory_alignment",
        ScoreCategory::Governance,
        5,
        "Mapping to regulation such as the EU AI Act",
    ),
    criterion(
        "third_party_risk",
        ScoreCategory::Governance,
        5,
        "Vendor and third-party AI risk",
    ),
    // Currency (10)
    criterion(
        "updated_last_12_months",
        ScoreCategory::Currency,
        4,
        "Revised within the last twelve months",
    ),
    criterion(
        "versioned_releases",
        ScoreCategory::Currency,
        3,
        "Published as identifiable versions",
    ),
    criterion(
        "community_maintained",
        ScoreCategory::Currency,
        3,
        "Open contribution process",
    ),
];

/// Look up a criterion by name.
#[must_use]
pub fn criterion_named(name: &str) -> Option<&'static Criterion> {
    CATALOG.iter().find(|criterion| criterion.name == name)
}

/// All criteria of a category, in catalog order.
pub fn criteria_in(category: ScoreCategory) -> impl Iterator<Item = &'static Criterion> {
    CATALOG
        .iter()
        .filter(move |criterion| criterion.category == category)
}

/// Derive category sub-scores from a breakdown.
///
/// Only `Met` criteria contribute; `NotMet`, `Unknown`, and names missing from
/// the catalog count zero.
#[must_use]
pub fn score_breakdown(breakdown: &BTreeMap<String, CriterionValue>) -> Scores {
    let mut scores = Scores::default();
    let mut total = 0;
    for (name, value) in breakdown {
        let Some(criterion) = criterion_named(name) else {
            continue;
        };
        if !value.is_met() {
            continue;
        }
        match criterion.category {
            ScoreCategory::AiSpecific => scores.ai_specific += criterion.points,
            ScoreCategory::Implementation => scores.implementation += criterion.points,
            ScoreCategory::Governance => scores.governance += criterion.points,
            ScoreCategory::Currency => scores.currency += criterion.points,
        }
        total += criterion.points;
    }
    scores.total = total;
    scores
}
