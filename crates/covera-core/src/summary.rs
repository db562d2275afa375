//! Roll-up statistics over a knowledge object's frameworks and timeline.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Framework, KnowledgeObject};
use crate::enums::FrameworkStatus;

/// Returned by [`latest_change`] when the timeline is empty.
pub const NO_CHANGE_HISTORY: &str = "No change history available";

/// Mean AI coverage as a whole percentage. An empty list averages to 0.
///
/// Rounds half away from zero, which for non-negative scores is half-up.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn average_coverage(frameworks: &[Framework]) -> u32 {
    if frameworks.is_empty() {
        return 0;
    }
    let sum: f64 = frameworks.iter().map(|f| f.ai_coverage_score).sum();
    let mean = sum / frameworks.len() as f64;
    (mean * 100.0).round().max(0.0) as u32
}

/// Number of frameworks that offer any AI guidance.
#[must_use]
pub fn count_with_guidance(frameworks: &[Framework]) -> usize {
    frameworks
        .iter()
        .filter(|f| f.status.has_guidance())
        .count()
}

/// The `change` text of the last timeline entry by position.
#[must_use]
pub fn latest_change(knowledge: &KnowledgeObject) -> &str {
    knowledge
        .timeline
        .last()
        .map_or(NO_CHANGE_HISTORY, |event| event.change.as_str())
}

/// Display-ready roll-up of a knowledge object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CoverageSummary {
    pub knowledge_id: String,
    pub framework_count: usize,
    pub average_coverage: u32,
    pub with_guidance: usize,
    /// Framework count per status (`active`, `applicable`, `no-guidance`).
    pub by_status: BTreeMap<String, usize>,
    pub latest_change: String,
}

/// Compute every roll-up value of `knowledge` at once.
#[must_use]
pub fn summarize(knowledge: &KnowledgeObject) -> CoverageSummary {
    let mut by_status = BTreeMap::new();
    for status in [
        FrameworkStatus::Active,
        FrameworkStatus::Applicable,
        FrameworkStatus::NoGuidance,
    ] {
        let count = knowledge
            .frameworks
            .iter()
            .filter(|f| f.status == status)
            .count();
        by_status.insert(status.as_str().to_string(), count);
    }

    CoverageSummary {
        knowledge_id: knowledge.id.clone(),
        framework_count: knowledge.frameworks.len(),
        average_coverage: average_coverage(&knowledge.frameworks),
        with_guidance: count_with_guidance(&knowledge.frameworks),
        by_status,
        latest_change: latest_change(knowledge).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::{KnowledgeMetadata, ReviewRecord, TimelineEvent};
    use crate::enums::Confidence;

    fn framework(id: &str, score: f64, status: FrameworkStatus) -> Framework {
        Framework {
            id: id.into(),
            name: id.to_uppercase(),
            organization: "Org".into(),
            url: format!("https://example.org/{id}"),
            data_source: None,
            ai_coverage_score: score,
            status,
            gaps: vec![],
            last_framework_update: "2025-01".into(),
        }
    }

    fn event(date: &str, change: &str) -> TimelineEvent {
        TimelineEvent {
            date: date.into(),
            framework: "Framework".into(),
            change: change.into(),
            confidence: Confidence::High,
        }
    }

    fn knowledge(frameworks: Vec<Framework>, timeline: Vec<TimelineEvent>) -> KnowledgeObject {
        KnowledgeObject {
            id: "kb".into(),
            name: "Knowledge".into(),
            version: "1".into(),
            evaluation: ReviewRecord {
                date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
                by: "reviewer".into(),
                valid_days: Some(90),
                methodology: String::new(),
            },
            frameworks,
            detailed_evaluations: std::collections::BTreeMap::new(),
            timeline,
            metadata: KnowledgeMetadata::default(),
        }
    }

    #[test]
    fn average_of_mixed_scores() {
        let frameworks = vec![
            framework("a", 1.0, FrameworkStatus::Active),
            framework("b", 0.0, FrameworkStatus::NoGuidance),
            framework("c", 0.5, FrameworkStatus::Applicable),
        ];
        assert_eq!(average_coverage(&frameworks), 50);
    }

    #[test]
    fn average_rounds_half_up() {
        let frameworks = vec![
            framework("a", 0.25, FrameworkStatus::Active),
            framework("b", 0.0, FrameworkStatus::Active),
        ];
        // mean 0.125 → 12.5 → 13
        assert_eq!(average_coverage(&frameworks), 13);
    }

    #[test]
    fn empty_lists_yield_zero() {
        assert_eq!(average_coverage(&[]), 0);
        assert_eq!(count_with_guidance(&[]), 0);
    }

    #[test]
    fn guidance_excludes_only_no_guidance() {
        let frameworks = vec![
            framework("a", 0.7, FrameworkStatus::Active),
            framework("b", 0.4, FrameworkStatus::Applicable),
            framework("c", 0.1, FrameworkStatus::NoGuidance),
        ];
        assert_eq!(count_with_guidance(&frameworks), 2);
    }

    #[test]
    fn latest_change_is_last_by_position() {
        // Out of date order on purpose: position wins.
        let k = knowledge(
            vec![],
            vec![event("2025-03", "March release"), event("2024-11", "November draft")],
        );
        assert_eq!(latest_change(&k), "November draft");
    }

    #[test]
    fn latest_change_without_timeline() {
        let k = knowledge(vec![], vec![]);
        assert_eq!(latest_change(&k), "No change history available");
    }

    #[test]
    fn summary_collects_all_values() {
        let k = knowledge(
            vec![
                framework("a", 0.74, FrameworkStatus::Active),
                framework("b", 0.24, FrameworkStatus::NoGuidance),
            ],
            vec![event("2025-02", "Version 2 published")],
        );
        let summary = summarize(&k);
        assert_eq!(summary.framework_count, 2);
        assert_eq!(summary.average_coverage, 49);
        assert_eq!(summary.with_guidance, 1);
        assert_eq!(summary.by_status["active"], 1);
        assert_eq!(summary.by_status["applicable"], 0);
        assert_eq!(summary.by_status["no-guidance"], 1);
        assert_eq!(summary.latest_change, "Version 2 published");
    }
}
