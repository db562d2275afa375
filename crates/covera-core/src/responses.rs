//! CLI response types returned as JSON by `covera` commands.
//!
//! These structs define the shape of JSON output for `covera list`,
//! `covera status`, `covera frameworks`, and `covera validate`. `covera summary`
//! returns [`crate::summary::CoverageSummary`] directly.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Framework, KnowledgeObject};
use crate::errors::CoreError;
use crate::freshness::ConfidenceStatus;
use crate::validation::ValidationReport;

/// Status line shown when confidence cannot be derived.
pub const UNKNOWN_CONFIDENCE: &str = "Unknown confidence";

/// One row of `covera list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct KnowledgeListEntry {
    pub id: String,
    pub name: String,
    pub version: String,
    pub category: String,
    pub frameworks: usize,
    pub reviewed_at: DateTime<Utc>,
    pub reviewed_by: String,
}

impl From<&KnowledgeObject> for KnowledgeListEntry {
    fn from(knowledge: &KnowledgeObject) -> Self {
        Self {
            id: knowledge.id.clone(),
            name: knowledge.name.clone(),
            version: knowledge.version.clone(),
            category: knowledge.metadata.category.clone(),
            frameworks: knowledge.frameworks.len(),
            reviewed_at: knowledge.evaluation.date,
            reviewed_by: knowledge.evaluation.by.clone(),
        }
    }
}

/// Response from `covera status`.
///
/// A freshness error does not fail the command; it degrades to
/// [`UNKNOWN_CONFIDENCE`] with the reason in `confidence_error`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatusResponse {
    pub knowledge_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub status: String,
    pub confidence: Option<ConfidenceStatus>,
    pub confidence_error: Option<String>,
    /// Review-date based staleness, independent of `confidence`.
    pub is_stale: bool,
}

impl StatusResponse {
    #[must_use]
    pub fn new(
        knowledge_id: &str,
        evaluated_at: DateTime<Utc>,
        confidence: Result<ConfidenceStatus, CoreError>,
        is_stale: bool,
    ) -> Self {
        let (status, confidence, confidence_error) = match confidence {
            Ok(found) => (found.status.clone(), Some(found), None),
            Err(err) => (UNKNOWN_CONFIDENCE.to_string(), None, Some(err.to_string())),
        };
        Self {
            knowledge_id: knowledge_id.to_string(),
            evaluated_at,
            status,
            confidence,
            confidence_error,
            is_stale,
        }
    }
}

/// One row of `covera frameworks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FrameworkRow {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub coverage: u32,
    pub status: String,
    pub last_update: String,
    pub gaps: usize,
    pub total: Option<u32>,
    pub unknown_criteria: usize,
}

impl FrameworkRow {
    #[must_use]
    pub fn new(knowledge: &KnowledgeObject, framework: &Framework) -> Self {
        let evaluation = knowledge.detailed_evaluation(&framework.id);
        Self {
            id: framework.id.clone(),
            name: framework.name.clone(),
            organization: framework.organization.clone(),
            coverage: framework.coverage_percent(),
            status: framework.status.to_string(),
            last_update: framework.last_framework_update.clone(),
            gaps: framework.gaps.len(),
            total: evaluation.map(|e| e.scores.total),
            unknown_criteria: evaluation.map_or(0, |e| e.unknown_criteria().count()),
        }
    }
}

/// Response from `covera validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationResponse {
    pub strict: bool,
    pub passed: bool,
    pub errors: usize,
    pub warnings: usize,
    pub reports: Vec<ValidationReport>,
}

impl ValidationResponse {
    #[must_use]
    pub fn new(reports: Vec<ValidationReport>, strict: bool) -> Self {
        let errors = reports.iter().map(|r| r.errors().count()).sum();
        let warnings = reports.iter().map(|r| r.warnings().count()).sum();
        let passed = errors == 0 && (!strict || warnings == 0);
        Self {
            strict,
            passed,
            errors,
            warnings,
            reports,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::validation::{IssueCode, Severity, ValidationIssue};

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn status_degrades_to_unknown_on_error() {
        let response = StatusResponse::new(
            "kb",
            at(),
            Err(CoreError::EmptyEvaluationSet {
                knowledge_id: "kb".into(),
            }),
            true,
        );
        assert_eq!(response.status, UNKNOWN_CONFIDENCE);
        assert!(response.confidence.is_none());
        assert!(
            response
                .confidence_error
                .as_deref()
                .is_some_and(|e| e.contains("no detailed evaluations"))
        );
    }

    fn report(codes: &[IssueCode]) -> ValidationReport {
        ValidationReport {
            knowledge_id: "kb".into(),
            issues: codes
                .iter()
                .map(|code| ValidationIssue {
                    severity: code.severity(),
                    code: *code,
                    subject: "x".into(),
                    message: "m".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn warnings_pass_unless_strict() {
        let lenient = ValidationResponse::new(vec![report(&[IssueCode::TimelineOrder])], false);
        assert!(lenient.passed);
        assert_eq!(lenient.warnings, 1);

        let strict = ValidationResponse::new(vec![report(&[IssueCode::TimelineOrder])], true);
        assert!(!strict.passed);
    }

    #[test]
    fn errors_always_fail() {
        let response = ValidationResponse::new(vec![report(&[IssueCode::MalformedTotal])], false);
        assert!(!response.passed);
        assert_eq!(response.errors, 1);
        assert_eq!(IssueCode::MalformedTotal.severity(), Severity::Error);
    }
}
