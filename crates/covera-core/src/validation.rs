//! Editorial integrity checks over a knowledge object.
//!
//! Knowledge objects are hand-authored, so the relationships between their
//! parts (score totals, category budgets, breakdown vs. catalog, coverage vs.
//! total) are only as good as the last edit. [`validate`] collects every
//! violation into a [`ValidationReport`] instead of stopping at the first one.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::criteria::{CATALOG, criterion_named, score_breakdown};
use crate::entities::{DetailedEvaluation, Framework, KnowledgeObject};
use crate::enums::ScoreCategory;
use crate::errors::CoreError;

/// Default allowed difference between `ai_coverage_score` and `total / 100`.
pub const DEFAULT_COVERAGE_TOLERANCE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    DuplicateFramework,
    CoverageOutOfRange,
    CoverageMismatch,
    MissingEvaluation,
    DanglingEvaluation,
    MalformedTotal,
    OverBudget,
    UnknownCriterion,
    MissingCriterion,
    BreakdownMismatch,
    BadDate,
    TimelineOrder,
    ReferenceDatesDiverge,
}

impl IssueCode {
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::CoverageMismatch
            | Self::MissingEvaluation
            | Self::TimelineOrder
            | Self::ReferenceDatesDiverge => Severity::Warning,
            _ => Severity::Error,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateFramework => "duplicate_framework",
            Self::CoverageOutOfRange => "coverage_out_of_range",
            Self::CoverageMismatch => "coverage_mismatch",
            Self::MissingEvaluation => "missing_evaluation",
            Self::DanglingEvaluation => "dangling_evaluation",
            Self::MalformedTotal => "malformed_total",
            Self::OverBudget => "over_budget",
            Self::UnknownCriterion => "unknown_criterion",
            Self::MissingCriterion => "missing_criterion",
            Self::BreakdownMismatch => "breakdown_mismatch",
            Self::BadDate => "bad_date",
            Self::TimelineOrder => "timeline_order",
            Self::ReferenceDatesDiverge => "reference_dates_diverge",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding of the validator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub code: IssueCode,
    /// What the issue is about (framework id, timeline index, ...).
    pub subject: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.message)
    }
}

/// Tunables for [`validate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationOptions {
    pub coverage_tolerance: f64,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            coverage_tolerance: DEFAULT_COVERAGE_TOLERANCE,
        }
    }
}

/// Every issue found in one knowledge object.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationReport {
    pub knowledge_id: String,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }

    /// Fail on errors, or on any issue when `strict`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidKnowledge`] listing the offending issues.
    pub fn into_result(self, strict: bool) -> Result<(), CoreError> {
        let failing: Vec<String> = self
            .issues
            .iter()
            .filter(|issue| strict || issue.severity == Severity::Error)
            .map(ToString::to_string)
            .collect();
        if failing.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidKnowledge {
                knowledge_id: self.knowledge_id,
                issues: failing,
            })
        }
    }
}

struct Collector {
    issues: Vec<ValidationIssue>,
}

impl Collector {
    fn push(&mut self, code: IssueCode, subject: impl Into<String>, message: impl Into<String>) {
        self.issues.push(ValidationIssue {
            severity: code.severity(),
            code,
            subject: subject.into(),
            message: message.into(),
        });
    }
}

/// Parse a `YYYY-MM` month into its first day.
#[must_use]
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    if value.len() != 7 {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").ok()
}

/// Parse a timeline date, `YYYY-MM-DD` or `YYYY-MM`.
#[must_use]
pub fn parse_timeline_date(value: &str) -> Option<NaiveDate> {
    if value.len() == 10 {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
    } else {
        parse_year_month(value)
    }
}

/// Run every integrity check against `knowledge`.
#[must_use]
pub fn validate(knowledge: &KnowledgeObject, options: &ValidationOptions) -> ValidationReport {
    let mut out = Collector { issues: Vec::new() };

    check_frameworks(knowledge, options, &mut out);
    for (key, evaluation) in &knowledge.detailed_evaluations {
        check_evaluation(knowledge, key, evaluation, &mut out);
    }
    check_timeline(knowledge, &mut out);
    check_reference_dates(knowledge, &mut out);

    if !out.issues.is_empty() {
        tracing::debug!(
            knowledge_id = %knowledge.id,
            issues = out.issues.len(),
            "validation found issues"
        );
    }

    ValidationReport {
        knowledge_id: knowledge.id.clone(),
        issues: out.issues,
    }
}

fn check_frameworks(knowledge: &KnowledgeObject, options: &ValidationOptions, out: &mut Collector) {
    let mut seen = HashSet::new();
    for framework in &knowledge.frameworks {
        if !seen.insert(framework.id.as_str()) {
            out.push(
                IssueCode::DuplicateFramework,
                &framework.id,
                "framework id appears more than once",
            );
        }

        if !(0.0..=1.0).contains(&framework.ai_coverage_score) {
            out.push(
                IssueCode::CoverageOutOfRange,
                &framework.id,
                format!(
                    "ai_coverage_score {} is outside [0, 1]",
                    framework.ai_coverage_score
                ),
            );
        }

        if parse_year_month(&framework.last_framework_update).is_none() {
            out.push(
                IssueCode::BadDate,
                &framework.id,
                format!(
                    "last_framework_update '{}' is not YYYY-MM",
                    framework.last_framework_update
                ),
            );
        }

        match knowledge.detailed_evaluation(&framework.id) {
            Some(evaluation) => check_coverage(framework, evaluation, options, out),
            None => out.push(
                IssueCode::MissingEvaluation,
                &framework.id,
                "framework has no detailed evaluation",
            ),
        }
    }
}

fn check_coverage(
    framework: &Framework,
    evaluation: &DetailedEvaluation,
    options: &ValidationOptions,
    out: &mut Collector,
) {
    let expected = f64::from(evaluation.scores.total) / 100.0;
    if (framework.ai_coverage_score - expected).abs() > options.coverage_tolerance {
        out.push(
            IssueCode::CoverageMismatch,
            &framework.id,
            format!(
                "ai_coverage_score {} does not match scores.total {} / 100",
                framework.ai_coverage_score, evaluation.scores.total
            ),
        );
    }
}

fn check_evaluation(
    knowledge: &KnowledgeObject,
    key: &str,
    evaluation: &DetailedEvaluation,
    out: &mut Collector,
) {
    if knowledge.framework(key).is_none() {
        out.push(
            IssueCode::DanglingEvaluation,
            key,
            "detailed evaluation has no matching framework",
        );
    }

    if let Err(err) = evaluation.scores.verify_total(&evaluation.framework_name) {
        out.push(IssueCode::MalformedTotal, key, err.to_string());
    }

    for category in ScoreCategory::ALL {
        let score = evaluation.scores.get(category);
        if score > category.budget() {
            out.push(
                IssueCode::OverBudget,
                key,
                format!(
                    "{category} score {score} exceeds budget {}",
                    category.budget()
                ),
            );
        }
    }

    for name in evaluation.breakdown.keys() {
        if criterion_named(name).is_none() {
            out.push(
                IssueCode::UnknownCriterion,
                key,
                format!("breakdown names unknown criterion '{name}'"),
            );
        }
    }
    for criterion in &CATALOG {
        if !evaluation.breakdown.contains_key(criterion.name) {
            out.push(
                IssueCode::MissingCriterion,
                key,
                format!("breakdown is missing criterion '{}'", criterion.name),
            );
        }
    }

    let derived = score_breakdown(&evaluation.breakdown);
    for category in ScoreCategory::ALL {
        let authored = evaluation.scores.get(category);
        let computed = derived.get(category);
        if authored != computed {
            out.push(
                IssueCode::BreakdownMismatch,
                key,
                format!("{category} score is {authored} but breakdown yields {computed}"),
            );
        }
    }
}

fn check_timeline(knowledge: &KnowledgeObject, out: &mut Collector) {
    let mut previous: Option<NaiveDate> = None;
    for (index, event) in knowledge.timeline.iter().enumerate() {
        let subject = format!("timeline[{index}]");
        let Some(date) = parse_timeline_date(&event.date) else {
            out.push(
                IssueCode::BadDate,
                subject,
                format!("date '{}' is not YYYY-MM or YYYY-MM-DD", event.date),
            );
            continue;
        };
        if previous.is_some_and(|prev| date < prev) {
            out.push(
                IssueCode::TimelineOrder,
                subject,
                format!("'{}' is earlier than the entry before it", event.date),
            );
        }
        previous = Some(date);
    }
}

fn check_reference_dates(knowledge: &KnowledgeObject, out: &mut Collector) {
    let Some(latest) = knowledge.latest_evaluation_date() else {
        return;
    };
    let review = knowledge.evaluation.date;
    if latest.date_naive() != review.date_naive() {
        out.push(
            IssueCode::ReferenceDatesDiverge,
            "evaluation.date",
            format!(
                "review date {} differs from latest detailed evaluation {}; staleness and confidence are measured from different dates",
                review.date_naive(),
                latest.date_naive()
            ),
        );
    }
}
