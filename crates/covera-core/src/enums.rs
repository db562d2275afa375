//! Status enums, score categories, and freshness tiers for Covera.
//!
//! Knowledge data uses lowercase serialization. `FrameworkStatus` keeps the
//! hyphenated `no-guidance` spelling of the authored data. `CriterionValue` is
//! a three-state outcome serialized as `true`, `false`, or `"unknown"`.

use std::borrow::Cow;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Confidence
// ---------------------------------------------------------------------------

/// Editorial confidence attached to a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FrameworkStatus
// ---------------------------------------------------------------------------

/// How a framework relates to AI security.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FrameworkStatus {
    /// Publishes guidance written specifically for AI systems.
    Active,
    /// General guidance that applies to AI systems without targeting them.
    Applicable,
    /// No usable AI guidance.
    NoGuidance,
}

impl FrameworkStatus {
    /// Whether the framework offers any AI guidance at all.
    #[must_use]
    pub const fn has_guidance(self) -> bool {
        !matches!(self, Self::NoGuidance)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Applicable => "applicable",
            Self::NoGuidance => "no-guidance",
        }
    }
}

impl fmt::Display for FrameworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CriterionValue
// ---------------------------------------------------------------------------

/// Outcome of a single scoring criterion in a detailed evaluation.
///
/// `Unknown` marks a criterion that cannot be evaluated yet (e.g. a draft that
/// has not been published). It contributes no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionValue {
    Met,
    NotMet,
    Unknown,
}

impl CriterionValue {
    #[must_use]
    pub const fn is_met(self) -> bool {
        matches!(self, Self::Met)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Met => "true",
            Self::NotMet => "false",
            Self::Unknown => "unknown",
        }
    }
}

impl From<bool> for CriterionValue {
    fn from(met: bool) -> Self {
        if met { Self::Met } else { Self::NotMet }
    }
}

impl fmt::Display for CriterionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CriterionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Met => serializer.serialize_bool(true),
            Self::NotMet => serializer.serialize_bool(false),
            Self::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for CriterionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Marker(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(met) => Ok(Self::from(met)),
            Repr::Marker(marker) if marker == "unknown" => Ok(Self::Unknown),
            Repr::Marker(other) => Err(serde::de::Error::custom(format!(
                "expected true, false, or \"unknown\", got \"{other}\""
            ))),
        }
    }
}

impl JsonSchema for CriterionValue {
    fn schema_name() -> Cow<'static, str> {
        "CriterionValue".into()
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "oneOf": [
                { "type": "boolean" },
                { "const": "unknown" }
            ]
        })
    }
}

// ---------------------------------------------------------------------------
// ScoreCategory
// ---------------------------------------------------------------------------

/// Scoring category of the evaluation rubric. Budgets sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    AiSpecific,
    Implementation,
    Governance,
    Currency,
}

impl ScoreCategory {
    pub const ALL: [Self; 4] = [
        Self::AiSpecific,
        Self::Implementation,
        Self::Governance,
        Self::Currency,
    ];

    /// Maximum points this category can contribute to a total.
    #[must_use]
    pub const fn budget(self) -> u32 {
        match self {
            Self::AiSpecific => 40,
            Self::Implementation => 30,
            Self::Governance => 20,
            Self::Currency => 10,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AiSpecific => "ai_specific",
            Self::Implementation => "implementation",
            Self::Governance => "governance",
            Self::Currency => "currency",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FreshnessTier
// ---------------------------------------------------------------------------

/// Age bucket of a knowledge snapshot relative to its validity window.
///
/// ```text
/// 0 ── 0.3·valid ── 0.7·valid ── valid ──▶
///   fresh      aging        stale     expired
/// ```
///
/// Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessTier {
    Fresh,
    Aging,
    Stale,
    Expired,
}

impl FreshnessTier {
    /// Classify `days_since` against a validity window of `valid_days`.
    ///
    /// Thresholds are compared in tenths of the window so that whole-day
    /// boundaries such as `0.7 * 90` stay exact.
    #[must_use]
    pub fn classify(days_since: f64, valid_days: u32) -> Self {
        let tenths = days_since * 10.0;
        let window = f64::from(valid_days);
        if tenths <= 3.0 * window {
            Self::Fresh
        } else if tenths <= 7.0 * window {
            Self::Aging
        } else if days_since <= window {
            Self::Stale
        } else {
            Self::Expired
        }
    }

    /// Numeric confidence attached to the tier.
    #[must_use]
    pub const fn confidence(self) -> f64 {
        match self {
            Self::Fresh => 1.0,
            Self::Aging => 0.7,
            Self::Stale => 0.5,
            Self::Expired => 0.3,
        }
    }

    /// Human-readable status line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fresh => "Fresh - high confidence",
            Self::Aging => "Aging - consider review",
            Self::Stale => "Stale - needs review",
            Self::Expired => "Expired - review required",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Aging => "aging",
            Self::Stale => "stale",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for FreshnessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
