//! Central schema registry for all Covera types.
//!
//! The `SchemaRegistry` builds JSON Schemas from covera-core types at
//! construction time using [`schemars::schema_for!`] and provides validation
//! via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Covera system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all knowledge, derived-result, and
    /// response schemas from covera-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Knowledge types (7) ---
        register!(
            schemas,
            "knowledge_object",
            covera_core::entities::KnowledgeObject
        );
        register!(schemas, "review_record", covera_core::entities::ReviewRecord);
        register!(
            schemas,
            "knowledge_metadata",
            covera_core::entities::KnowledgeMetadata
        );
        register!(schemas, "framework", covera_core::entities::Framework);
        register!(
            schemas,
            "detailed_evaluation",
            covera_core::entities::DetailedEvaluation
        );
        register!(schemas, "scores", covera_core::entities::Scores);
        register!(
            schemas,
            "timeline_event",
            covera_core::entities::TimelineEvent
        );

        // --- Derived results (3) ---
        register!(
            schemas,
            "confidence_status",
            covera_core::freshness::ConfidenceStatus
        );
        register!(
            schemas,
            "coverage_summary",
            covera_core::summary::CoverageSummary
        );
        register!(
            schemas,
            "validation_report",
            covera_core::validation::ValidationReport
        );

        // --- CLI response types (4) ---
        register!(
            schemas,
            "knowledge_list_entry",
            covera_core::responses::KnowledgeListEntry
        );
        register!(
            schemas,
            "status_response",
            covera_core::responses::StatusResponse
        );
        register!(schemas, "framework_row", covera_core::responses::FrameworkRow);
        register!(
            schemas,
            "validation_response",
            covera_core::responses::ValidationResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate a JSON document holding an array of knowledge objects.
    ///
    /// Errors from every element are collected, prefixed with the element index.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Json` if the document does not parse,
    /// `SchemaError::ValidationFailed` if it is not an array or any element fails.
    pub fn validate_knowledge_document(&self, json: &str) -> Result<(), SchemaError> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        let Some(items) = document.as_array() else {
            return Err(SchemaError::ValidationFailed {
                errors: vec!["knowledge document must be a JSON array".to_string()],
            });
        };

        let mut errors = Vec::new();
        for (index, item) in items.iter().enumerate() {
            match self.validate("knowledge_object", item) {
                Ok(()) => {}
                Err(SchemaError::ValidationFailed { errors: found }) => {
                    errors.extend(found.into_iter().map(|e| format!("[{index}] {e}")));
                }
                Err(other) => return Err(other),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use covera_core::entities::TimelineEvent;
    use covera_core::enums::Confidence;
    use covera_core::freshness::{FreshnessPolicy, confidence_status};
    use covera_core::store::{BUILTIN_DATA, KnowledgeStore};
    use pretty_assertions::assert_eq;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 7 knowledge + 3 derived + 4 responses = 14
        assert_eq!(registry().schema_count(), 14);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_existing_and_missing_schema() {
        let reg = registry();
        assert!(reg.get("knowledge_object").is_some());
        assert!(reg.get("status_response").is_some());
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn unknown_schema_name_is_not_found() {
        let result = registry().validate("nonexistent", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }

    #[test]
    fn validate_valid_timeline_event() {
        let event = TimelineEvent {
            date: "2024-11".into(),
            framework: "OWASP Top 10 for LLM Applications".into(),
            change: "2025 edition released".into(),
            confidence: Confidence::High,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert!(registry().validate("timeline_event", &json).is_ok());
    }

    #[test]
    fn validate_rejects_invalid_enum() {
        let invalid = serde_json::json!({
            "date": "2024-11",
            "framework": "OWASP",
            "change": "released",
            "confidence": "certain"
        });
        let result = registry().validate("timeline_event", &invalid);
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }

    #[test]
    fn validate_rejects_bad_criterion_value() {
        let reg = registry();
        let mut evaluation = serde_json::to_value(
            KnowledgeStore::builtin()
                .unwrap()
                .get("framework-coverage")
                .unwrap()
                .detailed_evaluation("mitre-atlas")
                .unwrap(),
        )
        .unwrap();
        assert!(reg.validate("detailed_evaluation", &evaluation).is_ok());

        evaluation["breakdown"]["model_theft"] = serde_json::json!("partially");
        assert!(reg.validate("detailed_evaluation", &evaluation).is_err());
    }

    #[test]
    fn builtin_document_validates() {
        assert!(registry().validate_knowledge_document(BUILTIN_DATA).is_ok());
    }

    #[test]
    fn non_array_document_is_rejected() {
        let result = registry().validate_knowledge_document("{}");
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }

    #[test]
    fn malformed_document_is_a_json_error() {
        let result = registry().validate_knowledge_document("[");
        assert!(matches!(result, Err(SchemaError::Json(_))));
    }

    #[test]
    fn element_errors_carry_index() {
        let result = registry().validate_knowledge_document(r#"[{"id": "broken"}]"#);
        let Err(SchemaError::ValidationFailed { errors }) = result else {
            panic!("expected ValidationFailed");
        };
        assert!(errors.iter().all(|e| e.starts_with("[0]")));
    }

    #[test]
    fn confidence_status_output_matches_schema() {
        let knowledge = KnowledgeStore::builtin()
            .unwrap()
            .get("framework-coverage")
            .unwrap();
        let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        let status = confidence_status(knowledge, now, &FreshnessPolicy::default()).unwrap();
        let json = serde_json::to_value(&status).unwrap();
        assert!(registry().validate("confidence_status", &json).is_ok());
    }
}
