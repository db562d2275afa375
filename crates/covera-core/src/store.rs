//! The embedded, read-only knowledge store.
//!
//! Knowledge objects ship inside the binary as a JSON document. The document
//! is parsed and validated once, on first access, and shared as `&'static`
//! for the rest of the process. Nothing writes to it afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::entities::KnowledgeObject;
use crate::errors::CoreError;
use crate::validation::{ValidationIssue, ValidationOptions, validate};

/// Knowledge objects compiled into the binary.
///
/// [`KnowledgeStore::builtin`] loads it with the default [`ValidationOptions`];
/// run [`validate`] directly to apply a configured tolerance.
pub const BUILTIN_DATA: &str = include_str!("../data/knowledge.json");

static BUILTIN: LazyLock<Result<KnowledgeStore, String>> =
    LazyLock::new(|| KnowledgeStore::from_json(BUILTIN_DATA).map_err(|err| err.to_string()));

/// An immutable collection of knowledge objects.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    objects: Vec<KnowledgeObject>,
    warnings: Vec<ValidationIssue>,
}

impl KnowledgeStore {
    /// The store built from [`BUILTIN_DATA`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the embedded data failed to parse
    /// or validate. The failure is cached; every call reports it.
    pub fn builtin() -> Result<&'static Self, CoreError> {
        BUILTIN
            .as_ref()
            .map_err(|reason| CoreError::Validation(format!("embedded knowledge data: {reason}")))
    }

    /// Parse a JSON array of knowledge objects.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Parse`] on malformed JSON, or the errors of
    /// [`KnowledgeStore::from_objects`].
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Self::from_json_with(json, &ValidationOptions::default())
    }

    /// [`KnowledgeStore::from_json`] with explicit validation options.
    ///
    /// # Errors
    ///
    /// See [`KnowledgeStore::from_json`].
    pub fn from_json_with(json: &str, options: &ValidationOptions) -> Result<Self, CoreError> {
        let objects: Vec<KnowledgeObject> = serde_json::from_str(json)?;
        Self::from_objects_with(objects, options)
    }

    /// Build a store, rejecting duplicate ids and objects with validation errors.
    ///
    /// Validation warnings are logged and do not prevent loading.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on duplicate ids, or
    /// [`CoreError::InvalidKnowledge`] for the first object with errors.
    pub fn from_objects(objects: Vec<KnowledgeObject>) -> Result<Self, CoreError> {
        Self::from_objects_with(objects, &ValidationOptions::default())
    }

    /// [`KnowledgeStore::from_objects`] with explicit validation options.
    ///
    /// # Errors
    ///
    /// See [`KnowledgeStore::from_objects`].
    pub fn from_objects_with(
        objects: Vec<KnowledgeObject>,
        options: &ValidationOptions,
    ) -> Result<Self, CoreError> {
        let mut ids = HashSet::new();
        for object in &objects {
            if !ids.insert(object.id.as_str()) {
                return Err(CoreError::Validation(format!(
                    "duplicate knowledge object id '{}'",
                    object.id
                )));
            }
        }

        let mut warnings = Vec::new();
        for object in &objects {
            let report = validate(object, options);
            for warning in report.warnings() {
                tracing::warn!(knowledge_id = %object.id, code = ?warning.code, "{warning}");
                warnings.push(warning.clone());
            }
            report.into_result(false)?;
        }

        tracing::debug!(
            count = objects.len(),
            warnings = warnings.len(),
            "knowledge store loaded"
        );
        Ok(Self { objects, warnings })
    }

    /// Look up a knowledge object by id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no object has that id.
    pub fn get(&self, id: &str) -> Result<&KnowledgeObject, CoreError> {
        self.objects
            .iter()
            .find(|object| object.id == id)
            .ok_or_else(|| CoreError::NotFound {
                entity_type: "knowledge".to_string(),
                id: id.to_string(),
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnowledgeObject> {
        self.objects.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|object| object.id.as_str())
    }

    /// Validation warnings recorded while loading.
    #[must_use]
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::IssueCode;

    #[test]
    fn builtin_store_loads() {
        let store = KnowledgeStore::builtin().expect("embedded data should load");
        assert!(!store.is_empty());
        assert!(store.get("framework-coverage").is_ok());
    }

    #[test]
    fn builtin_is_shared() {
        let first = KnowledgeStore::builtin().unwrap();
        let second = KnowledgeStore::builtin().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = KnowledgeStore::builtin().unwrap();
        let err = store.get("nope").unwrap_err();
        assert!(matches!(err, CoreError::NotFound { ref id, .. } if id == "nope"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = KnowledgeStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Parse(_)));
    }

    #[test]
    fn empty_array_is_an_empty_store() {
        let store = KnowledgeStore::from_json("[]").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let store = KnowledgeStore::builtin().unwrap();
        let object = store.get("framework-coverage").unwrap().clone();
        let err = KnowledgeStore::from_objects(vec![object.clone(), object]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn builtin_loads_without_warnings() {
        assert!(KnowledgeStore::builtin().unwrap().warnings().is_empty());
    }

    #[test]
    fn load_options_set_coverage_tolerance() {
        let store = KnowledgeStore::builtin().unwrap();
        let mut object = store.get("framework-coverage").unwrap().clone();
        object.frameworks[0].ai_coverage_score += 0.02;

        let strict_tolerance =
            KnowledgeStore::from_objects(vec![object.clone()]).expect("warnings do not reject");
        assert_eq!(strict_tolerance.warnings().len(), 1);
        assert_eq!(strict_tolerance.warnings()[0].code, IssueCode::CoverageMismatch);

        let loose = ValidationOptions {
            coverage_tolerance: 0.05,
        };
        let relaxed = KnowledgeStore::from_objects_with(vec![object], &loose)
            .expect("warnings do not reject");
        assert!(relaxed.warnings().is_empty());
    }

    #[test]
    fn objects_with_errors_are_rejected() {
        let store = KnowledgeStore::builtin().unwrap();
        let mut object = store.get("framework-coverage").unwrap().clone();
        object
            .detailed_evaluations
            .values_mut()
            .next()
            .unwrap()
            .scores
            .total += 1;
        let err = KnowledgeStore::from_objects(vec![object]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidKnowledge { .. }));
    }
}
