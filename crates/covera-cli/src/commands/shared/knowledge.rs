use covera_config::CoveraConfig;
use covera_core::entities::KnowledgeObject;
use covera_core::store::KnowledgeStore;

/// Resolve the knowledge object a command targets.
///
/// Falls back to `general.default_knowledge` when no id is given.
pub fn resolve<'a>(
    store: &'a KnowledgeStore,
    id: Option<&str>,
    config: &CoveraConfig,
) -> anyhow::Result<&'a KnowledgeObject> {
    let id = id.unwrap_or(config.general.default_knowledge.as_str());
    store.get(id).map_err(|error| {
        let known = store.ids().collect::<Vec<_>>().join(", ");
        anyhow::anyhow!("{error} (available: {known})")
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use covera_config::CoveraConfig;
    use covera_core::store::KnowledgeStore;

    #[test]
    fn missing_id_uses_configured_default() {
        let store = KnowledgeStore::builtin().expect("embedded data should load");
        let knowledge = resolve(store, None, &CoveraConfig::default()).expect("default resolves");
        assert_eq!(knowledge.id, "framework-coverage");
    }

    #[test]
    fn unknown_id_lists_available_objects() {
        let store = KnowledgeStore::builtin().expect("embedded data should load");
        let err = resolve(store, Some("nope"), &CoveraConfig::default()).expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("nope"));
        assert!(message.contains("framework-coverage"));
    }
}
