use covera_config::CoveraConfig;
use covera_core::entities::KnowledgeObject;
use covera_core::enums::FrameworkStatus;
use covera_core::responses::FrameworkRow;
use covera_core::store::KnowledgeStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FrameworksArgs;
use crate::commands::shared::knowledge::resolve;
use crate::commands::shared::parse::parse_enum;
use crate::output::output;

/// Handle `covera frameworks`.
pub fn handle(
    args: &FrameworksArgs,
    config: &CoveraConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let store = KnowledgeStore::builtin()?;
    let knowledge = resolve(store, args.id.as_deref(), config)?;
    let status = args
        .status
        .as_deref()
        .map(|raw| parse_enum::<FrameworkStatus>(raw, "status"))
        .transpose()?;

    output(&rows(knowledge, status), flags)
}

fn rows(knowledge: &KnowledgeObject, status: Option<FrameworkStatus>) -> Vec<FrameworkRow> {
    knowledge
        .frameworks
        .iter()
        .filter(|framework| status.is_none_or(|status| framework.status == status))
        .map(|framework| FrameworkRow::new(knowledge, framework))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn builtin() -> &'static KnowledgeObject {
        KnowledgeStore::builtin()
            .expect("embedded data should load")
            .get("framework-coverage")
            .expect("builtin object")
    }

    #[test]
    fn rows_keep_declaration_order() {
        let ids = rows(builtin(), None)
            .into_iter()
            .map(|row| row.id)
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "owasp-llm-top10",
                "nist-ai-rmf",
                "iso-42001",
                "mitre-atlas",
                "cis-controls"
            ]
        );
    }

    #[test]
    fn status_filter_narrows_rows() {
        let rows = rows(builtin(), Some(FrameworkStatus::NoGuidance));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "cis-controls");
        assert_eq!(rows[0].coverage, 23);
        assert_eq!(rows[0].unknown_criteria, 1);
    }
}
