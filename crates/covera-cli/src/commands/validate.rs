use anyhow::{Context, bail};
use covera_config::CoveraConfig;
use covera_core::entities::KnowledgeObject;
use covera_core::responses::ValidationResponse;
use covera_core::store::BUILTIN_DATA;
use covera_core::validation::{ValidationOptions, validate};
use covera_schema::{SchemaError, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ValidateArgs;
use crate::output::output;

/// Handle `covera validate`.
///
/// Works on the raw embedded document rather than the loaded store, so
/// objects the store would reject are still reported issue by issue.
pub fn handle(args: &ValidateArgs, config: &CoveraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let strict = args.strict || config.validation.strict;

    check_schema(BUILTIN_DATA)?;
    let objects: Vec<KnowledgeObject> =
        serde_json::from_str(BUILTIN_DATA).context("failed to parse embedded knowledge data")?;

    let response = run(&objects, args.id.as_deref(), &config.validation.options(), strict)?;
    output(&response, flags)?;

    if !response.passed {
        bail!(
            "validation failed: {} error(s), {} warning(s){}",
            response.errors,
            response.warnings,
            if strict { " (strict)" } else { "" }
        );
    }
    Ok(())
}

fn check_schema(document: &str) -> anyhow::Result<()> {
    match SchemaRegistry::new().validate_knowledge_document(document) {
        Ok(()) => Ok(()),
        Err(SchemaError::ValidationFailed { errors }) => {
            for error in &errors {
                tracing::error!(%error, "schema violation");
            }
            bail!(
                "embedded knowledge data does not match its schema ({} violation(s))",
                errors.len()
            )
        }
        Err(other) => Err(other.into()),
    }
}

fn run(
    objects: &[KnowledgeObject],
    id: Option<&str>,
    options: &ValidationOptions,
    strict: bool,
) -> anyhow::Result<ValidationResponse> {
    let selected = objects
        .iter()
        .filter(|object| id.is_none_or(|id| object.id == id))
        .collect::<Vec<_>>();

    if let Some(id) = id
        && selected.is_empty()
    {
        bail!("knowledge object '{id}' not found");
    }

    let reports = selected
        .into_iter()
        .map(|object| {
            let report = validate(object, options);
            tracing::debug!(
                knowledge_id = %object.id,
                issues = report.issues.len(),
                "validated knowledge object"
            );
            report
        })
        .collect();

    Ok(ValidationResponse::new(reports, strict))
}
