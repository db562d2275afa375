use anyhow::bail;
use covera_schema::SchemaRegistry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `covera schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(name) = args.name.as_deref() else {
        return output(&registry.list(), flags);
    };

    let normalized = name.replace('-', "_");
    match registry.get(&normalized) {
        Some(schema) => output(schema, flags),
        None => bail!(
            "unknown schema '{name}' (available: {})",
            registry.list().join(", ")
        ),
    }
}
