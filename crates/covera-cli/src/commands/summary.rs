use covera_config::CoveraConfig;
use covera_core::store::KnowledgeStore;
use covera_core::summary::summarize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TargetArgs;
use crate::commands::shared::knowledge::resolve;
use crate::output::output;

/// Handle `covera summary`.
pub fn handle(args: &TargetArgs, config: &CoveraConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = KnowledgeStore::builtin()?;
    let knowledge = resolve(store, args.id.as_deref(), config)?;
    output(&summarize(knowledge), flags)
}
