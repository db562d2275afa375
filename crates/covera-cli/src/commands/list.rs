use covera_core::responses::KnowledgeListEntry;
use covera_core::store::KnowledgeStore;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `covera list`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let store = KnowledgeStore::builtin()?;
    let rows = store.iter().map(KnowledgeListEntry::from).collect::<Vec<_>>();
    output(&rows, flags)
}
