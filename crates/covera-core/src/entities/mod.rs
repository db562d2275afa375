//! Entity structs for Covera knowledge objects.
//!
//! A [`KnowledgeObject`] is the unit of curated content: a review record, the
//! scored frameworks, per-framework detailed evaluations, a change timeline,
//! and display metadata. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` so the embedded data can be validated against generated schemas.

mod evaluation;
mod framework;
mod knowledge;
mod timeline;

pub use evaluation::{DetailedEvaluation, Scores};
pub use framework::Framework;
pub use knowledge::{KnowledgeMetadata, KnowledgeObject, ReviewRecord};
pub use timeline::TimelineEvent;
