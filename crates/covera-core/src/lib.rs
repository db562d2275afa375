//! # covera-core
//!
//! Knowledge objects and the rules derived from them for Covera.
//!
//! This crate provides the foundational types and pure functions shared by the
//! other Covera crates:
//! - Entity structs for knowledge objects, frameworks, detailed evaluations, and timelines
//! - Enums for framework status, timeline confidence, and criterion outcomes
//! - The scoring criteria catalog and breakdown scoring
//! - Freshness classification (`confidence_status`, `is_stale`)
//! - Summary aggregation (average coverage, guidance count, latest change)
//! - Editorial integrity validation
//! - The embedded, read-only knowledge store
//! - Cross-cutting error types and CLI response types

pub mod criteria;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod freshness;
pub mod responses;
pub mod store;
pub mod summary;
pub mod validation;

pub use errors::CoreError;
