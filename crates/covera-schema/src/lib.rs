//! # covera-schema
//!
//! JSON Schema generation, validation, and registry for Covera.
//!
//! This crate provides:
//! - `SchemaRegistry`: central store of all JSON Schemas in the system
//! - Validation of knowledge documents and CLI responses against those schemas
//! - Schema export for external tooling (`covera schema` command, editor plugins)
//!
//! ## Architecture
//!
//! Knowledge types are defined in `covera-core` with `#[derive(JsonSchema)]`.
//! This crate imports those types and provides the registry and validation layer.

pub mod error;
pub mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
