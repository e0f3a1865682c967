//! # mpf-schema — MPF Personality Loading & Validation
//!
//! Library half of the `mpf` tool. Loads MPF (Modular Personality Format)
//! personality files and validates them against the bundled MPF + JL
//! extensions schema.
//!
//! ## Validation (`validate`)
//!
//! [`validate::validate_personality`] checks a document in two steps:
//!
//! 1. The `schema_version` field must equal [`validate::SCHEMA_VERSION`]
//!    exactly. Mismatch (or absence) fails before any structural check.
//! 2. The full document is validated against the embedded JSON Schema
//!    (Draft 2020-12). Violations are reported with instance path, schema
//!    path, and message.
//!
//! The schema is embedded into the binary with `include_str!`, so there is
//! no runtime schema path to resolve and no separate schema distribution.
//!
//! ## Crate Policy
//!
//! - Documents stay generic `serde_json::Value`s; the schema is the only
//!   source of truth for document shape.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod loader;
pub mod validate;

pub use error::MpfError;
pub use loader::load_personality;
pub use validate::{validate_personality, ValidationViolations, Violation, SCHEMA_VERSION};
