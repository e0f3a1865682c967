//! Error types for personality loading and validation.

use thiserror::Error;

use crate::validate::ValidationViolations;

/// Error raised while loading or validating a personality document.
#[derive(Error, Debug)]
pub enum MpfError {
    /// The document file could not be read or parsed as JSON.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The document's `schema_version` does not match the expected revision.
    #[error("unexpected schema_version: {found} (expected \"{expected}\")")]
    VersionMismatch {
        /// The value found in the document, or `(none)` if absent.
        found: String,
        /// The expected schema version constant.
        expected: &'static str,
    },

    /// The embedded schema could not be parsed as JSON.
    #[error("schema resource error: {reason}")]
    SchemaResource {
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The embedded schema could not be compiled into a validator.
    #[error("validator build error: {reason}")]
    ValidatorBuild {
        /// Reason the validator could not be built.
        reason: String,
    },

    /// The document did not conform to the MPF schema.
    #[error("personality does not conform to the MPF schema:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },
}
