//! # Personality Validation
//!
//! Runtime validation of MPF personality documents: an exact
//! `schema_version` check followed by JSON Schema validation (Draft
//! 2020-12) against the bundled MPF + JL extensions schema.
//!
//! ## Schema Resolution
//!
//! The schema is embedded at compile time with `include_str!`, so the
//! validator works identically from a build tree and an installed binary.
//! The schema is self-contained; its only `$ref`s are internal
//! `#/$defs/<name>` references, which the jsonschema crate resolves
//! natively.
//!
//! The embedded schema text is parsed and compiled on every call. The tool
//! is one-shot, so nothing is cached across calls.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::MpfError;

/// Expected value of the `schema_version` field.
pub const SCHEMA_VERSION: &str = "1.0";

/// The MPF + JL extensions schema, embedded at compile time.
const SCHEMA_JSON: &str = include_str!("../schema/mpf-jl-extensions-v1.json");

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Parse the embedded schema and compile a validator for it.
fn build_validator() -> Result<Validator, MpfError> {
    let schema: Value = serde_json::from_str(SCHEMA_JSON).map_err(|e| MpfError::SchemaResource {
        reason: format!("embedded schema is not valid JSON: {e}"),
    })?;

    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);

    opts.build(&schema).map_err(|e| MpfError::ValidatorBuild {
        reason: e.to_string(),
    })
}

/// Validate a parsed personality document.
///
/// Checks `schema_version` against [`SCHEMA_VERSION`] first; only a
/// document claiming the expected revision is validated structurally.
///
/// # Errors
///
/// Returns [`MpfError::VersionMismatch`] naming both the found and expected
/// values if `schema_version` differs (a missing field reports `(none)`).
/// Returns [`MpfError::ValidationFailed`] with structured violation details
/// if the document does not conform to the schema.
pub fn validate_personality(doc: &Value) -> Result<(), MpfError> {
    let found = doc.get("schema_version");
    if found.and_then(Value::as_str) != Some(SCHEMA_VERSION) {
        return Err(MpfError::VersionMismatch {
            found: match found {
                None => "(none)".to_string(),
                Some(v) => v.to_string(),
            },
            expected: SCHEMA_VERSION,
        });
    }

    let validator = build_validator()?;

    let violations: Vec<Violation> = validator
        .iter_errors(doc)
        .map(|e| Violation {
            instance_path: e.instance_path.to_string(),
            schema_path: e.schema_path.to_string(),
            message: e.to_string(),
        })
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(MpfError::ValidationFailed {
            violations: ValidationViolations { violations },
        })
    }
}
