//! # Personality Loading
//!
//! Reads MPF personality files from disk and parses them as JSON.

use std::path::Path;

use serde_json::Value;

use crate::error::MpfError;

/// Load a personality document from `path`.
///
/// Reads the file as UTF-8 text and parses it as JSON. The result is not
/// type-checked here; the schema decides whether the shape is acceptable.
///
/// # Errors
///
/// Returns [`MpfError::DocumentLoad`] if the file cannot be read or its
/// contents are not well-formed JSON.
pub fn load_personality(path: &Path) -> Result<Value, MpfError> {
    let content = std::fs::read_to_string(path).map_err(|e| MpfError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;

    serde_json::from_str(&content).map_err(|e| MpfError::DocumentLoad {
        path: path.display().to_string(),
        reason: format!("invalid JSON: {e}"),
    })
}
