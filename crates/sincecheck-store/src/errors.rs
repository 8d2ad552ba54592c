//! Error handling for sincecheck-store
//!
//! Wraps sincecheck-core ExError with store-specific helpers

use sincecheck_core::errors::{ExError, ExErrorKind};
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Snapshot file could not be parsed or fails validation
pub fn snapshot_parse_error(path: Option<&Path>, reason: &str) -> ExError {
    let message = match path {
        Some(p) => format!("{}: {}", p.display(), reason),
        None => reason.to_string(),
    };
    ExError::new(ExErrorKind::LoaderFailure)
        .with_op("snapshot_parse")
        .with_message(message)
}

/// Snapshot file declares a schema version this build does not read
pub fn unsupported_schema(found: u32) -> ExError {
    ExError::new(ExErrorKind::UnsupportedSchema)
        .with_op("snapshot_parse")
        .with_message(format!(
            "Unsupported schema_version: {}. Expected 1",
            found
        ))
}

/// No snapshot file found for a module/version
pub fn snapshot_not_found(module: &str, version: &str, searched: &[String]) -> ExError {
    ExError::new(ExErrorKind::NotFound)
        .with_op("resolve_snapshot")
        .with_module(module)
        .with_version(version)
        .with_message(format!(
            "no snapshot file found (searched: {})",
            if searched.is_empty() {
                "<no directories configured>".to_string()
            } else {
                searched.join(", ")
            }
        ))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
