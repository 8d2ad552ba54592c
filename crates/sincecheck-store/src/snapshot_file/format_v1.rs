//! Snapshot file format v1 data structures

use serde::{Deserialize, Serialize};

/// Root structure of a v1 snapshot file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SnapshotFileV1 {
    pub schema_version: u32,
    pub module: String,
    /// Absent when the file is version-neutral
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
}

/// One element entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElementRecord {
    pub kind: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<KeyRecord>,
}

/// Reference to another element of the same file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyRecord {
    pub kind: String,
    pub path: String,
}
