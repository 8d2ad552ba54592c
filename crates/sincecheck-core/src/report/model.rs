//! Report output types.

use crate::validate::Diagnostic;
use serde::{Deserialize, Serialize};
use sincecheck_core_types::RunId;

/// Outcome of one validation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckReport {
    /// Schema version of this report structure (always 1)
    pub report_schema_version: u32,
    pub run_id: RunId,
    pub module: String,
    /// One entry per analyzed version, ascending
    pub analyzed: Vec<SnapshotEntry>,
    pub verify: SnapshotEntry,
    /// Number of verify-snapshot elements examined
    pub elements_checked: usize,
    /// Mismatches in ascending qualified-path order
    pub diagnostics: Vec<Diagnostic>,
}

/// Identity of one loaded snapshot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub version: String,
    pub digest: String,
    pub elements: usize,
}

impl CheckReport {
    pub const SCHEMA_VERSION: u32 = 1;

    /// True when no diagnostic was produced
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics rendered in the consumer line format
    pub fn lines(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Count of diagnostics for elements with no declared tag
    pub fn missing_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_missing()).count()
    }
}
