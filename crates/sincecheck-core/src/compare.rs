//! Version Comparator.
//!
//! Walks snapshots in ascending version order and records, for every
//! element key, the first version at which it was observed. Earliest
//! sighting wins: an element that disappears and reappears keeps its
//! original first appearance.

use crate::errors::{Result, SinceError};
use crate::model::element::ElementKey;
use crate::model::snapshot::Snapshot;
use crate::model::version::Version;
use std::collections::BTreeMap;

/// Earliest analyzed version per element key, for one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirstAppearance {
    entries: BTreeMap<ElementKey, Version>,
}

impl FirstAppearance {
    pub fn get(&self, key: &ElementKey) -> Option<&Version> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &Version)> {
        self.entries.iter()
    }

    /// Keys first observed at `version`, in ascending key order
    pub fn introduced_in(&self, version: &Version) -> Vec<&ElementKey> {
        self.entries
            .iter()
            .filter(|(_, v)| *v == version)
            .map(|(k, _)| k)
            .collect()
    }
}

/// Compute the first-appearance map over snapshots given in ascending
/// version order.
///
/// # Errors
///
/// - `EmptyVersionSeries`: no snapshots
/// - `SnapshotOrderViolation`: versions not strictly increasing
/// - `ModuleMismatch`: snapshots describe different modules
pub fn compute_first_appearance(snapshots: &[Snapshot]) -> Result<FirstAppearance> {
    let first = snapshots.first().ok_or(SinceError::EmptyVersionSeries)?;

    for pair in snapshots.windows(2) {
        if pair[1].version() <= pair[0].version() {
            return Err(SinceError::SnapshotOrderViolation {
                previous: pair[0].version().to_string(),
                next: pair[1].version().to_string(),
            });
        }
    }

    let mut entries: BTreeMap<ElementKey, Version> = BTreeMap::new();
    for snapshot in snapshots {
        if snapshot.module() != first.module() {
            return Err(SinceError::ModuleMismatch {
                expected: first.module().to_string(),
                found: snapshot.module().to_string(),
            });
        }
        for key in snapshot.keys() {
            if !entries.contains_key(key) {
                entries.insert(key.clone(), snapshot.version().clone());
            }
        }
    }

    Ok(FirstAppearance { entries })
}
