//! Snapshot file writer

use crate::atomic::atomic_write;
use crate::errors::Result;
use crate::snapshot_file::format_v1::SnapshotFileV1;
use sincecheck_core::errors::{ExError, ExErrorKind};
use sincecheck_core::Snapshot;
use std::path::Path;

/// Write `snapshot` as a v1 JSON snapshot file (temp file + rename)
pub fn write_snapshot_file(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let file = SnapshotFileV1::from_snapshot(snapshot);
    let mut content = serde_json::to_vec_pretty(&file).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("write_snapshot_file")
            .with_module(snapshot.module())
            .with_message(e.to_string())
    })?;
    content.push(b'\n');

    atomic_write(path, &content)
}
