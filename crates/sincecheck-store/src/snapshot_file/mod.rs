//! Snapshot files: on-disk form of one module's API at one version

pub mod format_v1;
pub mod parser;
pub mod writer;

pub use format_v1::{ElementRecord, KeyRecord, SnapshotFileV1};
pub use parser::{parse_snapshot_file, parse_snapshot_str, FileFormat};
pub use writer::write_snapshot_file;
