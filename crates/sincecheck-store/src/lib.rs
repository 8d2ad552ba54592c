//! sincecheck store - file-backed snapshot loading
//!
//! Provides:
//! - Snapshot file format v1 (JSON or YAML) with parsing and validation
//! - Atomic snapshot writer
//! - `FsSnapshotLoader`, resolving snapshot files from module path entries

pub mod atomic;
pub mod errors;
pub mod fs_loader;
pub mod snapshot_file;

// Re-export key types
pub use errors::Result;
pub use fs_loader::FsSnapshotLoader;
pub use snapshot_file::{parse_snapshot_file, parse_snapshot_str, write_snapshot_file, FileFormat};
