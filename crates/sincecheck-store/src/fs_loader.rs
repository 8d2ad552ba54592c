//! Filesystem snapshot loader
//!
//! Resolves `<dir>/<module>.snapshot.{json,yaml,yml}` in the request's
//! module path entries. Verify requests also search the source path,
//! after the module path. First match wins.

use crate::errors::{snapshot_not_found, Result};
use crate::snapshot_file::parse_snapshot_file;
use sincecheck_core::errors::{ExError, ExErrorKind};
use sincecheck_core::{
    log_op_end, log_op_error, log_op_start, LoadPurpose, LoadRequest, Snapshot, SnapshotLoader,
    Version,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

const EXTENSIONS: [&str; 3] = ["json", "yaml", "yml"];

/// Loads snapshots from snapshot files on disk
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSnapshotLoader;

impl FsSnapshotLoader {
    pub fn new() -> Self {
        Self
    }

    /// Directories searched for `request`, in order
    pub fn search_dirs<'a>(&self, request: &LoadRequest<'a>) -> Vec<&'a Path> {
        let mut dirs: Vec<&Path> = request
            .options
            .module_path
            .iter()
            .map(PathBuf::as_path)
            .collect();
        if request.purpose == LoadPurpose::Verify {
            dirs.extend(request.source_path.iter().map(PathBuf::as_path));
        }
        dirs
    }

    /// Path of the snapshot file serving `request`
    ///
    /// # Errors
    ///
    /// `NotFound` when no searched directory holds a snapshot file for the
    /// module.
    pub fn resolve(&self, request: &LoadRequest<'_>) -> Result<PathBuf> {
        let dirs = self.search_dirs(request);
        for dir in &dirs {
            for ext in EXTENSIONS {
                let candidate = dir.join(format!("{}.snapshot.{}", request.module_name, ext));
                if candidate.is_file() {
                    return Ok(candidate);
                }
            }
        }

        let searched: Vec<String> = dirs.iter().map(|d| d.display().to_string()).collect();
        Err(snapshot_not_found(
            request.module_name,
            request.version.as_str(),
            &searched,
        ))
    }

    fn load(&self, request: &LoadRequest<'_>) -> Result<Snapshot> {
        let path = self.resolve(request)?;
        let file = parse_snapshot_file(&path)?;

        if file.module != request.module_name {
            return Err(ExError::new(ExErrorKind::ModuleMismatch)
                .with_op("load_snapshot")
                .with_module(&file.module)
                .with_version(request.version.as_str())
                .with_message(format!(
                    "{} describes module {}, requested {}",
                    path.display(),
                    file.module,
                    request.module_name
                )));
        }

        if let Some(token) = &file.version {
            let recorded = Version::parse(token).map_err(ExError::from)?;
            if &recorded != request.version {
                return Err(ExError::new(ExErrorKind::VersionMismatch)
                    .with_op("load_snapshot")
                    .with_module(request.module_name)
                    .with_version(token)
                    .with_message(format!(
                        "{} records version {}, requested {}",
                        path.display(),
                        token,
                        request.version
                    )));
            }
        }

        // Relabel so the snapshot carries the series token, e.g. "9" for a "9.0" file
        Ok(file
            .into_snapshot(Some(request.version))?
            .with_version(request.version.clone()))
    }
}

impl SnapshotLoader for FsSnapshotLoader {
    fn load_snapshot(&self, request: &LoadRequest<'_>) -> std::result::Result<Snapshot, ExError> {
        let start = Instant::now();
        log_op_start!(
            "load_snapshot",
            module = request.module_name,
            version = request.version.as_str(),
            purpose = request.purpose.as_str()
        );

        match self.load(request) {
            Ok(snapshot) => {
                log_op_end!(
                    "load_snapshot",
                    duration_ms = start.elapsed().as_millis() as u64,
                    module = request.module_name,
                    version = request.version.as_str(),
                    elements_len = snapshot.len()
                );
                Ok(snapshot)
            }
            Err(err) => {
                log_op_error!(
                    "load_snapshot",
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    module = request.module_name,
                    version = request.version.as_str()
                );
                Err(err)
            }
        }
    }
}
