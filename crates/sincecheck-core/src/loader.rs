//! Snapshot Loader contract.
//!
//! Materializing a snapshot from compiled artifacts or files is the job of
//! an external collaborator implementing [`SnapshotLoader`]. The core never
//! interprets [`LoadOptions`]; it passes them through.

use crate::errors::{ExError, ExErrorKind};
use crate::model::snapshot::Snapshot;
use crate::model::version::Version;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Opaque tooling options used to materialize one snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    pub module_path: Vec<PathBuf>,
    pub add_modules: Vec<String>,
    pub extra_args: Vec<String>,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_module_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.module_path.push(path.into());
        self
    }

    pub fn with_add_module(mut self, module: impl Into<String>) -> Self {
        self.add_modules.push(module.into());
        self
    }

    pub fn with_extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Flag form of the options, e.g.
    /// `["--add-modules", "test", "--module-path", "classes/9"]`
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.add_modules.is_empty() {
            args.push("--add-modules".to_string());
            args.push(self.add_modules.join(","));
        }
        if !self.module_path.is_empty() {
            let separator = if cfg!(windows) { ";" } else { ":" };
            let joined = self
                .module_path
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(separator);
            args.push("--module-path".to_string());
            args.push(joined);
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }
}

/// Why a snapshot is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPurpose {
    /// One of the analyzed versions of the series
    Analyze,
    /// The ground-truth snapshot being checked
    Verify,
}

impl LoadPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadPurpose::Analyze => "analyze",
            LoadPurpose::Verify => "verify",
        }
    }
}

/// Everything a loader is told about one requested snapshot
#[derive(Debug, Clone, Copy)]
pub struct LoadRequest<'a> {
    pub module_name: &'a str,
    pub version: &'a Version,
    pub purpose: LoadPurpose,
    pub options: &'a LoadOptions,
    /// Source roots; only set for verify requests
    pub source_path: &'a [PathBuf],
}

/// Produces the snapshot of a module at a requested version
pub trait SnapshotLoader {
    /// # Errors
    ///
    /// Any failure to produce a complete snapshot; callers treat it as fatal.
    fn load_snapshot(&self, request: &LoadRequest<'_>) -> Result<Snapshot, ExError>;
}

/// Loader over snapshots already held in memory
///
/// Verify requests use the dedicated verify snapshot when one is set and
/// fall back to the analyzed snapshot of the same version otherwise.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    analyzed: BTreeMap<Version, Snapshot>,
    verify: Option<Snapshot>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.analyzed.insert(snapshot.version().clone(), snapshot);
        self
    }

    pub fn with_verify_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.verify = Some(snapshot);
        self
    }
}

impl SnapshotLoader for InMemoryLoader {
    fn load_snapshot(&self, request: &LoadRequest<'_>) -> Result<Snapshot, ExError> {
        let found = match request.purpose {
            LoadPurpose::Verify => self
                .verify
                .as_ref()
                .filter(|s| s.version() == request.version)
                .or_else(|| self.analyzed.get(request.version)),
            LoadPurpose::Analyze => self.analyzed.get(request.version),
        };

        let snapshot = found.ok_or_else(|| {
            ExError::new(ExErrorKind::LoaderFailure)
                .with_op("load_snapshot")
                .with_module(request.module_name)
                .with_version(request.version.as_str())
                .with_message(format!(
                    "no {} snapshot registered",
                    request.purpose.as_str()
                ))
        })?;

        if snapshot.module() != request.module_name {
            return Err(ExError::new(ExErrorKind::ModuleMismatch)
                .with_op("load_snapshot")
                .with_module(snapshot.module())
                .with_version(request.version.as_str())
                .with_message(format!(
                    "requested module {}, registered snapshot is for {}",
                    request.module_name,
                    snapshot.module()
                )));
        }

        Ok(snapshot.clone())
    }
}
