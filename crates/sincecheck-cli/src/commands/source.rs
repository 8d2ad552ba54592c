//! Options shared by every command that loads snapshots

use clap::Args;
use sincecheck_core::validate::{MissingTagPolicy, UnseenPolicy};
use sincecheck_core::{Configuration, VersionNormalization};
use sincecheck_engine::CheckSettings;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Settings file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub module: Option<String>,

    /// Analyzed versions, ascending (e.g. `9,10`)
    #[arg(long, value_delimiter = ',')]
    pub versions: Vec<String>,

    /// Analyze version v reads from `<snapshot-root>/<v>`
    #[arg(long)]
    pub snapshot_root: Option<PathBuf>,

    /// Module path entries for the verify snapshot
    #[arg(long = "verify-path")]
    pub verify_path: Vec<PathBuf>,

    /// Source roots searched for the verify snapshot
    #[arg(long)]
    pub source_path: Vec<PathBuf>,

    #[arg(long)]
    pub verify_version: Option<String>,

    /// exact | canonical | legacy-prefix
    #[arg(long)]
    pub normalization: Option<VersionNormalization>,

    /// verify-version | skip
    #[arg(long)]
    pub unseen: Option<UnseenPolicy>,

    /// report | inherit-enclosing
    #[arg(long)]
    pub missing_tags: Option<MissingTagPolicy>,
}

impl SourceArgs {
    pub fn into_configuration(self) -> Result<Configuration, Box<dyn std::error::Error>> {
        let base = match &self.config {
            Some(path) => CheckSettings::load(path)?,
            None => CheckSettings::default(),
        };

        let overrides = CheckSettings {
            module: self.module,
            versions: self.versions,
            snapshot_root: self.snapshot_root,
            verify_module_path: self.verify_path,
            source_path: self.source_path,
            verify_version: self.verify_version,
            normalization: self.normalization,
            unseen: self.unseen,
            missing_tags: self.missing_tags,
            add_modules: Vec::new(),
        };

        Ok(base.merge(overrides).into_configuration()?)
    }
}
