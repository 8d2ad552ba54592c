//! Sequential loading of the analyzed snapshots of a run.

use sincecheck_core::{Configuration, LoadPurpose, LoadRequest, Snapshot, SnapshotLoader, Version};
use sincecheck_store::errors::Result;

/// Load one snapshot per analyzed version, in series order
pub(crate) fn load_analyzed(
    config: &Configuration,
    versions: &[Version],
    loader: &dyn SnapshotLoader,
) -> Result<Vec<Snapshot>> {
    let mut snapshots = Vec::with_capacity(versions.len());
    for version in versions {
        let options = config.options_for_analyze_version(version);
        let snapshot = loader.load_snapshot(&LoadRequest {
            module_name: &config.module_name,
            version,
            purpose: LoadPurpose::Analyze,
            options: &options,
            source_path: &[],
        })?;
        tracing::debug!(
            module = %config.module_name,
            version = %version,
            elements_len = snapshot.len(),
            "analyzed snapshot loaded"
        );
        snapshots.push(snapshot);
    }
    Ok(snapshots)
}

/// Load the ground-truth snapshot at `version`
pub(crate) fn load_verify(
    config: &Configuration,
    version: &Version,
    loader: &dyn SnapshotLoader,
) -> Result<Snapshot> {
    loader.load_snapshot(&LoadRequest {
        module_name: &config.module_name,
        version,
        purpose: LoadPurpose::Verify,
        options: &config.options_for_verify,
        source_path: &config.module_source_path,
    })
}
