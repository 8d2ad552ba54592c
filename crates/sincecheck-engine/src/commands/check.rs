//! Since-tag check orchestration.
//!
//! ## Pipeline (in order):
//! 1. Validate the version series (configuration errors stop here, nothing is loaded)
//! 2. Load every analyzed snapshot, ascending
//! 3. Load the verify snapshot
//! 4. Compute first appearance and validate since tags
//! 5. Assemble the report
//!
//! Logging: `run_check` emits start/end/end_error with the run id.
//! Loaders log their own reads.

use crate::commands::series_loader::{load_analyzed, load_verify};
use sincecheck_core::errors::ExError;
use sincecheck_core::report::model::SnapshotEntry;
use sincecheck_core::{
    check_since_tags, log_op_end, log_op_error, log_op_start, CheckReport, Configuration,
    Snapshot, SnapshotLoader,
};
use sincecheck_core_types::RunId;
use sincecheck_store::errors::Result;

/// Run a full check and return the report.
///
/// # Errors
///
/// - `InvalidConfiguration` / `InvalidVersion`: bad version series; no
///   snapshot is loaded
/// - any loader failure, unchanged
/// - `VersionMismatch` / `ModuleMismatch`: a loader returned a snapshot
///   that does not fit the request
pub fn run_check(
    config: &Configuration,
    loader: &dyn SnapshotLoader,
) -> Result<CheckReport> {
    let run_id = RunId::new();
    log_op_start!(
        "run_check",
        run_id = run_id.as_str(),
        module = config.module_name.as_str(),
        versions_len = config.versions_to_check.len()
    );
    let start = std::time::Instant::now();

    let report = run_check_impl(config, loader, run_id.clone()).map_err(|e| {
        log_op_error!(
            "run_check",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            run_id = run_id.as_str(),
            module = config.module_name.as_str()
        );
        e
    })?;

    log_op_end!(
        "run_check",
        duration_ms = start.elapsed().as_millis() as u64,
        run_id = run_id.as_str(),
        module = config.module_name.as_str(),
        elements_len = report.elements_checked,
        diagnostics_len = report.diagnostics.len()
    );

    Ok(report)
}

/// Run a full check and return only the diagnostic lines,
/// `For Element: <kind>:<path> Wrong @since version is <declared> instead of <expected>`.
///
/// An empty list means the check passed.
///
/// # Errors
///
/// Same as [`run_check`].
pub fn run_test(
    config: &Configuration,
    loader: &dyn SnapshotLoader,
) -> Result<Vec<String>> {
    Ok(run_check(config, loader)?.lines())
}

fn run_check_impl(
    config: &Configuration,
    loader: &dyn SnapshotLoader,
    run_id: RunId,
) -> Result<CheckReport> {
    let series = config.version_series().map_err(|e| {
        ExError::from(e)
            .with_op("run_check")
            .with_module(&config.module_name)
    })?;

    let analyzed = load_analyzed(config, series.versions(), loader)?;
    let verify = load_verify(config, series.verify(), loader)?;

    let diagnostics = check_since_tags(&series, &analyzed, &verify, &config.validation).map_err(
        |e| {
            ExError::from(e)
                .with_op("run_check")
                .with_module(&config.module_name)
        },
    )?;

    Ok(CheckReport {
        report_schema_version: CheckReport::SCHEMA_VERSION,
        run_id,
        module: config.module_name.clone(),
        analyzed: analyzed
            .iter()
            .map(snapshot_entry)
            .collect::<Result<Vec<_>>>()?,
        verify: snapshot_entry(&verify)?,
        elements_checked: verify.len(),
        diagnostics,
    })
}

fn snapshot_entry(snapshot: &Snapshot) -> Result<SnapshotEntry> {
    let digest = snapshot
        .digest()
        .map_err(|e| ExError::from(e).with_op("snapshot_digest"))?;
    Ok(SnapshotEntry {
        version: snapshot.version().as_str().to_string(),
        digest,
        elements: snapshot.len(),
    })
}
