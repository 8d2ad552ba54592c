//! First-appearance history of a module across the analyzed versions.

use crate::commands::series_loader::load_analyzed;
use sincecheck_core::errors::ExError;
use sincecheck_core::{
    compute_first_appearance, log_op_end, log_op_error, log_op_start, Configuration,
    FirstAppearance, SnapshotLoader,
};
use sincecheck_store::errors::Result;

/// Load the analyzed snapshots and compute where each element first appears.
///
/// The verify snapshot is not loaded.
///
/// # Errors
///
/// Configuration errors of the version series and loader failures.
pub fn history(config: &Configuration, loader: &dyn SnapshotLoader) -> Result<FirstAppearance> {
    log_op_start!(
        "history",
        module = config.module_name.as_str(),
        versions_len = config.versions_to_check.len()
    );
    let start = std::time::Instant::now();

    let first = history_impl(config, loader).map_err(|e| {
        log_op_error!(
            "history",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            module = config.module_name.as_str()
        );
        e
    })?;

    log_op_end!(
        "history",
        duration_ms = start.elapsed().as_millis() as u64,
        module = config.module_name.as_str(),
        elements_len = first.len()
    );

    Ok(first)
}

fn history_impl(config: &Configuration, loader: &dyn SnapshotLoader) -> Result<FirstAppearance> {
    let series = config.version_series().map_err(|e| {
        ExError::from(e)
            .with_op("history")
            .with_module(&config.module_name)
    })?;

    let snapshots = load_analyzed(config, series.versions(), loader)?;

    compute_first_appearance(&snapshots).map_err(|e| {
        ExError::from(e)
            .with_op("history")
            .with_module(&config.module_name)
    })
}

/// `<version>\t<kind>:<path>` per element, ascending by key
pub fn history_lines(first: &FirstAppearance) -> Vec<String> {
    first
        .iter()
        .map(|(key, version)| format!("{}\t{}", version, key))
        .collect()
}
