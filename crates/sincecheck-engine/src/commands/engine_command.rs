//! Engine-level commands dispatched by front ends.

use crate::commands::check::run_check;
use crate::commands::history::history;
use sincecheck_core::{CheckReport, Configuration, FirstAppearance, SnapshotLoader};
use sincecheck_store::errors::Result;

/// Engine-level commands that load snapshots
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Validate the since tags of the verify snapshot
    Check { config: Configuration },
    /// List the first appearance of every analyzed element
    History { config: Configuration },
}

/// Result of applying an engine command
#[derive(Debug, Clone)]
pub enum EngineCommandResult {
    Check(CheckReport),
    History(FirstAppearance),
}

/// Apply an engine command against a snapshot loader
pub fn apply_engine_command(
    cmd: EngineCommand,
    loader: &dyn SnapshotLoader,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Check { config } => {
            run_check(&config, loader).map(EngineCommandResult::Check)
        }
        EngineCommand::History { config } => {
            history(&config, loader).map(EngineCommandResult::History)
        }
    }
}
