//! sincecheck Engine - Orchestration layer
//!
//! Coordinates snapshot loading, first-appearance computation and since-tag
//! validation into complete runs, and builds run configurations from
//! settings files.

pub mod commands;
pub mod settings;

pub use commands::check::{run_check, run_test};
pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::history::{history, history_lines};
pub use settings::CheckSettings;
