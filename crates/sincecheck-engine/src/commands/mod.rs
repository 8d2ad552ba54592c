//! Command orchestration layer.
//!
//! Each command loads what it needs through a `SnapshotLoader` and hands
//! fully materialized snapshots to the core.

pub mod check;
pub mod engine_command;
pub mod history;
mod series_loader;
