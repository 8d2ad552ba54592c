//! Validation reports.
//!
//! [`CheckReport`] is the structured outcome of one run; it serializes
//! deterministically apart from its run id. [`render_human_summary`] turns
//! it into review text.

pub mod human_summary;
pub mod model;

pub use human_summary::render_human_summary;
pub use model::{CheckReport, SnapshotEntry};
