//! sincecheck core - `@since` consistency checking over API snapshots
//!
//! This crate holds the pure analysis:
//! - API Snapshot Model (elements, keys, versions, immutable snapshots)
//! - Version Comparator (earliest first appearance per element)
//! - Since-Tag Validator (one diagnostic per mismatched or missing tag)
//! - Loader contract, run configuration and report model
//! - Error and logging facilities shared by the other crates
//!
//! Nothing here performs I/O; snapshots arrive through a [`SnapshotLoader`].

pub mod compare;
pub mod config;
pub mod errors;
pub mod loader;
pub mod logging_facility;
pub mod model;
pub mod normalize;
pub mod report;
pub mod series;
pub mod validate;

// Re-export commonly used types
pub use compare::{compute_first_appearance, FirstAppearance};
pub use config::Configuration;
pub use errors::{ExError, ExErrorKind, Result, SinceError};
pub use loader::{InMemoryLoader, LoadOptions, LoadPurpose, LoadRequest, SnapshotLoader};
pub use model::{Element, ElementKey, ElementKind, Snapshot, Version};
pub use normalize::VersionNormalization;
pub use report::{render_human_summary, CheckReport};
pub use series::VersionSeries;
pub use validate::{
    check_since_tags, validate_since_tags, Diagnostic, MissingTagPolicy, UnseenPolicy,
    ValidationOptions,
};
