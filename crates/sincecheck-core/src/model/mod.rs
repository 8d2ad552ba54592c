//! API Snapshot Model.
//!
//! - [`Version`]: parsed, totally ordered version tokens
//! - [`ElementKind`], [`ElementKey`], [`Element`]: API members and their
//!   structural identity
//! - [`Snapshot`]: immutable per-version arena of elements

pub mod digest;
pub mod element;
pub mod snapshot;
pub mod version;

pub use element::{Element, ElementKey, ElementKind};
pub use snapshot::{Snapshot, SnapshotBuilder};
pub use version::Version;
