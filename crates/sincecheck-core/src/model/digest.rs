//! Digest computation for API snapshots.
//!
//! The digest covers the module name and every element (key, declared tag,
//! enclosing key) in ascending key order. The snapshot's version label is
//! not part of the digest: two versions with an unchanged API surface share
//! a digest.

use crate::errors::Result;
use crate::model::element::Element;
use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Serialize)]
struct DigestInput<'a> {
    module: &'a str,
    elements: Vec<&'a Element>,
}

/// Compute the SHA256 digest of a module's API shape.
///
/// `elements` must already be in ascending key order; [`Snapshot`]
/// iteration guarantees that.
///
/// ## Returns
///
/// Hex-encoded SHA256 digest (64 characters)
///
/// ## Errors
///
/// Returns `SinceError::Serialization` if JSON serialization fails.
///
/// [`Snapshot`]: crate::model::snapshot::Snapshot
pub fn compute_snapshot_digest<'a>(
    module: &'a str,
    elements: impl Iterator<Item = &'a Element>,
) -> Result<String> {
    let input = DigestInput {
        module,
        elements: elements.collect(),
    };
    let canonical = serde_json::to_string(&input)?;
    Ok(hash_string(&canonical))
}

fn hash_string(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
