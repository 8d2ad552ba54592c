//! Immutable per-version API snapshots.
//!
//! A [`Snapshot`] is an arena of [`Element`]s keyed by [`ElementKey`].
//! Snapshots of different versions never share element instances; they are
//! compared purely through keys and tag values.

use crate::errors::{Result, SinceError};
use crate::model::digest::compute_snapshot_digest;
use crate::model::element::{Element, ElementKey};
use crate::model::version::Version;
use std::collections::{BTreeMap, BTreeSet};

/// The public API surface of one module at one version
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    module: String,
    version: Version,
    elements: BTreeMap<ElementKey, Element>,
}

impl Snapshot {
    /// Start building a snapshot
    pub fn builder(module: impl Into<String>, version: Version) -> SnapshotBuilder {
        SnapshotBuilder {
            module: module.into(),
            version,
            elements: Vec::new(),
        }
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, key: &ElementKey) -> Option<&Element> {
        self.elements.get(key)
    }

    pub fn contains(&self, key: &ElementKey) -> bool {
        self.elements.contains_key(key)
    }

    /// Elements in ascending key order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &ElementKey> {
        self.elements.keys()
    }

    /// Nearest declared since tag, starting at `key` and walking outwards
    /// through enclosing elements. `None` when no element on the chain
    /// declares a tag or the key is unknown.
    pub fn effective_since(&self, key: &ElementKey) -> Option<&str> {
        let mut current = self.elements.get(key);
        while let Some(element) = current {
            if let Some(since) = element.declared_since.as_deref() {
                return Some(since);
            }
            current = element
                .enclosing
                .as_ref()
                .and_then(|enclosing| self.elements.get(enclosing));
        }
        None
    }

    /// Content digest of the module's API shape (see [`compute_snapshot_digest`])
    pub fn digest(&self) -> Result<String> {
        compute_snapshot_digest(&self.module, self.elements.values())
    }

    /// Same elements, relabelled with another version
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }
}

/// Collects elements and checks the snapshot invariants on [`build`](SnapshotBuilder::build)
#[derive(Debug, Clone)]
pub struct SnapshotBuilder {
    module: String,
    version: Version,
    elements: Vec<Element>,
}

impl SnapshotBuilder {
    /// Add an element (chaining form)
    pub fn element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Add an element
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Validate and freeze the snapshot
    ///
    /// # Errors
    ///
    /// - `DuplicateElement`: two elements share a key
    /// - `UnknownEnclosingElement`: an enclosing key is not in the snapshot
    /// - `OwnershipCycle`: an enclosing chain loops
    pub fn build(self) -> Result<Snapshot> {
        let mut elements = BTreeMap::new();
        for element in self.elements {
            if elements.contains_key(&element.key) {
                return Err(SinceError::DuplicateElement {
                    key: element.key.to_string(),
                });
            }
            elements.insert(element.key.clone(), element);
        }

        for element in elements.values() {
            if let Some(enclosing) = &element.enclosing {
                if !elements.contains_key(enclosing) {
                    return Err(SinceError::UnknownEnclosingElement {
                        key: element.key.to_string(),
                        enclosing: enclosing.to_string(),
                    });
                }
            }
        }

        check_acyclic(&elements)?;

        Ok(Snapshot {
            module: self.module,
            version: self.version,
            elements,
        })
    }
}

fn check_acyclic(elements: &BTreeMap<ElementKey, Element>) -> Result<()> {
    // Keys already proven to reach a root
    let mut rooted: BTreeSet<&ElementKey> = BTreeSet::new();

    for start in elements.keys() {
        let mut chain: BTreeSet<&ElementKey> = BTreeSet::new();
        let mut current = Some(start);
        while let Some(key) = current {
            if rooted.contains(key) {
                break;
            }
            if !chain.insert(key) {
                return Err(SinceError::OwnershipCycle {
                    key: key.to_string(),
                });
            }
            current = elements.get(key).and_then(|e| e.enclosing.as_ref());
        }
        rooted.extend(chain);
    }
    Ok(())
}
