//! Diagnostics emitted by the validator.

use crate::model::element::{ElementKey, ElementKind};
use serde::{Deserialize, Serialize};

/// Declared value reported when an element carries no since tag
pub const MISSING_SINCE: &str = "<missing>";

/// A mismatch between the declared and the expected since tag of one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: ElementKind,
    pub element_path: String,
    /// Declared token, or [`MISSING_SINCE`]
    pub declared_since: String,
    pub expected_since: String,
}

impl Diagnostic {
    pub fn new(
        key: &ElementKey,
        declared_since: impl Into<String>,
        expected_since: impl Into<String>,
    ) -> Self {
        Self {
            kind: key.kind,
            element_path: key.path.clone(),
            declared_since: declared_since.into(),
            expected_since: expected_since.into(),
        }
    }

    pub fn key(&self) -> ElementKey {
        ElementKey::new(self.kind, self.element_path.clone())
    }

    /// Whether the element had no declared tag at all
    pub fn is_missing(&self) -> bool {
        self.declared_since == MISSING_SINCE
    }
}

/// Renders the line consumers match on:
/// `For Element: <kind>:<path> Wrong @since version is <declared> instead of <expected>`
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "For Element: {}:{} Wrong @since version is {} instead of {}",
            self.kind, self.element_path, self.declared_since, self.expected_since
        )
    }
}
