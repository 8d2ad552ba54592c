//! API elements and their cross-version identity.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Kind of an API element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElementKind {
    Module,
    Package,
    Class,
    Interface,
    Enum,
    Record,
    AnnotationType,
    Constructor,
    Method,
    Field,
    EnumConstant,
    RecordComponent,
}

impl ElementKind {
    pub const ALL: [ElementKind; 12] = [
        ElementKind::Module,
        ElementKind::Package,
        ElementKind::Class,
        ElementKind::Interface,
        ElementKind::Enum,
        ElementKind::Record,
        ElementKind::AnnotationType,
        ElementKind::Constructor,
        ElementKind::Method,
        ElementKind::Field,
        ElementKind::EnumConstant,
        ElementKind::RecordComponent,
    ];

    /// Lower-case name used in diagnostics and snapshot files
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Module => "module",
            ElementKind::Package => "package",
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Enum => "enum",
            ElementKind::Record => "record",
            ElementKind::AnnotationType => "annotation_type",
            ElementKind::Constructor => "constructor",
            ElementKind::Method => "method",
            ElementKind::Field => "field",
            ElementKind::EnumConstant => "enum_constant",
            ElementKind::RecordComponent => "record_component",
        }
    }

    /// Whether elements of this kind declare types that own members
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            ElementKind::Class
                | ElementKind::Interface
                | ElementKind::Enum
                | ElementKind::Record
                | ElementKind::AnnotationType
        )
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognised element kind names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElementKind(pub String);

impl std::fmt::Display for UnknownElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown element kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownElementKind {}

impl FromStr for ElementKind {
    type Err = UnknownElementKind;

    /// Case-insensitive; `-` and `_` are interchangeable
    /// (`ENUM_CONSTANT`, `enum-constant` and `enum_constant` all parse).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ElementKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| UnknownElementKind(s.to_string()))
    }
}

impl TryFrom<String> for ElementKind {
    type Error = UnknownElementKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ElementKind> for String {
    fn from(value: ElementKind) -> Self {
        value.as_str().to_string()
    }
}

/// Structural identity of an element across snapshots
///
/// `path` is the qualified path: enclosing type, name and, for executables,
/// the parameter descriptor (`api.Api:test:()`). Keys order by `path`
/// first so that diagnostics come out in qualified-path order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementKey {
    pub kind: ElementKind,
    pub path: String,
}

impl ElementKey {
    pub fn new(kind: ElementKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

impl Ord for ElementKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .cmp(&other.path)
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for ElementKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ElementKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.path)
    }
}

/// One member of a module's public API at one version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub key: ElementKey,
    /// Since tag exactly as declared; `None` when the element has no tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_since: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enclosing: Option<ElementKey>,
}

impl Element {
    pub fn new(kind: ElementKind, path: impl Into<String>) -> Self {
        Self {
            key: ElementKey::new(kind, path),
            declared_since: None,
            enclosing: None,
        }
    }

    pub fn with_since(mut self, since: impl Into<String>) -> Self {
        self.declared_since = Some(since.into());
        self
    }

    pub fn enclosed_by(mut self, enclosing: ElementKey) -> Self {
        self.enclosing = Some(enclosing);
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.key.kind
    }

    pub fn path(&self) -> &str {
        &self.key.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing_is_lenient() {
        assert_eq!(
            "ENUM_CONSTANT".parse::<ElementKind>(),
            Ok(ElementKind::EnumConstant)
        );
        assert_eq!(
            "annotation-type".parse::<ElementKind>(),
            Ok(ElementKind::AnnotationType)
        );
        assert!("trait".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.as_str().parse::<ElementKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_key_orders_by_path_then_kind() {
        let a = ElementKey::new(ElementKind::Method, "api.Api:a:()");
        let b = ElementKey::new(ElementKind::Class, "api.Api:b");
        let class = ElementKey::new(ElementKind::Class, "api.X");
        let package = ElementKey::new(ElementKind::Package, "api.X");
        assert!(a < b);
        assert!(class < package);
    }

    #[test]
    fn test_key_display() {
        let key = ElementKey::new(ElementKind::Method, "api.Api:test:()");
        assert_eq!(key.to_string(), "method:api.Api:test:()");
    }
}
