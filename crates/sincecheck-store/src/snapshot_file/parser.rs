//! Snapshot file parser with validation
//!
//! Parses JSON or YAML, checks the schema version, then builds a
//! [`Snapshot`] so key uniqueness and enclosing references are enforced
//! by the model itself.

use crate::errors::{io_error, snapshot_parse_error, unsupported_schema, Result};
use crate::snapshot_file::format_v1::{ElementRecord, KeyRecord, SnapshotFileV1};
use sincecheck_core::errors::{ExError, ExErrorKind};
use sincecheck_core::{Element, ElementKey, ElementKind, Snapshot, Version};
use std::fs;
use std::path::Path;

/// Supported snapshot file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Detect the encoding from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(FileFormat::Json),
            Some("yaml") | Some("yml") => Some(FileFormat::Yaml),
            _ => None,
        }
    }
}

/// Parse a snapshot file from a path
pub fn parse_snapshot_file(path: &Path) -> Result<SnapshotFileV1> {
    let format = FileFormat::from_path(path).ok_or_else(|| {
        snapshot_parse_error(
            Some(path),
            "unrecognized extension (expected .json, .yaml or .yml)",
        )
    })?;

    let content = fs::read_to_string(path).map_err(|e| io_error("read_snapshot_file", e))?;

    parse_snapshot_str(&content, format).map_err(|e| match e.kind() {
        ExErrorKind::LoaderFailure => snapshot_parse_error(Some(path), e.message()),
        _ => e,
    })
}

/// Parse a snapshot file from a string
pub fn parse_snapshot_str(content: &str, format: FileFormat) -> Result<SnapshotFileV1> {
    let file: SnapshotFileV1 = match format {
        FileFormat::Json => serde_json::from_str(content)
            .map_err(|e| snapshot_parse_error(None, &format!("JSON parse error: {}", e)))?,
        FileFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| snapshot_parse_error(None, &format!("YAML parse error: {}", e)))?,
    };

    if file.schema_version != 1 {
        return Err(unsupported_schema(file.schema_version));
    }

    if file.module.trim().is_empty() {
        return Err(snapshot_parse_error(None, "module name is empty"));
    }

    Ok(file)
}

impl SnapshotFileV1 {
    /// Build the in-memory snapshot.
    ///
    /// The file's own version label wins; `fallback` labels version-neutral
    /// files.
    pub fn into_snapshot(self, fallback: Option<&Version>) -> Result<Snapshot> {
        let version = match (&self.version, fallback) {
            (Some(token), _) => Version::parse(token).map_err(ExError::from)?,
            (None, Some(version)) => version.clone(),
            (None, None) => {
                return Err(snapshot_parse_error(
                    None,
                    "snapshot file declares no version",
                ))
            }
        };

        let mut builder = Snapshot::builder(self.module.clone(), version.clone());
        for (index, record) in self.elements.into_iter().enumerate() {
            let kind = parse_kind(&record.kind, index)?;
            if record.path.trim().is_empty() {
                return Err(snapshot_parse_error(
                    None,
                    &format!("element {} has an empty path", index),
                ));
            }

            let mut element = Element::new(kind, record.path);
            if let Some(since) = record.since {
                element = element.with_since(since);
            }
            if let Some(enclosing) = record.enclosing {
                element = element.enclosed_by(key_of(&enclosing, index)?);
            }
            builder.push(element);
        }

        builder.build().map_err(|e| {
            ExError::from(e)
                .with_op("snapshot_parse")
                .with_module(&self.module)
                .with_version(version.as_str())
        })
    }

    /// File form of an in-memory snapshot
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let elements = snapshot
            .elements()
            .map(|element| ElementRecord {
                kind: element.kind().as_str().to_string(),
                path: element.path().to_string(),
                since: element.declared_since.clone(),
                enclosing: element.enclosing.as_ref().map(|key| KeyRecord {
                    kind: key.kind.as_str().to_string(),
                    path: key.path.clone(),
                }),
            })
            .collect();

        Self {
            schema_version: 1,
            module: snapshot.module().to_string(),
            version: Some(snapshot.version().as_str().to_string()),
            elements,
        }
    }
}

fn parse_kind(kind: &str, index: usize) -> Result<ElementKind> {
    kind.parse::<ElementKind>().map_err(|e| {
        snapshot_parse_error(None, &format!("element {}: {}", index, e))
    })
}

fn key_of(record: &KeyRecord, index: usize) -> Result<ElementKey> {
    Ok(ElementKey::new(
        parse_kind(&record.kind, index)?,
        record.path.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
schema_version: 1
module: test
version: "10"
elements:
  - kind: module
    path: test
    since: "9"
  - kind: class
    path: api.Api
    since: "9"
    enclosing: { kind: module, path: test }
  - kind: method
    path: "api.Api:test:()"
    enclosing: { kind: class, path: api.Api }
"#;

    #[test]
    fn test_parse_yaml() {
        let file = parse_snapshot_str(YAML, FileFormat::Yaml).unwrap();
        assert_eq!(file.module, "test");
        assert_eq!(file.elements.len(), 3);

        let snapshot = file.into_snapshot(None).unwrap();
        assert_eq!(snapshot.version().as_str(), "10");
        let method = ElementKey::new(ElementKind::Method, "api.Api:test:()");
        assert_eq!(snapshot.effective_since(&method), Some("9"));
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{"schema_version":1,"module":"test","elements":[{"kind":"class","path":"a.A","since":"9"}]}"#;
        let file = parse_snapshot_str(json, FileFormat::Json).unwrap();
        assert_eq!(file.version, None);

        let snapshot = file
            .into_snapshot(Some(&Version::parse("9").unwrap()))
            .unwrap();
        assert_eq!(snapshot.version().as_str(), "9");
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn test_reject_wrong_schema_version() {
        let yaml = "schema_version: 2\nmodule: test\n";
        let err = parse_snapshot_str(yaml, FileFormat::Yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::UnsupportedSchema);
        assert!(err.message().contains("Unsupported schema_version: 2"));
    }

    #[test]
    fn test_reject_malformed_content() {
        let err = parse_snapshot_str("{not json", FileFormat::Json).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::LoaderFailure);
        assert!(err.message().contains("JSON parse error"));
    }

    #[test]
    fn test_reject_unknown_kind() {
        let yaml = "schema_version: 1\nmodule: test\nversion: \"9\"\nelements:\n  - kind: widget\n    path: a.W\n";
        let err = parse_snapshot_str(yaml, FileFormat::Yaml)
            .unwrap()
            .into_snapshot(None)
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::LoaderFailure);
        assert!(err.message().contains("element 0"));
    }

    #[test]
    fn test_reject_duplicate_elements() {
        let yaml = r#"
schema_version: 1
module: test
version: "9"
elements:
  - { kind: class, path: a.A }
  - { kind: class, path: a.A, since: "9" }
"#;
        let err = parse_snapshot_str(yaml, FileFormat::Yaml)
            .unwrap()
            .into_snapshot(None)
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::SnapshotIntegrity);
        assert_eq!(err.element_path(), Some("class:a.A"));
    }

    #[test]
    fn test_reject_dangling_enclosing() {
        let yaml = r#"
schema_version: 1
module: test
version: "9"
elements:
  - { kind: field, path: "a.A:x", enclosing: { kind: class, path: a.A } }
"#;
        let err = parse_snapshot_str(yaml, FileFormat::Yaml)
            .unwrap()
            .into_snapshot(None)
            .unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::SnapshotIntegrity);
    }

    #[test]
    fn test_version_required_without_fallback() {
        let yaml = "schema_version: 1\nmodule: test\n";
        let err = parse_snapshot_str(yaml, FileFormat::Yaml)
            .unwrap()
            .into_snapshot(None)
            .unwrap_err();
        assert!(err.message().contains("declares no version"));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            FileFormat::from_path(Path::new("a/test.snapshot.yml")),
            Some(FileFormat::Yaml)
        );
        assert_eq!(
            FileFormat::from_path(Path::new("test.snapshot.json")),
            Some(FileFormat::Json)
        );
        assert_eq!(FileFormat::from_path(Path::new("test.snapshot")), None);
    }
}
