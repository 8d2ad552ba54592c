//! Settings file (`sincecheck.toml`) and its translation into a
//! [`Configuration`].
//!
//! ```toml
//! module = "test"
//! versions = ["9", "10"]
//! snapshot_root = "classes"        # analyze version v reads <root>/<v>
//! verify_module_path = ["classes/10"]
//! source_path = ["src/10"]
//! verify_version = "10"
//! normalization = "canonical"
//! unseen = "verify-version"
//! missing_tags = "report"
//! ```
//!
//! Relative paths resolve against the directory holding the settings file.

use serde::Deserialize;
use sincecheck_core::errors::{ExError, ExErrorKind};
use sincecheck_core::validate::{MissingTagPolicy, UnseenPolicy};
use sincecheck_core::{Configuration, LoadOptions, ValidationOptions, VersionNormalization};
use sincecheck_store::errors::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Raw settings; every field may also come from command-line overrides
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckSettings {
    pub module: Option<String>,
    pub versions: Vec<String>,
    pub snapshot_root: Option<PathBuf>,
    pub verify_module_path: Vec<PathBuf>,
    pub source_path: Vec<PathBuf>,
    pub verify_version: Option<String>,
    pub normalization: Option<VersionNormalization>,
    pub unseen: Option<UnseenPolicy>,
    pub missing_tags: Option<MissingTagPolicy>,
    /// Extra modules named to the loader alongside `module`
    pub add_modules: Vec<String>,
}

impl CheckSettings {
    /// Parse settings from TOML text; paths are kept as written
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            ExError::new(ExErrorKind::InvalidConfiguration)
                .with_op("parse_settings")
                .with_message(e.to_string())
        })
    }

    /// Read a settings file, resolving relative paths against its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("read_settings")
                .with_message(format!("{}: {}", path.display(), e))
        })?;
        let settings = Self::from_toml_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(settings.resolve_paths(base))
    }

    /// Make every relative path absolute against `base`
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.snapshot_root = self.snapshot_root.map(resolve);
        self.verify_module_path = self.verify_module_path.into_iter().map(resolve).collect();
        self.source_path = self.source_path.into_iter().map(resolve).collect();
        self
    }

    /// Layer `overrides` on top of `self`: set scalar fields and non-empty
    /// lists in `overrides` win
    pub fn merge(self, overrides: CheckSettings) -> Self {
        fn pick<T>(base: Vec<T>, over: Vec<T>) -> Vec<T> {
            if over.is_empty() {
                base
            } else {
                over
            }
        }

        Self {
            module: overrides.module.or(self.module),
            versions: pick(self.versions, overrides.versions),
            snapshot_root: overrides.snapshot_root.or(self.snapshot_root),
            verify_module_path: pick(self.verify_module_path, overrides.verify_module_path),
            source_path: pick(self.source_path, overrides.source_path),
            verify_version: overrides.verify_version.or(self.verify_version),
            normalization: overrides.normalization.or(self.normalization),
            unseen: overrides.unseen.or(self.unseen),
            missing_tags: overrides.missing_tags.or(self.missing_tags),
            add_modules: pick(self.add_modules, overrides.add_modules),
        }
    }

    /// Build the run configuration.
    ///
    /// Analyzed version `v` loads from `<snapshot_root>/<v>`. The verify
    /// snapshot loads from `verify_module_path`, or from
    /// `<snapshot_root>/<verify version>` when that list is empty.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when the module name or the snapshot location
    /// is missing. Version series problems surface when the run starts.
    pub fn into_configuration(self) -> Result<Configuration> {
        let module = self
            .module
            .filter(|m| !m.trim().is_empty())
            .ok_or_else(|| missing_setting("module"))?;

        if self.snapshot_root.is_none() && self.verify_module_path.is_empty() {
            return Err(missing_setting("snapshot_root"));
        }

        let mut add_modules = vec![module.clone()];
        add_modules.extend(self.add_modules.into_iter().filter(|m| m != &module));

        let verify_paths = if self.verify_module_path.is_empty() {
            let token = self
                .verify_version
                .clone()
                .or_else(|| self.versions.last().cloned())
                .ok_or_else(|| missing_setting("versions"))?;
            self.snapshot_root
                .iter()
                .map(|root| root.join(&token))
                .collect()
        } else {
            self.verify_module_path
        };

        let mut verify_options = LoadOptions::new();
        for module_name in &add_modules {
            verify_options = verify_options.with_add_module(module_name.clone());
        }
        for path in verify_paths {
            verify_options = verify_options.with_module_path(path);
        }

        let validation = ValidationOptions {
            normalization: self.normalization.unwrap_or_default(),
            unseen: self.unseen.unwrap_or_default(),
            missing_tags: self.missing_tags.unwrap_or_default(),
        };

        let root = self.snapshot_root;
        let mut config = Configuration::new(module, self.versions)
            .with_analyze_options(move |version| {
                let mut options = LoadOptions::new();
                for module_name in &add_modules {
                    options = options.with_add_module(module_name.clone());
                }
                if let Some(root) = &root {
                    options = options.with_module_path(root.join(version.as_str()));
                }
                options
            })
            .with_verify_options(verify_options)
            .with_module_source_path(self.source_path)
            .with_validation(validation);

        if let Some(verify_version) = self.verify_version {
            config = config.with_verify_version(verify_version);
        }

        Ok(config)
    }
}

fn missing_setting(name: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidConfiguration)
        .with_op("build_configuration")
        .with_message(format!("missing required setting '{}'", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sincecheck_core::Version;

    const SETTINGS: &str = r#"
module = "test"
versions = ["9", "10"]
snapshot_root = "classes"
source_path = ["src/10"]
normalization = "legacy-prefix"
missing_tags = "inherit-enclosing"
"#;

    #[test]
    fn test_parse_settings() {
        let settings = CheckSettings::from_toml_str(SETTINGS).unwrap();
        assert_eq!(settings.module.as_deref(), Some("test"));
        assert_eq!(settings.versions, vec!["9", "10"]);
        assert_eq!(
            settings.normalization,
            Some(VersionNormalization::LegacyPrefix)
        );
        assert_eq!(settings.unseen, None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = CheckSettings::from_toml_str("modul = \"test\"").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let settings = CheckSettings::from_toml_str(SETTINGS)
            .unwrap()
            .resolve_paths(Path::new("/work"));
        assert_eq!(settings.snapshot_root, Some(PathBuf::from("/work/classes")));
        assert_eq!(settings.source_path, vec![PathBuf::from("/work/src/10")]);
    }

    #[test]
    fn test_overrides_win() {
        let base = CheckSettings::from_toml_str(SETTINGS).unwrap();
        let merged = base.merge(CheckSettings {
            versions: vec!["10".into(), "11".into()],
            unseen: Some(UnseenPolicy::Skip),
            ..CheckSettings::default()
        });
        assert_eq!(merged.versions, vec!["10", "11"]);
        assert_eq!(merged.module.as_deref(), Some("test"));
        assert_eq!(merged.unseen, Some(UnseenPolicy::Skip));
        assert_eq!(merged.source_path, vec![PathBuf::from("src/10")]);
    }

    #[test]
    fn test_configuration_derives_per_version_paths() {
        let config = CheckSettings::from_toml_str(SETTINGS)
            .unwrap()
            .into_configuration()
            .unwrap();

        let nine = config.options_for_analyze_version(&Version::parse("9").unwrap());
        assert_eq!(nine.module_path, vec![PathBuf::from("classes/9")]);
        assert_eq!(nine.add_modules, vec!["test".to_string()]);
        assert_eq!(
            config.options_for_verify.module_path,
            vec![PathBuf::from("classes/10")]
        );
        assert_eq!(config.module_source_path, vec![PathBuf::from("src/10")]);
        assert_eq!(
            config.validation.missing_tags,
            MissingTagPolicy::InheritEnclosing
        );
    }

    #[test]
    fn test_module_required() {
        let err = CheckSettings::from_toml_str("versions = [\"9\"]\nsnapshot_root = \"c\"")
            .unwrap()
            .into_configuration()
            .unwrap_err();
        assert!(err.message().contains("'module'"));
    }
}
