//! Run configuration.
//!
//! Plain data plus one function deriving per-version loader options.

use crate::errors::Result;
use crate::loader::LoadOptions;
use crate::model::version::Version;
use crate::series::VersionSeries;
use crate::validate::ValidationOptions;
use std::path::PathBuf;
use std::sync::Arc;

/// Derives the loader options for one analyzed version
pub type AnalyzeOptionsFn = Arc<dyn Fn(&Version) -> LoadOptions + Send + Sync>;

/// Everything a validation run needs from its caller
#[derive(Clone)]
pub struct Configuration {
    pub module_name: String,
    /// Version tokens, ascending
    pub versions_to_check: Vec<String>,
    /// Defaults to the last entry of `versions_to_check`
    pub verify_version: Option<String>,
    pub options_for_verify: LoadOptions,
    pub module_source_path: Vec<PathBuf>,
    pub validation: ValidationOptions,
    options_for_analyze_version: AnalyzeOptionsFn,
}

impl Configuration {
    pub fn new<S: Into<String>>(
        module_name: impl Into<String>,
        versions: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            versions_to_check: versions.into_iter().map(Into::into).collect(),
            verify_version: None,
            options_for_verify: LoadOptions::default(),
            module_source_path: Vec::new(),
            validation: ValidationOptions::default(),
            options_for_analyze_version: Arc::new(|_: &Version| LoadOptions::default()),
        }
    }

    pub fn with_analyze_options<F>(mut self, derive: F) -> Self
    where
        F: Fn(&Version) -> LoadOptions + Send + Sync + 'static,
    {
        self.options_for_analyze_version = Arc::new(derive);
        self
    }

    pub fn with_verify_options(mut self, options: LoadOptions) -> Self {
        self.options_for_verify = options;
        self
    }

    pub fn with_module_source_path(mut self, paths: Vec<PathBuf>) -> Self {
        self.module_source_path = paths;
        self
    }

    pub fn with_verify_version(mut self, version: impl Into<String>) -> Self {
        self.verify_version = Some(version.into());
        self
    }

    pub fn with_validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    /// Loader options for one analyzed version
    pub fn options_for_analyze_version(&self, version: &Version) -> LoadOptions {
        (self.options_for_analyze_version)(version)
    }

    /// Parse and check the configured versions
    ///
    /// # Errors
    ///
    /// Configuration errors from [`VersionSeries::parse`].
    pub fn version_series(&self) -> Result<VersionSeries> {
        VersionSeries::parse(&self.versions_to_check, self.verify_version.as_deref())
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("module_name", &self.module_name)
            .field("versions_to_check", &self.versions_to_check)
            .field("verify_version", &self.verify_version)
            .field("options_for_verify", &self.options_for_verify)
            .field("module_source_path", &self.module_source_path)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SinceError;

    #[test]
    fn test_analyze_options_derived_per_version() {
        let config = Configuration::new("test", ["9", "10"]).with_analyze_options(|v| {
            LoadOptions::new()
                .with_add_module("test")
                .with_module_path(format!("classes/{}", v))
        });

        let options = config.options_for_analyze_version(&Version::parse("10").unwrap());
        assert_eq!(options.module_path, vec![PathBuf::from("classes/10")]);
        assert_eq!(options.add_modules, vec!["test".to_string()]);
    }

    #[test]
    fn test_default_analyze_options_are_empty() {
        let config = Configuration::new("test", ["9"]);
        assert_eq!(
            config.options_for_analyze_version(&Version::parse("9").unwrap()),
            LoadOptions::default()
        );
    }

    #[test]
    fn test_version_series_validation() {
        let config = Configuration::new("test", ["10", "9"]);
        assert!(matches!(
            config.version_series(),
            Err(SinceError::VersionSeriesNotIncreasing { .. })
        ));
    }

    #[test]
    fn test_debug_omits_function() {
        let rendered = format!("{:?}", Configuration::new("test", ["9"]));
        assert!(rendered.contains("module_name: \"test\""));
    }
}
