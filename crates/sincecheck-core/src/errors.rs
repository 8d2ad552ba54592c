use thiserror::Error;

/// Result type alias using SinceError
pub type Result<T> = std::result::Result<T, SinceError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidConfiguration,
    InvalidVersion,

    // Snapshot model
    SnapshotIntegrity,
    ModuleMismatch,
    VersionMismatch,

    // Loading
    LoaderFailure,
    NotFound,
    UnsupportedSchema,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidConfiguration => "ERR_INVALID_CONFIGURATION",
            ExErrorKind::InvalidVersion => "ERR_INVALID_VERSION",
            ExErrorKind::SnapshotIntegrity => "ERR_SNAPSHOT_INTEGRITY",
            ExErrorKind::ModuleMismatch => "ERR_MODULE_MISMATCH",
            ExErrorKind::VersionMismatch => "ERR_VERSION_MISMATCH",
            ExErrorKind::LoaderFailure => "ERR_LOADER_FAILURE",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnsupportedSchema => "ERR_UNSUPPORTED_SCHEMA",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind is a configuration error (reported before any
    /// snapshot is compared).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ExErrorKind::InvalidConfiguration | ExErrorKind::InvalidVersion
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the analysis
/// context (module, version, element) in which the failure happened.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    module: Option<String>,
    version: Option<String>,
    element_path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            module: None,
            version: None,
            element_path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add module context
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Add version context
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Add element context
    pub fn with_element_path(mut self, path: impl Into<String>) -> Self {
        self.element_path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn element_path(&self) -> Option<&str> {
        self.element_path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(module) = &self.module {
            write!(f, " (module: {})", module)?;
        }
        if let Some(version) = &self.version {
            write!(f, " (version: {})", version)?;
        }
        if let Some(path) = &self.element_path {
            write!(f, " (element: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised by the snapshot model, the comparator and the
/// validator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SinceError {
    // ===== Configuration Errors =====
    /// No versions were given to analyze
    #[error("Version series is empty")]
    EmptyVersionSeries,

    /// Versions are not strictly increasing
    #[error("Version series is not strictly increasing: {next} follows {previous}")]
    VersionSeriesNotIncreasing { previous: String, next: String },

    /// The verify version sorts before the last analyzed version
    #[error("Verify version {verify} precedes last analyzed version {last}")]
    VerifyVersionPrecedesSeries { verify: String, last: String },

    /// A version token could not be parsed
    #[error("Invalid version '{token}': {reason}")]
    InvalidVersion { token: String, reason: String },

    // ===== Snapshot Integrity Errors =====
    /// Two elements of one snapshot share a key
    #[error("Duplicate element in snapshot: {key}")]
    DuplicateElement { key: String },

    /// An element names an enclosing element missing from its snapshot
    #[error("Element {key} is enclosed by unknown element {enclosing}")]
    UnknownEnclosingElement { key: String, enclosing: String },

    /// Enclosing chain loops back on itself
    #[error("Ownership cycle detected at element {key}")]
    OwnershipCycle { key: String },

    // ===== Series Errors =====
    /// Snapshots handed to the comparator are out of order
    #[error("Snapshots out of order: {next} follows {previous}")]
    SnapshotOrderViolation { previous: String, next: String },

    /// A snapshot's version is not the one the series expects at that slot
    #[error("Snapshot version mismatch: expected {expected}, found {found}")]
    SnapshotVersionMismatch { expected: String, found: String },

    /// Snapshots of different modules were mixed in one run
    #[error("Module mismatch: expected {expected}, found {found}")]
    ModuleMismatch { expected: String, found: String },

    // ===== IO Errors =====
    /// Serialization failure
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from SinceError to ExError
impl From<SinceError> for ExError {
    fn from(err: SinceError) -> Self {
        let message = err.to_string();
        match err {
            SinceError::EmptyVersionSeries
            | SinceError::VersionSeriesNotIncreasing { .. }
            | SinceError::VerifyVersionPrecedesSeries { .. } => {
                ExError::new(ExErrorKind::InvalidConfiguration).with_message(message)
            }

            SinceError::InvalidVersion { token, .. } => ExError::new(ExErrorKind::InvalidVersion)
                .with_version(token)
                .with_message(message),

            SinceError::DuplicateElement { key }
            | SinceError::UnknownEnclosingElement { key, .. }
            | SinceError::OwnershipCycle { key } => ExError::new(ExErrorKind::SnapshotIntegrity)
                .with_element_path(key)
                .with_message(message),

            SinceError::SnapshotOrderViolation { next, .. } => {
                ExError::new(ExErrorKind::InvalidConfiguration)
                    .with_version(next)
                    .with_message(message)
            }

            SinceError::SnapshotVersionMismatch { found, .. } => {
                ExError::new(ExErrorKind::VersionMismatch)
                    .with_version(found)
                    .with_message(message)
            }

            SinceError::ModuleMismatch { found, .. } => ExError::new(ExErrorKind::ModuleMismatch)
                .with_module(found)
                .with_message(message),

            SinceError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SinceError
impl From<serde_json::Error> for SinceError {
    fn from(err: serde_json::Error) -> Self {
        SinceError::Serialization {
            message: err.to_string(),
        }
    }
}
