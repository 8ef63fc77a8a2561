//! Shared error types for interfaced
//!
//! Conformance predicates never fail: "does not conform" is a plain `false`.
//! Errors are reserved for things that are actually wrong, such as asking to
//! construct an interface, registering a malformed hierarchy, or loading a
//! manifest that cannot be parsed.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for interfaced operations
#[derive(Debug, Error)]
pub enum Error {
    /// An interface-tagged type without its own initializer was constructed
    #[error("Attempted to initialize interface `{type_name}`")]
    ConstructionDenied { type_name: String },

    /// A type name that was never registered
    #[error("Unknown type `{0}`")]
    UnknownType(String),

    /// A type name registered twice
    #[error("Type `{0}` is already registered")]
    DuplicateType(String),

    /// A declared parent that is not registered (yet)
    #[error("Type `{type_name}` declares unknown parent `{parent}`")]
    UnknownParent { type_name: String, parent: String },

    /// The same parent listed twice in one declaration
    #[error("Type `{type_name}` lists parent `{parent}` more than once")]
    DuplicateParent { type_name: String, parent: String },

    /// No consistent C3 member resolution order exists
    #[error("Cannot create a consistent member resolution order for `{0}`")]
    InconsistentHierarchy(String),

    /// Annotation text that does not name a type
    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Manifest loading errors
    #[error("Manifest error in {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// YAML errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a manifest error with path context
    pub fn manifest(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Manifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether this is the construction guard firing
    pub fn is_construction_denied(&self) -> bool {
        matches!(self, Self::ConstructionDenied { .. })
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
