//! Error types for the headstamp library.
//!
//! Every failure raised while walking a tree or rewriting a file is reported
//! through [`HeadstampError`], carrying the path that triggered it so the CLI
//! can tell the user exactly where a run stopped.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main result type for headstamp operations.
pub type Result<T> = std::result::Result<T, HeadstampError>;

/// Error type for all headstamp operations.
#[derive(Error, Debug)]
pub enum HeadstampError {
    /// The traversal root is missing, unreadable, or the walk itself failed
    #[error("Traversal error under '{}': {message}", .root.display())]
    Traversal {
        /// Root directory the walk started from
        root: PathBuf,
        /// Human-readable error message
        message: String,
        /// Underlying I/O error, when the walker surfaced one
        #[source]
        source: Option<io::Error>,
    },

    /// Per-file I/O errors (open, read, write, truncate)
    #[error("I/O error on '{}': {message}", .path.display())]
    Io {
        /// Human-readable error message
        message: String,
        /// File being processed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Invalid glob pattern
    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// Error description
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl HeadstampError {
    /// Create a new traversal error without an underlying I/O cause
    pub fn traversal(root: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Traversal {
            root: root.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a new traversal error wrapping an I/O cause
    pub fn traversal_io(root: impl Into<PathBuf>, message: impl Into<String>, source: io::Error) -> Self {
        Self::Traversal {
            root: root.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a new per-file I/O error
    pub fn io(message: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new pattern error
    pub fn pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Path of the file this error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Traversal { root, .. } => Some(root),
            _ => None,
        }
    }

    /// Whether the error is a permission denial from the operating system.
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == io::ErrorKind::PermissionDenied,
            Self::Traversal {
                source: Some(source),
                ..
            } => source.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for HeadstampError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for HeadstampError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<globset::Error> for HeadstampError {
    fn from(err: globset::Error) -> Self {
        let pattern = err.glob().unwrap_or("<unknown>").to_string();
        Self::pattern(pattern, err.kind().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_reports_path_and_kind() {
        let err = HeadstampError::io(
            "Failed to open file",
            "src/lib.rs",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.path(), Some(Path::new("src/lib.rs")));
        assert!(err.is_permission_denied());
        let rendered = err.to_string();
        assert!(rendered.contains("src/lib.rs"), "unexpected message: {rendered}");
        assert!(rendered.contains("Failed to open file"));
    }

    #[test]
    fn traversal_error_without_source_is_not_permission_denied() {
        let err = HeadstampError::traversal("missing/root", "root does not exist");
        assert!(!err.is_permission_denied());
        assert_eq!(err.path(), Some(Path::new("missing/root")));
        assert!(err.to_string().contains("missing/root"));
    }

    #[test]
    fn invalid_glob_converts_to_pattern_error() {
        let glob_err = globset::Glob::new("[invalid").unwrap_err();
        let err: HeadstampError = glob_err.into();
        match err {
            HeadstampError::Pattern { pattern, .. } => assert_eq!(pattern, "[invalid"),
            other => panic!("expected pattern error, got {other:?}"),
        }
    }

    #[test]
    fn config_field_error_keeps_field() {
        let err = HeadstampError::config_field("must not be empty", "annotation_text");
        match err {
            HeadstampError::Config { field, .. } => {
                assert_eq!(field.as_deref(), Some("annotation_text"))
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
