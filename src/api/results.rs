//! Run results and reporting structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::HeadstampError;

/// Outcome of a whole annotation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationReport {
    /// Root the run started from
    pub root: PathBuf,

    /// Pattern used to select files
    pub pattern: String,

    /// Files that received the block (or would have, on a dry run)
    pub annotated: Vec<PathBuf>,

    /// Files left alone because they already carried the block
    pub skipped: Vec<PathBuf>,

    /// Files that could not be annotated
    pub failures: Vec<FileFailure>,

    /// Whether files were left untouched on purpose
    pub dry_run: bool,

    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

/// A file that failed to annotate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    /// File being processed
    pub path: PathBuf,

    /// Rendered error message
    pub error: String,

    /// Whether the operating system denied access
    pub permission_denied: bool,
}

impl FileFailure {
    /// Record `error` against `path`.
    pub fn new(path: PathBuf, error: &HeadstampError) -> Self {
        Self {
            path,
            error: error.to_string(),
            permission_denied: error.is_permission_denied(),
        }
    }
}

impl AnnotationReport {
    /// Start an empty report for `root` and `pattern`.
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            pattern: pattern.into(),
            dry_run,
            ..Self::default()
        }
    }

    /// Number of files the walk selected.
    pub fn files_matched(&self) -> usize {
        self.annotated.len() + self.skipped.len() + self.failures.len()
    }

    /// True when every selected file was handled without error.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn counts_cover_every_bucket() {
        let mut report = AnnotationReport::new("src", "*.rs", false);
        report.annotated.push(PathBuf::from("src/a.rs"));
        report.skipped.push(PathBuf::from("src/b.rs"));
        assert!(report.is_success());

        let err = HeadstampError::io(
            "Failed to open file for read/write",
            "src/c.rs",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        report.failures.push(FileFailure::new(PathBuf::from("src/c.rs"), &err));

        assert_eq!(report.files_matched(), 3);
        assert!(!report.is_success());
        assert!(report.failures[0].permission_denied);
    }

    #[test]
    fn report_serializes_to_json() {
        let mut report = AnnotationReport::new("src", "*.rs", true);
        report.annotated.push(PathBuf::from("src/a.rs"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["pattern"], "*.rs");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["annotated"][0], "src/a.rs");
    }
}
