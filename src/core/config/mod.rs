//! Configuration types and management for headstamp.
//!
//! A run is fully described by a [`HeadstampConfig`]: where to start, which
//! files to select, what text to prepend, and how to react to failures. The
//! defaults reproduce the async-stripe attribution pass over
//! `ft-stripe/src/async_stripe`.

pub mod validation;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{HeadstampError, Result};

pub use validation::{validate_glob, validate_non_blank, validate_path_not_empty};

/// Default traversal root.
pub const DEFAULT_ROOT_PATH: &str = "ft-stripe/src/async_stripe";

/// Default filename pattern.
pub const DEFAULT_PATTERN: &str = "*.rs";

/// Default annotation block: attribution for code vendored from async-stripe.
pub const DEFAULT_ANNOTATION_TEXT: &str = "\
// This code is taken from [async-stripe](https://github.com/arlyon/async-stripe/tree/0a00d31894191ee0c6b4bda31e0d52d59e8e93b7)
// Author: Alexander Lyon
// License under either of:
//      - Apache License, Version 2.0, (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)
//      - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
";

/// What to do when a single file cannot be annotated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failure, leaving already-annotated files modified
    #[default]
    Abort,
    /// Record the failure and keep going
    Continue,
}

/// Main configuration for an annotation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadstampConfig {
    /// Directory under which the recursive search begins
    pub root_path: PathBuf,

    /// Text prepended to every matched file
    pub annotation_text: String,

    /// Glob matched against each file name
    pub pattern: String,

    /// Globs matched against the path relative to the root; matches are skipped
    pub exclude_patterns: Vec<String>,

    /// Honour `.gitignore`, `.ignore` and git exclude files during the walk
    pub respect_gitignore: bool,

    /// Follow symbolic links while walking
    pub follow_links: bool,

    /// Leave files that already start with the annotation block untouched
    pub skip_annotated: bool,

    /// Reaction to per-file failures
    pub failure_policy: FailurePolicy,
}

impl Default for HeadstampConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from(DEFAULT_ROOT_PATH),
            annotation_text: DEFAULT_ANNOTATION_TEXT.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            exclude_patterns: Vec::new(),
            respect_gitignore: false,
            follow_links: false,
            skip_annotated: false,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

impl HeadstampConfig {
    /// Build a configuration for the given root, pattern and text, keeping
    /// every other setting at its default.
    pub fn new(
        root_path: impl Into<PathBuf>,
        pattern: impl Into<String>,
        annotation_text: impl Into<String>,
    ) -> Self {
        Self {
            root_path: root_path.into(),
            pattern: pattern.into(),
            annotation_text: annotation_text.into(),
            ..Self::default()
        }
    }

    /// Set the failure policy
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Add an exclusion glob
    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Enable or disable skipping of already-annotated files
    pub fn with_skip_annotated(mut self, skip: bool) -> Self {
        self.skip_annotated = skip;
        self
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| HeadstampError::io("Failed to read config file", &path, e))?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content)
            .map_err(|e| HeadstampError::io("Failed to write config file", &path, e))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        validate_path_not_empty(&self.root_path, "root_path")?;

        let stripped = self.annotation_text.trim_start_matches(['\r', '\n']);
        validate_non_blank(stripped, "annotation_text")?;

        validate_non_blank(&self.pattern, "pattern")?;
        validate_glob(&self.pattern, "pattern")?;

        for (index, pattern) in self.exclude_patterns.iter().enumerate() {
            validate_glob(pattern, &format!("exclude_patterns[{index}]"))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
