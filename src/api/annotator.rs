//! The annotation run: discover matching files and prepend the block to each.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, warn};

use crate::api::results::{AnnotationReport, FileFailure};
use crate::core::annotation::{file_has_block, prepend_to_file, AnnotationBlock, FileOutcome};
use crate::core::config::{FailurePolicy, HeadstampConfig};
use crate::core::discovery::discover_files;
use crate::core::errors::Result;

/// Config-driven annotator for a directory tree
#[derive(Debug, Clone)]
pub struct FileAnnotator {
    config: HeadstampConfig,
    block: AnnotationBlock,
    dry_run: bool,
}

impl FileAnnotator {
    /// Validate `config` and prepare the annotation block.
    pub fn new(config: HeadstampConfig) -> Result<Self> {
        config.validate()?;
        let block = AnnotationBlock::new(&config.annotation_text)?;

        Ok(Self {
            config,
            block,
            dry_run: false,
        })
    }

    /// Report what would be annotated without writing anything.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &HeadstampConfig {
        &self.config
    }

    /// Normalised block that will be prepended
    pub fn block(&self) -> &AnnotationBlock {
        &self.block
    }

    /// Annotate every matching file under the configured root.
    ///
    /// Under [`FailurePolicy::Abort`] the first failure is returned and files
    /// annotated before it stay modified. Under [`FailurePolicy::Continue`]
    /// failures are collected in the report. A missing or unreadable root
    /// always fails before any file is touched.
    pub fn run(&self) -> Result<AnnotationReport> {
        let started = Instant::now();
        let config = &self.config;
        info!(
            "Annotating files matching '{}' under '{}'{}",
            config.pattern,
            config.root_path.display(),
            if self.dry_run { " (dry run)" } else { "" }
        );

        let files = discover_files(config)?;
        let mut report = AnnotationReport::new(&config.root_path, &config.pattern, self.dry_run);

        for path in files {
            let outcome = if self.dry_run {
                self.preview(&path)
            } else {
                prepend_to_file(&path, &self.block, config.skip_annotated)
            };

            match outcome {
                Ok(FileOutcome::Annotated) => report.annotated.push(path),
                Ok(FileOutcome::AlreadyAnnotated) => report.skipped.push(path),
                Err(err) => match config.failure_policy {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Continue => {
                        warn!("Skipping {}: {err}", path.display());
                        report.failures.push(FileFailure::new(path, &err));
                    }
                },
            }
        }

        report.elapsed_ms = started.elapsed().as_millis() as u64;
        info!(
            "Annotation finished: {} annotated, {} skipped, {} failed in {}ms",
            report.annotated.len(),
            report.skipped.len(),
            report.failures.len(),
            report.elapsed_ms
        );
        Ok(report)
    }

    fn preview(&self, path: &Path) -> Result<FileOutcome> {
        if self.config.skip_annotated && file_has_block(path, &self.block)? {
            return Ok(FileOutcome::AlreadyAnnotated);
        }
        Ok(FileOutcome::Annotated)
    }
}

/// Prepend `block` to every file under `root_path` whose name matches
/// `pattern`, stopping at the first failure.
///
/// Returns the annotated paths in the order they were processed.
pub fn annotate_tree(root_path: impl AsRef<Path>, pattern: &str, block: &str) -> Result<Vec<PathBuf>> {
    let config = HeadstampConfig::new(root_path.as_ref(), pattern, block);
    FileAnnotator::new(config)?
        .run()
        .map(|report| report.annotated)
}

/// Prepend `block` (leading CR/LF stripped) and a newline to the file at `path`.
pub fn annotate_file(path: impl AsRef<Path>, block: &str) -> Result<()> {
    let block = AnnotationBlock::new(block)?;
    prepend_to_file(path.as_ref(), &block, false).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn annotate_file_prepends_stripped_block() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.rs");
        fs::write(&path, "fn main() {}\n").unwrap();

        annotate_file(&path, "\n\r\n// Header").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "// Header\nfn main() {}\n");
    }

    #[test]
    fn dry_run_leaves_files_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.rs");
        fs::write(&path, "fn main() {}\n").unwrap();

        let config = HeadstampConfig::new(dir.path(), "*.rs", "// Header");
        let report = FileAnnotator::new(config).unwrap().with_dry_run(true).run().unwrap();

        assert!(report.dry_run);
        assert_eq!(report.annotated, vec![path.clone()]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fn main() {}\n");
    }

    #[test]
    fn dry_run_reports_already_annotated_files_as_skipped() {
        let dir = tempdir().unwrap();
        let done = dir.path().join("done.rs");
        let todo = dir.path().join("todo.rs");
        fs::write(&done, "// Header\nfn a() {}\n").unwrap();
        fs::write(&todo, "fn b() {}\n").unwrap();

        let config = HeadstampConfig::new(dir.path(), "*.rs", "// Header").with_skip_annotated(true);
        let report = FileAnnotator::new(config).unwrap().with_dry_run(true).run().unwrap();

        assert_eq!(report.skipped, vec![done]);
        assert_eq!(report.annotated, vec![todo]);
    }

    #[test]
    fn new_keeps_config_and_normalises_block() {
        let dir = tempdir().unwrap();
        let config = HeadstampConfig::new(dir.path(), "*.rs", "\r\n// Header\n");
        let annotator = FileAnnotator::new(config.clone()).unwrap();

        assert_eq!(annotator.config().pattern, config.pattern);
        assert_eq!(annotator.config().root_path, dir.path().to_path_buf());
        assert_eq!(annotator.block().as_str(), "// Header\n");
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let dir = tempdir().unwrap();
        let config = HeadstampConfig::new(dir.path(), "*.rs", "\r\n");
        assert!(FileAnnotator::new(config).is_err());
    }
}
