//! File discovery for annotation runs.
//!
//! Walks the traversal root recursively and selects files whose *name*
//! matches the configured pattern. Symlinks are listed like files unless
//! they lead to a directory; linked directories are only descended into
//! when `follow_links` is set. Exclusion globs are matched
//! against the path relative to the root. A plain `walkdir` traversal is
//! used by default so every file is visited; when gitignore rules are
//! requested the `ignore` walker is used instead.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::config::{FailurePolicy, HeadstampConfig};
use crate::core::errors::{HeadstampError, Result};

/// Compiled selection rules for a walk
#[derive(Debug, Clone)]
pub struct FileFilter {
    name_matcher: GlobMatcher,
    exclude: Option<GlobSet>,
}

impl FileFilter {
    /// Compile the filename pattern and exclusion globs.
    pub fn new(pattern: &str, exclude_patterns: &[String]) -> Result<Self> {
        let name_matcher = GlobBuilder::new(pattern.trim())
            .literal_separator(true)
            .build()?
            .compile_matcher();

        Ok(Self {
            name_matcher,
            exclude: compile_globset(exclude_patterns)?,
        })
    }

    /// Whether `path` (found under `root`) should be annotated.
    pub fn matches(&self, path: &Path, root: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };

        if !self.name_matcher.is_match(Path::new(name)) {
            return false;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        match &self.exclude {
            Some(exclude) => !exclude.is_match(relative),
            None => true,
        }
    }
}

/// Discover the files an annotation run should touch, sorted by path.
///
/// Fails before anything is returned when the root does not exist or is
/// not a directory.
pub fn discover_files(config: &HeadstampConfig) -> Result<Vec<PathBuf>> {
    let root = config.root_path.as_path();
    ensure_traversable_root(root)?;

    let filter = FileFilter::new(&config.pattern, &config.exclude_patterns)?;

    let mut collected = if config.respect_gitignore {
        info!("Walking '{}' with ignore rules", root.display());
        walk_with_ignore_rules(root, &filter, config)?
    } else {
        walk_all(root, &filter, config)?
    };

    collected.sort();
    log_discovery_results(root, &config.pattern, &collected);
    Ok(collected)
}

fn ensure_traversable_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| {
        HeadstampError::traversal_io(root, "root does not exist or is not readable", e)
    })?;

    if !metadata.is_dir() {
        return Err(HeadstampError::traversal(root, "root is not a directory"));
    }

    fs::read_dir(root)
        .map(|_| ())
        .map_err(|e| HeadstampError::traversal_io(root, "root directory is not readable", e))
}

/// Visit every entry under `root` with no ignore filtering.
fn walk_all(root: &Path, filter: &FileFilter, config: &HeadstampConfig) -> Result<Vec<PathBuf>> {
    let mut collected = Vec::new();

    for entry in WalkDir::new(root).follow_links(config.follow_links) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let at = err.path().unwrap_or(root).to_path_buf();
                let message = err.to_string();
                handle_walk_error(config.failure_policy, at, message, err.into_io_error())?;
                continue;
            }
        };

        if !is_candidate(entry.file_type(), entry.path()) {
            continue;
        }

        if filter.matches(entry.path(), root) {
            collected.push(entry.into_path());
        }
    }

    Ok(collected)
}

/// Visit entries under `root`, honouring gitignore and `.ignore` files.
fn walk_with_ignore_rules(
    root: &Path,
    filter: &FileFilter,
    config: &HeadstampConfig,
) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .require_git(false)
        .hidden(false)
        .follow_links(config.follow_links)
        .build();

    let mut collected = Vec::new();

    for entry in walker {
        let dir_entry = match entry {
            Ok(dir_entry) => dir_entry,
            Err(err) => {
                let message = err.to_string();
                handle_walk_error(config.failure_policy, root.to_path_buf(), message, err.into_io_error())?;
                continue;
            }
        };

        let candidate = dir_entry
            .file_type()
            .map(|ft| is_candidate(ft, dir_entry.path()))
            .unwrap_or(false);
        if !candidate {
            continue;
        }

        if filter.matches(dir_entry.path(), root) {
            collected.push(dir_entry.into_path());
        }
    }

    Ok(collected)
}

/// Regular files, and symlinks whose target is not a directory. A dangling
/// link is kept so the rewrite reports it instead of silently passing it by.
fn is_candidate(file_type: fs::FileType, path: &Path) -> bool {
    file_type.is_file() || (file_type.is_symlink() && !path.is_dir())
}

fn handle_walk_error(
    policy: FailurePolicy,
    at: PathBuf,
    message: String,
    source: Option<std::io::Error>,
) -> Result<()> {
    match policy {
        FailurePolicy::Abort => Err(HeadstampError::Traversal {
            root: at,
            message,
            source,
        }),
        FailurePolicy::Continue => {
            warn!("Failed to walk '{}': {message}", at.display());
            Ok(())
        }
    }
}

fn log_discovery_results(root: &Path, pattern: &str, collected: &[PathBuf]) {
    info!(
        "File discovery completed: {} files matching '{}' under '{}'",
        collected.len(),
        pattern,
        root.display()
    );
    for path in collected {
        debug!("Selected {}", path.display());
    }
}

fn compile_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    let mut builder = GlobSetBuilder::new();
    let mut added = false;

    for pattern in patterns {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            continue;
        }

        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .build()
            .map_err(|err| HeadstampError::pattern(pattern, err.kind().to_string()))?;
        builder.add(glob);
        added = true;
    }

    if added {
        builder
            .build()
            .map(Some)
            .map_err(|err| HeadstampError::pattern(patterns.join(","), err.kind().to_string()))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn filter_matches_file_names_only() {
        let filter = FileFilter::new("*.rs", &[]).unwrap();
        let root = Path::new("workspace");

        assert!(filter.matches(&root.join("lib.rs"), root));
        assert!(filter.matches(&root.join("deep/nested/mod.rs"), root));
        assert!(!filter.matches(&root.join("notes.txt"), root));
        assert!(!filter.matches(&root.join("lib.rs.bak"), root));
        assert!(!filter.matches(&root.join("LIB.RS"), root));
    }

    #[test]
    fn filter_applies_exclusions_relative_to_root() {
        let filter = FileFilter::new("*.rs", &["generated/**".to_string()]).unwrap();
        let root = Path::new("workspace");

        assert!(!filter.matches(&root.join("generated/types.rs"), root));
        assert!(filter.matches(&root.join("src/generated.rs"), root));
    }

    #[test]
    fn compile_globset_rejects_invalid_patterns() {
        assert!(compile_globset(&["[invalid".to_string()]).is_err());
        assert!(compile_globset(&["  ".to_string()]).unwrap().is_none());

        let valid = compile_globset(&["**/*.rs".to_string()]).unwrap();
        assert!(valid.unwrap().is_match("src/lib.rs"));
    }

    #[test]
    fn discovery_is_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "z.rs");
        touch(root, "a.rs");
        touch(root, "b.txt");
        touch(root, "sub/inner/c.rs");

        let config = HeadstampConfig::new(root, "*.rs", "// H");
        let files = discover_files(&config).unwrap();

        assert_eq!(
            files,
            vec![root.join("a.rs"), root.join("sub/inner/c.rs"), root.join("z.rs")]
        );
    }

    #[test]
    fn missing_root_is_a_traversal_error() {
        let dir = tempdir().unwrap();
        let config = HeadstampConfig::new(dir.path().join("missing"), "*.rs", "// H");

        let err = discover_files(&config).unwrap_err();
        assert!(matches!(err, HeadstampError::Traversal { .. }));
    }

    #[test]
    fn file_root_is_rejected() {
        let dir = tempdir().unwrap();
        let file = touch(dir.path(), "lib.rs");
        let config = HeadstampConfig::new(file, "*.rs", "// H");

        assert!(matches!(
            discover_files(&config),
            Err(HeadstampError::Traversal { .. })
        ));
    }

    #[test]
    fn plain_walk_ignores_gitignore_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join(".gitignore"), "vendored/\n").unwrap();
        touch(root, "vendored/dep.rs");
        touch(root, "lib.rs");

        let config = HeadstampConfig::new(root, "*.rs", "// H");
        assert_eq!(discover_files(&config).unwrap().len(), 2);

        let mut config = config;
        config.respect_gitignore = true;
        assert_eq!(discover_files(&config).unwrap(), vec![root.join("lib.rs")]);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_files_are_selected_but_linked_directories_are_not_walked() {
        use std::os::unix::fs::symlink;

        let outside = tempdir().unwrap();
        let real = touch(outside.path(), "real.rs");
        touch(outside.path(), "linked_dir/inner.rs");

        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "lib.rs");
        symlink(&real, root.join("link.rs")).unwrap();
        symlink(outside.path().join("linked_dir"), root.join("linked_dir")).unwrap();

        let mut config = HeadstampConfig::new(root, "*.rs", "// H");
        let expected = vec![root.join("lib.rs"), root.join("link.rs")];
        assert_eq!(discover_files(&config).unwrap(), expected);

        config.respect_gitignore = true;
        assert_eq!(discover_files(&config).unwrap(), expected);
    }

    #[test]
    fn hidden_directories_are_visited() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, ".cargo/config.rs");

        let mut config = HeadstampConfig::new(root, "*.rs", "// H");
        assert_eq!(discover_files(&config).unwrap().len(), 1);

        config.respect_gitignore = true;
        assert_eq!(discover_files(&config).unwrap().len(), 1);
    }
}
