//! Configuration Layer Management
//!
//! Builds the effective [`HeadstampConfig`] from three layers, lowest first:
//! compiled-in defaults, a YAML config file, then CLI flags.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::cli::args::AnnotateArgs;
use headstamp_rs::core::config::{FailurePolicy, HeadstampConfig};

/// Config files picked up from the working directory when `--config` is absent.
const IMPLICIT_CONFIG_FILES: [&str; 2] = [".headstamp.yml", ".headstamp.yaml"];

/// Load a config file, or the implicit one in `cwd`, or the defaults.
pub fn load_base_config(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<HeadstampConfig> {
    let implicit = if explicit.is_none() {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(|name| cwd.join(name))
            .find(|p| p.exists())
    } else {
        None
    };

    match explicit.map(Path::to_path_buf).or(implicit) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            HeadstampConfig::from_yaml_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))
        }
        None => Ok(HeadstampConfig::default()),
    }
}

/// Apply CLI flags on top of `config`. Flags only ever switch options on.
pub fn apply_cli_overrides(config: &mut HeadstampConfig, args: &AnnotateArgs) -> anyhow::Result<()> {
    if let Some(root) = &args.root {
        config.root_path = root.clone();
    }

    if let Some(pattern) = &args.pattern {
        config.pattern = pattern.clone();
    }

    if let Some(text) = &args.text {
        config.annotation_text = text.clone();
    } else if let Some(path) = &args.text_file {
        config.annotation_text = read_text_file(path)?;
    }

    config.exclude_patterns.extend(args.exclude.iter().cloned());

    if args.respect_gitignore {
        config.respect_gitignore = true;
    }
    if args.follow_links {
        config.follow_links = true;
    }
    if args.skip_annotated {
        config.skip_annotated = true;
    }
    if args.continue_on_error {
        config.failure_policy = FailurePolicy::Continue;
    }

    Ok(())
}

/// Build and validate the effective configuration for an annotate run.
pub fn build_layered_config(args: &AnnotateArgs) -> anyhow::Result<HeadstampConfig> {
    let cwd = std::env::current_dir().context("Failed to resolve the working directory")?;
    let mut config = load_base_config(args.config.as_deref(), &cwd)?;
    apply_cli_overrides(&mut config, args)?;

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}

fn read_text_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read annotation text from {}", path.display()))
}
