//! CLI Argument Structures
//!
//! All command and flag definitions for the headstamp binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prepend license and attribution headers to source files
#[derive(Parser)]
#[command(name = "headstamp")]
#[command(version = VERSION)]
#[command(about = "Prepend a license/attribution block to every matching file in a tree")]
#[command(long_about = "
Walk a directory tree and prepend a fixed comment block to every file whose
name matches a pattern. Each file becomes: block, newline, original content.

Common Usage:

  # Default pass: async-stripe attribution over ft-stripe/src/async_stripe
  headstamp

  # Custom root, pattern and header text
  headstamp annotate vendor/src --pattern '*.go' --text-file HEADER.txt

  # Keep going past unwritable files and report them at the end
  headstamp annotate --continue-on-error

  # See what would change without writing anything
  headstamp annotate --dry-run --format json

  # Write a config file to customise
  headstamp init-config

Running twice prepends the block twice unless --skip-annotated is given.
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Prepend the annotation block to every matching file (the default command)
    Annotate(Box<AnnotateArgs>),

    /// Print default configuration in YAML format
    #[command(name = "print-default-config")]
    PrintDefaultConfig,

    /// Initialize a configuration file with defaults
    #[command(name = "init-config")]
    InitConfig(InitConfigArgs),

    /// Validate a headstamp configuration file
    #[command(name = "validate-config")]
    ValidateConfig(ValidateConfigArgs),
}

/// Output format for run results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable JSON report on stdout
    Json,
}

#[derive(Args, Default)]
pub struct AnnotateArgs {
    /// Directory to walk (overrides the config file)
    pub root: Option<PathBuf>,

    /// Glob matched against file names, e.g. '*.rs'
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Annotation text to prepend
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the annotation text from a file
    #[arg(long)]
    pub text_file: Option<PathBuf>,

    /// Configuration file (defaults to .headstamp.yml or .headstamp.yaml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip paths (relative to the root) matching this glob; repeatable
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Honour .gitignore and .ignore files during the walk
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Follow symbolic links while walking
    #[arg(long)]
    pub follow_links: bool,

    /// Leave files that already start with the block untouched
    #[arg(long)]
    pub skip_annotated: bool,

    /// Record per-file failures and keep going instead of stopping at the first one
    #[arg(long)]
    pub continue_on_error: bool,

    /// List the files that would be annotated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct InitConfigArgs {
    /// Output configuration file name
    #[arg(short, long, default_value = ".headstamp.yml")]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ValidateConfigArgs {
    /// Path to configuration file to validate
    #[arg(short, long, required = true)]
    pub config: PathBuf,

    /// Show the full annotation text
    #[arg(long)]
    pub show_text: bool,
}
