//! CLI Command Implementations
//!
//! - annotate: the annotation run
//! - config: configuration management commands

pub mod annotate;
pub mod config;

pub use annotate::annotate_command;
pub use config::{init_config, print_default_config, validate_config};
