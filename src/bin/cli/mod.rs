//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: command execution (annotate, config management)
//! - config_layer: defaults, config file and CLI flag layering
//! - output: console and JSON rendering of results

pub mod args;
pub mod commands;
pub mod config_layer;
pub mod output;

pub use args::*;
pub use commands::*;
