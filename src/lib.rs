//! # Headstamp: license and attribution headers for source trees
//!
//! Walks a directory tree and prepends a fixed comment block to every file
//! whose name matches a glob pattern. Each matched file is rewritten in
//! place as `block + "\n" + original`, one file at a time.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                  API Layer                    │
//! │        FileAnnotator · AnnotationReport       │
//! ├───────────────────────────────────────────────┤
//! │  Config   │  Discovery   │  Annotation │ Errors│
//! │ • YAML    │ • walkdir    │ • block     │       │
//! │ • checks  │ • ignore     │ • rewrite   │       │
//! │           │ • globset    │ • truncate  │       │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use headstamp_rs::{FailurePolicy, FileAnnotator, HeadstampConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HeadstampConfig::new("vendor/src", "*.rs", "// Vendored from upstream\n")
//!         .with_failure_policy(FailurePolicy::Continue);
//!
//!     let report = FileAnnotator::new(config)?.run()?;
//!     println!("{} files annotated", report.annotated.len());
//!     Ok(())
//! }
//! ```
//!
//! Rerunning over the same tree prepends the block again unless
//! `skip_annotated` is enabled.

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core building blocks
pub mod core {
    //! Configuration, discovery, annotation and error types.

    pub mod annotation;
    pub mod config;
    pub mod discovery;
    pub mod errors;
}

// Public API
pub mod api {
    //! High-level annotation runs and their results.

    pub mod annotator;
    pub mod results;
}

pub use api::annotator::{annotate_file, annotate_tree, FileAnnotator};
pub use api::results::{AnnotationReport, FileFailure};
pub use core::annotation::AnnotationBlock;
pub use core::config::{FailurePolicy, HeadstampConfig};
pub use core::errors::{HeadstampError, Result};
