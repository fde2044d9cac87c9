//! Validation helper functions for configuration types.

use std::path::Path;

use globset::GlobBuilder;

use crate::core::errors::{HeadstampError, Result};

/// Validate that a string holds something other than whitespace.
pub fn validate_non_blank(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HeadstampError::config_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a path is not the empty path.
pub fn validate_path_not_empty(value: &Path, field: &str) -> Result<()> {
    if value.as_os_str().is_empty() {
        return Err(HeadstampError::config_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a glob pattern compiles.
pub fn validate_glob(pattern: &str, field: &str) -> Result<()> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|_| ())
        .map_err(|err| {
            HeadstampError::config_field(
                format!("{} is not a valid glob '{}': {}", field, pattern, err.kind()),
                field,
            )
        })
}
