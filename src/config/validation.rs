//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the level names a known severity
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LogConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use crate::config::schema::LogConfig;
use crate::log::{Level, ParseLevelError};

/// A semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid level: {0}")]
    Level(#[from] ParseLevelError),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &LogConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = config.level.parse::<Level>() {
        errors.push(ValidationError::from(e));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
