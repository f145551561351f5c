//! Errors raised at the generation boundary.
//!
//! The generation core itself is total: once a preset and policy are accepted,
//! every generate/emit call returns a plain value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Unknown or unmapped complexity tier or dialect. Fatal before any class is generated.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    /// Requested class count was not strictly positive.
    #[error("Number of classes must be a positive integer, got {0}")]
    InvalidCount(i64),
    /// Policy could not be found, parsed or validated.
    #[error("Invalid policy: {0}")]
    Policy(String),
}

pub type GeneratorResult<T> = Result<T, GeneratorError>;
