//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid outline input.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Root cannot be empty")]
    EmptyRoot,

    #[error("Value '{value}' contains illegal character '{character}'")]
    IllegalCharacter { value: String, character: char },

    #[error("Value at depth {depth} cannot be empty")]
    EmptyValue { depth: usize },

    #[error("Value '{value}' is a reserved path component")]
    ReservedName { value: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
