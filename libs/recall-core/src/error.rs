//! Error types for recall-core.

use thiserror::Error;

/// Result type alias using ReviewError.
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Errors that can occur while grading a review attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised when card texts are rejected before they are stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("original text must not be empty")]
    EmptyOriginal,

    #[error("translated text must not be empty")]
    EmptyTranslation,

    #[error("original and translated text must differ")]
    IdenticalTexts,

    #[error("deck must be selected")]
    MissingDeck,

    #[error("invalid scheduler configuration: {0}")]
    InvalidConfig(String),
}
