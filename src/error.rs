//! Error types for pattern compilation.

use thiserror::Error;

/// Errors that can occur when compiling an LDML date or number pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty format pattern")]
    EmptyPattern,

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("too many sub-patterns (maximum 2 allowed, found {found})")]
    TooManySubPatterns { found: usize },

    #[error("number pattern has no digit placeholder")]
    MissingDigits,
}
