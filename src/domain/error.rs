//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the numeral grammar or of the
/// representable range. These are independent of CLI and config concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("malformed run: '{symbol}' repeated {count} times")]
    MalformedRun { symbol: char, count: u64 },

    #[error("illegal subtraction: '{subtrahend}' before '{minuend}'")]
    IllegalSubtraction { subtrahend: char, minuend: char },

    #[error("empty numeral")]
    Empty,

    #[error("{value} is out of range (1..=3999)")]
    OutOfRange { value: u64 },

    #[error("no denomination fits remaining value {remaining}")]
    NoDenomination { remaining: u64 },

    #[error("no larger denomination above {0}")]
    NoMinuend(u64),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
