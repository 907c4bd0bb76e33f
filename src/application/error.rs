//! Application-level errors (wraps domain errors)

use itertools::Itertools;
use thiserror::Error;

use crate::domain::DomainError;

/// A term of an expression that failed validation, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTerm {
    pub term: String,
    pub reason: DomainError,
}

/// Application errors wrap domain errors and add expression-level context.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("invalid terms: {}", join_terms(.0))]
    InvalidTerms(Vec<InvalidTerm>),

    #[error("the result of {sum} is 4000 or more")]
    ResultOutOfRange { sum: u64 },

    #[error("expected at least {required} terms, found {found}")]
    TooFewTerms { found: usize, required: usize },

    #[error("config error: {message}")]
    Config { message: String },
}

fn join_terms(terms: &[InvalidTerm]) -> String {
    terms
        .iter()
        .map(|t| format!("'{}' ({})", t.term, t.reason))
        .join(", ")
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
