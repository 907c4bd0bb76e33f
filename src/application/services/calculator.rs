//! Roman numeral arithmetic
//!
//! Evaluates `+`-separated sums of numerals and re-encodes the result.

use tracing::{debug, instrument};

use crate::application::error::InvalidTerm;
use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Numeral, ROMAN_LIMIT};

/// Minimum number of terms for an expression to count as an equation.
pub const DEFAULT_MIN_TERMS: usize = 2;

/// Output from evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Validated terms, in input order
    pub terms: Vec<Numeral>,
    /// Decimal sum of all terms
    pub sum: u32,
    /// Canonical numeral for the sum
    pub numeral: Numeral,
}

/// Split an expression on `+` and trim each term.
///
/// Anything that is not `+` stays inside a term, so `"XXX - XX"` is one
/// (invalid) term.
pub fn parse_input(expression: &str) -> Vec<String> {
    expression
        .split('+')
        .map(|term| term.trim().to_string())
        .collect()
}

/// Service for evaluating numeral sums.
#[derive(Debug, Clone)]
pub struct CalculatorService {
    min_terms: usize,
}

impl Default for CalculatorService {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TERMS)
    }
}

impl CalculatorService {
    /// Create a calculator requiring at least `min_terms` terms (at least one).
    /// With `min_terms == 1` a single numeral passes through unchanged in value.
    pub fn new(min_terms: usize) -> Self {
        Self {
            min_terms: min_terms.max(1),
        }
    }

    pub fn min_terms(&self) -> usize {
        self.min_terms
    }

    /// Validate, decode and sum every term of `expression`.
    ///
    /// # Errors
    /// - `TooFewTerms` if there are fewer than `min_terms` terms
    /// - `InvalidTerms` listing every term that fails validation
    /// - `ResultOutOfRange` if the sum has no Roman representation
    #[instrument(level = "debug", skip(self))]
    pub fn evaluate(&self, expression: &str) -> ApplicationResult<Evaluation> {
        let inputs = parse_input(expression);
        if inputs.len() < self.min_terms {
            return Err(ApplicationError::TooFewTerms {
                found: inputs.len(),
                required: self.min_terms,
            });
        }

        let mut terms = Vec::with_capacity(inputs.len());
        let mut invalid = Vec::new();
        for input in inputs {
            match Numeral::parse(&input) {
                Ok(numeral) => terms.push(numeral),
                Err(reason) => invalid.push(InvalidTerm {
                    term: input,
                    reason,
                }),
            }
        }
        if !invalid.is_empty() {
            debug!("evaluate: {} invalid terms", invalid.len());
            return Err(ApplicationError::InvalidTerms(invalid));
        }

        let sum: u64 = terms.iter().map(|t| u64::from(t.value())).sum();
        debug!("evaluate: sum={}", sum);
        if sum >= ROMAN_LIMIT {
            return Err(ApplicationError::ResultOutOfRange { sum });
        }

        let sum = sum as u32;
        let numeral = Numeral::from_value(sum)?;
        Ok(Evaluation {
            terms,
            sum,
            numeral,
        })
    }
}

/// Evaluate with the default calculator (two or more terms).
pub fn evaluate(expression: &str) -> ApplicationResult<Evaluation> {
    CalculatorService::default().evaluate(expression)
}
