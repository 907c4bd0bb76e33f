//! Roman numeral parsing, validation and decoding.
//!
//! Decoding is only reachable through [`Numeral`], which can only be built
//! from text that passed validation.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::domain::denomination::{self, Term, ROMAN_LIMIT};
use crate::domain::encoder::encode_terms;
use crate::domain::error::{DomainError, DomainResult};

/// Run-length encode `text` into `(run length, denomination)` terms.
///
/// # Errors
/// `InvalidSymbol` for the first character that is not one of `IVXLCDM`.
pub fn parse_numerals(text: &str) -> DomainResult<Vec<Term>> {
    let values = text
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            denomination::value(symbol).ok_or(DomainError::InvalidSymbol { symbol, position })
        })
        .collect::<DomainResult<Vec<u64>>>()?;

    let runs = values.into_iter().chunk_by(|&v| v);
    let terms: Vec<Term> = runs
        .into_iter()
        .map(|(value, run)| Term::new(run.count() as u64, value))
        .collect();
    Ok(terms)
}

/// Check parsed terms against the run and subtraction rules.
///
/// - no run longer than three
/// - V, L and D never repeat
/// - an ascending pair needs a single I, X or C (or M) on the left and a right
///   side at most ten times larger
pub fn validate_terms(terms: &[Term]) -> DomainResult<()> {
    if terms.is_empty() {
        return Err(DomainError::Empty);
    }

    let mut prev: Option<&Term> = None;
    for term in terms {
        let repeatable = denomination::is_power_of_ten(term.denomination);
        if term.count > 3 || (term.count > 1 && !repeatable) {
            return Err(DomainError::MalformedRun {
                symbol: symbol_of(term),
                count: term.count,
            });
        }

        if let Some(p) = prev {
            if p.denomination <= term.denomination && !subtracts_from(p, term) {
                return Err(DomainError::IllegalSubtraction {
                    subtrahend: symbol_of(p),
                    minuend: symbol_of(term),
                });
            }
        }
        prev = Some(term);
    }
    Ok(())
}

fn subtracts_from(subtrahend: &Term, minuend: &Term) -> bool {
    denomination::is_power_of_ten(subtrahend.denomination)
        && subtrahend.is_single()
        && minuend.denomination <= subtrahend.denomination * 10
}

/// Terms built by `parse_numerals` always carry a table denomination; `?` only
/// shows up for hand-built terms passed to `validate_terms`.
fn symbol_of(term: &Term) -> char {
    denomination::symbol(term.denomination).unwrap_or('?')
}

/// Sum terms left to right; an ascending pair takes back twice the smaller
/// term, which was already added once.
fn decode_terms(terms: &[Term]) -> u64 {
    let mut total = 0;
    let mut prev: Option<&Term> = None;
    for term in terms {
        total += term.value();
        if let Some(p) = prev {
            if p.denomination < term.denomination {
                total -= 2 * p.value();
            }
        }
        prev = Some(term);
    }
    total
}

/// Validate `text` as a Roman numeral denoting a value in `1..=3999`.
pub fn validate(text: &str) -> DomainResult<()> {
    Numeral::parse(text).map(|_| ())
}

pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}

/// Decimal value of `text`. Validates first; malformed text is an error,
/// never a best-effort number.
pub fn decode_decimal(text: &str) -> DomainResult<u32> {
    Numeral::parse(text).map(|n| n.value())
}

/// A validated Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    text: String,
    terms: Vec<Term>,
    value: u32,
}

impl Numeral {
    /// Parse and validate `text`.
    ///
    /// Grammar violations surface as `InvalidSymbol`, `MalformedRun`,
    /// `IllegalSubtraction` or `Empty`. Well-formed text denoting 4000 or more
    /// (e.g. a long `IXIX...` chain) is `OutOfRange`.
    pub fn parse(text: &str) -> DomainResult<Self> {
        let terms = parse_numerals(text)?;
        validate_terms(&terms)?;
        let value = decode_terms(&terms);
        if value >= ROMAN_LIMIT {
            return Err(DomainError::OutOfRange { value });
        }
        Ok(Self {
            text: text.to_string(),
            terms,
            value: value as u32,
        })
    }

    /// Canonical numeral for `number`.
    pub fn from_value(number: u32) -> DomainResult<Self> {
        let terms = encode_terms(number)?;
        Ok(Self {
            text: terms.iter().map(Term::to_string).collect(),
            terms,
            value: number,
        })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Symbol runs in string order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl FromStr for Numeral {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<u32> for Numeral {
    type Error = DomainError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::from_value(number)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
