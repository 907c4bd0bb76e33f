//! Greedy factorization of a number into `(count, denomination)` terms.
//!
//! Shared by the numeral encoder and any renderer that spells out numbers by
//! key amounts (thousands, hundreds, ...).

use crate::domain::denomination::Term;
use crate::domain::error::{DomainError, DomainResult};

/// Key powers of ten for spelling out amounts in words.
pub const KEY_POWERS_OF_TEN: [u64; 5] = [1_000_000_000, 1_000_000, 1_000, 100, 1];

/// Largest denomination not exceeding `number`. Zero denominations never fit.
pub fn largest_denomination(number: u64, denominations: &[u64]) -> Option<u64> {
    denominations
        .iter()
        .copied()
        .filter(|&d| d > 0 && d <= number)
        .max()
}

/// Split `number` into terms, largest denomination first.
///
/// Each step takes as many of the largest fitting denomination as possible, so
/// every denomination appears at most once and the result is strictly
/// decreasing. `0` yields no terms.
///
/// # Errors
/// `NoDenomination` if a remainder is left that no denomination fits, which
/// happens when the table lacks `1` (or another divisor of the remainder).
pub fn decompose(number: u64, denominations: &[u64]) -> DomainResult<Vec<Term>> {
    let mut terms = Vec::new();
    let mut remaining = number;

    while remaining > 0 {
        let denomination = largest_denomination(remaining, denominations)
            .ok_or(DomainError::NoDenomination { remaining })?;
        terms.push(Term::new(remaining / denomination, denomination));
        remaining %= denomination;
    }
    Ok(terms)
}
