//! Decimal to canonical Roman numeral encoding.

use crate::domain::denomination::{self, Term, ROMAN_LIMIT, ROMAN_VALUES};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::factorize::decompose;

/// Encode `number` as a canonical Roman numeral.
///
/// ```
/// assert_eq!(numerus::domain::encode(1981).unwrap(), "MCMLXXXI");
/// ```
///
/// # Errors
/// `OutOfRange` unless `1 <= number <= 3999`.
pub fn encode(number: u32) -> DomainResult<String> {
    let terms = encode_terms(number)?;
    Ok(terms.iter().map(Term::to_string).collect())
}

/// Canonical terms for `number`, one term per symbol run.
pub fn encode_terms(number: u32) -> DomainResult<Vec<Term>> {
    let number = u64::from(number);
    if number == 0 || number >= ROMAN_LIMIT {
        return Err(DomainError::OutOfRange { value: number });
    }
    normalize(&decompose(number, &ROMAN_VALUES)?)
}

/// Rewrite runs of four into subtractive pairs.
///
/// Greedy factorization leaves a 4 as `IIII` and a 9 as `VIIII`. A half-step
/// term (V, L, D) is held back until the next term shows whether it opens a
/// nine: `V` + `IIII` becomes `IX`, a lone `IIII` becomes `IV`.
pub fn normalize(terms: &[Term]) -> DomainResult<Vec<Term>> {
    let mut result = Vec::with_capacity(terms.len() + 1);
    let mut open: Option<Term> = None;

    for &term in terms {
        if term.count == 4 {
            let next = denomination::minuend(term.denomination)
                .ok_or(DomainError::NoMinuend(term.denomination))?;
            let minuend = match open.take() {
                Some(half) if half.denomination == next => denomination::minuend(next)
                    .ok_or(DomainError::NoMinuend(next))?,
                Some(half) => {
                    result.push(half);
                    next
                }
                None => next,
            };
            result.push(Term::single(term.denomination));
            result.push(Term::single(minuend));
            continue;
        }

        if let Some(half) = open.take() {
            result.push(half);
        }
        if denomination::is_power_of_ten(term.denomination) {
            result.push(term);
        } else {
            open = Some(term);
        }
    }

    if let Some(half) = open {
        result.push(half);
    }
    Ok(result)
}
