//! Domain layer: denomination table, factorizer and the numeral codec
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod decoder;
pub mod denomination;
pub mod encoder;
pub mod error;
pub mod factorize;

pub use decoder::{decode_decimal, is_valid, parse_numerals, validate, validate_terms, Numeral};
pub use denomination::{Denomination, Term, DENOMINATIONS, ROMAN_LIMIT, ROMAN_VALUES};
pub use encoder::{encode, encode_terms, normalize};
pub use error::{DomainError, DomainResult};
pub use factorize::{decompose, largest_denomination, KEY_POWERS_OF_TEN};
