//! Roman denomination table and the `Term` value type.

use std::fmt;

/// A single Roman symbol and the value it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Denomination {
    pub value: u64,
    pub symbol: char,
}

/// The seven Roman denominations, ascending by value.
pub static DENOMINATIONS: [Denomination; 7] = [
    Denomination { value: 1, symbol: 'I' },
    Denomination { value: 5, symbol: 'V' },
    Denomination { value: 10, symbol: 'X' },
    Denomination { value: 50, symbol: 'L' },
    Denomination { value: 100, symbol: 'C' },
    Denomination { value: 500, symbol: 'D' },
    Denomination { value: 1000, symbol: 'M' },
];

/// Denomination values only, for the factorizer.
pub static ROMAN_VALUES: [u64; 7] = [1, 5, 10, 50, 100, 500, 1000];

/// Smallest value without a Roman representation.
pub const ROMAN_LIMIT: u64 = 4000;

/// Symbol for a denomination value, if it is one of the seven.
pub fn symbol(value: u64) -> Option<char> {
    DENOMINATIONS
        .iter()
        .find(|d| d.value == value)
        .map(|d| d.symbol)
}

/// Denomination value for a symbol. Only upper-case symbols are recognised.
pub fn value(symbol: char) -> Option<u64> {
    DENOMINATIONS
        .iter()
        .find(|d| d.symbol == symbol)
        .map(|d| d.value)
}

/// Next larger denomination in the table: I -> V, V -> X, X -> L, ...
pub fn minuend(value: u64) -> Option<u64> {
    DENOMINATIONS
        .iter()
        .position(|d| d.value == value)
        .and_then(|i| DENOMINATIONS.get(i + 1))
        .map(|d| d.value)
}

/// I, X, C and M. V, L and D are half-steps.
pub fn is_power_of_ten(value: u64) -> bool {
    matches!(value, 1 | 10 | 100 | 1000)
}

/// `count` repetitions of one denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub count: u64,
    pub denomination: u64,
}

impl Term {
    pub fn new(count: u64, denomination: u64) -> Self {
        Self {
            count,
            denomination,
        }
    }

    pub fn single(denomination: u64) -> Self {
        Self::new(1, denomination)
    }

    pub fn value(&self) -> u64 {
        self.count * self.denomination
    }

    pub fn is_single(&self) -> bool {
        self.count == 1
    }
}

impl From<(u64, u64)> for Term {
    fn from((count, denomination): (u64, u64)) -> Self {
        Self::new(count, denomination)
    }
}

/// Renders the term as repeated Roman symbols; non-Roman denominations
/// fall back to `count x denomination`.
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match symbol(self.denomination) {
            Some(s) => {
                for _ in 0..self.count {
                    write!(f, "{}", s)?;
                }
                Ok(())
            }
            None => write!(f, "{}x{}", self.count, self.denomination),
        }
    }
}
