//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.

mod calculator;

pub use calculator::{
    evaluate, parse_input, CalculatorService, Evaluation, DEFAULT_MIN_TERMS,
};
