//! numerus: Roman numeral codec and calculator
//!
//! Layers, innermost first:
//! - `domain`: denomination table, greedy factorizer, encoder, validating decoder
//! - `application`: expression evaluation
//! - `config`: layered settings
//! - `cli`: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{evaluate, ApplicationError, CalculatorService, Evaluation};
pub use domain::{decode_decimal, decompose, encode, is_valid, validate, DomainError, Numeral, Term};
