//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic into expression evaluation.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult, InvalidTerm};
pub use services::{evaluate, CalculatorService, Evaluation};
