//! Arithmetic expression evaluator for `+ - * /`, unary signs and
//! parentheses, plus the handful of single-argument shell commands.

#![allow(nonstandard_style)]

pub mod commands;
pub mod error_handling;
pub mod evaluating;
pub mod parsing;
pub mod scanning;

pub use commands::Command;
pub use error_handling::{CalcError, CommandError, Failure};
pub use evaluating::evaluate;
