//! # exprcalc
//!
//! exprcalc evaluates arithmetic expressions written as strings.
//! It supports `+ - * /`, parentheses, prefix signs and the one-argument
//! functions `sin cos tan asin acos atan log log10 ln exp`, together with a
//! single-slot memory and scientific-notation formatting.
//!
//! Every evaluation runs the same pipeline: validation, tokenization,
//! recursive-descent parsing into a tree, and evaluation of the tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::trace;

use crate::interpreter::{
    evaluator::core::eval, lexer::tokenize, parser::core::parse, validator::validate,
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// an expression as a tree. The tree is built by the parser and traversed by
/// the evaluator.
pub mod ast;
/// Provides the unified error type for evaluation and its collaborators.
///
/// Every failure mode (invalid characters, unbalanced parentheses, bad
/// function arguments, unknown functions, division by zero, domain errors,
/// malformed scientific notation, non-numeric memory values) is one variant
/// of [`CalcError`], with a user-facing message.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together validation, lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Screens input characters before parsing.
/// - Provides the individual phases for callers that need tokens or trees.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Pure arithmetic, trigonometric and logarithmic primitives.
///
/// Usable on their own; the evaluator also routes through them, so domain
/// checks apply inside expressions too.
pub mod math;
/// The single-slot memory store.
pub mod memory;
/// JSON response bodies for calculations, memory operations and failures.
pub mod response;
/// Scientific-notation formatting and parsing.
pub mod scientific;
/// Line-oriented calculator sessions with memory commands.
pub mod session;

pub use error::{CalcError, ErrorKind, Result};
pub use memory::Memory;

/// Evaluates an arithmetic expression and returns its value.
///
/// Whitespace is ignored. Parentheses bind tightest, then function calls,
/// then `*` and `/`, then `+` and `-`; operators of equal precedence apply
/// left to right.
///
/// # Errors
/// Returns a [`CalcError`] if the expression contains an invalid character,
/// is malformed, calls an unknown function, divides by zero, or passes a
/// function an argument outside its domain.
///
/// # Examples
/// ```
/// use exprcalc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4"), Ok(14.0));
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("2+(3*(4-1))"), Ok(11.0));
/// assert_eq!(evaluate("sin(0)"), Ok(0.0));
///
/// assert_eq!(evaluate("10/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
/// assert_eq!(evaluate("ln(-1)").unwrap_err().kind(), ErrorKind::DomainError);
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let source = validate(expression)?;
    let tokens = tokenize(&source)?;
    let expr = parse(&tokens)?;
    let value = eval(&expr)?;

    trace!(expression, value, "evaluated");
    Ok(value)
}
