/// Binary operator evaluation logic.
///
/// Folds chains of `+ - * /` left to right on top of the checked arithmetic
/// primitives.
pub mod binary;

/// Core evaluation logic.
///
/// Walks the expression tree and dispatches each node kind.
pub mod core;

/// Function evaluation.
///
/// Holds the table of built-in functions and resolves call names against it.
pub mod function;
