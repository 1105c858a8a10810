use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = CalcError> = std::result::Result<T, E>;

/// Represents every failure an evaluation, a primitive or a collaborator can
/// report.
///
/// Failures are local to one call: nothing is retried and no partial result
/// is ever returned. The `Display` output is the message forwarded to users
/// verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The expression contains a character outside the accepted set.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Character index in the original input.
        position:  usize,
    },
    /// A `(` was never closed, or a `)` has no opening partner.
    #[error("Mismatched parentheses: unmatched '{unmatched}'.")]
    MismatchedParentheses {
        /// The parenthesis left without a partner.
        unmatched: char,
    },
    /// A function name is not followed by a number or a parenthesised group.
    #[error("Invalid argument for function {name}.")]
    InvalidFunctionArgument {
        /// The function name as written.
        name: String,
    },
    /// Called a function that is not in the function table.
    #[error("Unknown function: {name}.")]
    UnknownFunction {
        /// The function name as written.
        name: String,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The token sequence does not form a valid expression.
    #[error("Invalid expression: {details}.")]
    InvalidExpression {
        /// What was wrong with the expression.
        details: String,
    },
    /// An argument lies outside the domain of a function.
    #[error("Invalid input for {function}: {value} is outside its domain.")]
    DomainError {
        /// The function that rejected the argument.
        function: &'static str,
        /// The rejected argument.
        value:    f64,
    },
    /// A string is not in `mantissa e exponent` form.
    #[error("Invalid scientific notation format: '{text}'.")]
    InvalidFormat {
        /// The rejected input.
        text: String,
    },
    /// A string could not be coerced to a number for the memory slot.
    #[error("Invalid numeric value: '{text}'.")]
    InvalidValue {
        /// The rejected input.
        text: String,
    },
}

/// The category of a [`CalcError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    MismatchedParentheses,
    InvalidFunctionArgument,
    UnknownFunction,
    DivisionByZero,
    InvalidExpression,
    DomainError,
    InvalidFormat,
    InvalidValue,
}

impl CalcError {
    /// Returns the category of this error.
    ///
    /// ## Example
    /// ```
    /// use exprcalc::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("10/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::MismatchedParentheses { .. } => ErrorKind::MismatchedParentheses,
            Self::InvalidFunctionArgument { .. } => ErrorKind::InvalidFunctionArgument,
            Self::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            Self::DomainError { .. } => ErrorKind::DomainError,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    pub(crate) fn invalid_expression(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }
}
