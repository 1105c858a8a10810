use crate::error::{CalcError, Result};

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`.
///
/// Both `0.0` and `-0.0` count as zero.
///
/// # Errors
/// Returns [`CalcError::DivisionByZero`] when `b` is zero.
///
/// ## Example
/// ```
/// use exprcalc::{CalcError, math::arithmetic::divide};
///
/// assert_eq!(divide(9.0, 3.0), Ok(3.0));
/// assert_eq!(divide(1.0, -0.0), Err(CalcError::DivisionByZero));
/// ```
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(CalcError::DivisionByZero);
    }
    Ok(a / b)
}
