use crate::error::{CalcError, Result};

/// Computes the natural logarithm.
///
/// # Errors
/// Returns [`CalcError::DomainError`] if `value` is zero, negative or NaN.
///
/// ## Example
/// ```
/// use exprcalc::math::logarithm::ln;
///
/// assert_eq!(ln(1.0), Ok(0.0));
/// assert!(ln(-1.0).is_err());
/// ```
pub fn ln(value: f64) -> Result<f64> {
    check_positive("ln", value)?;
    Ok(value.ln())
}

/// Computes the base-10 logarithm.
///
/// # Errors
/// Returns [`CalcError::DomainError`] if `value` is zero, negative or NaN.
pub fn log10(value: f64) -> Result<f64> {
    check_positive("log10", value)?;
    Ok(value.log10())
}

/// Computes `e^value`.
#[must_use]
pub fn exp(value: f64) -> f64 {
    value.exp()
}

fn check_positive(function: &'static str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CalcError::DomainError { function, value })
    }
}
