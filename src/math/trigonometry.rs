use crate::error::{CalcError, Result};

#[must_use]
pub fn sin(angle: f64) -> f64 {
    angle.sin()
}

#[must_use]
pub fn cos(angle: f64) -> f64 {
    angle.cos()
}

#[must_use]
pub fn tan(angle: f64) -> f64 {
    angle.tan()
}

/// Computes the inverse sine, in radians.
///
/// # Errors
/// Returns [`CalcError::DomainError`] if `value` is outside `[-1, 1]` or NaN.
///
/// ## Example
/// ```
/// use exprcalc::{ErrorKind, math::trigonometry::asin};
///
/// assert_eq!(asin(1.0), Ok(std::f64::consts::FRAC_PI_2));
/// assert_eq!(asin(1.5).unwrap_err().kind(), ErrorKind::DomainError);
/// ```
pub fn asin(value: f64) -> Result<f64> {
    check_unit_interval("asin", value)?;
    Ok(value.asin())
}

/// Computes the inverse cosine, in radians.
///
/// # Errors
/// Returns [`CalcError::DomainError`] if `value` is outside `[-1, 1]` or NaN.
pub fn acos(value: f64) -> Result<f64> {
    check_unit_interval("acos", value)?;
    Ok(value.acos())
}

#[must_use]
pub fn atan(value: f64) -> f64 {
    value.atan()
}

fn check_unit_interval(function: &'static str, value: f64) -> Result<()> {
    if (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(CalcError::DomainError { function, value })
    }
}
