use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CalcError, Result};

/// Number of fractional mantissa digits used when no precision is given.
pub const DEFAULT_PRECISION: usize = 6;

static SCIENTIFIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?\d*\.?\d+)[eE](-?\d+)$").expect("pattern is valid"));

/// Formats `value` as `<mantissa>e<exponent>`.
///
/// The mantissa satisfies `1 <= |mantissa| < 10` and carries exactly
/// `precision` fractional digits. Zero of either sign formats as `"0"`.
/// Infinities format as `inf` and `-inf`, and NaN as `NaN`.
///
/// ## Example
/// ```
/// use exprcalc::scientific::{DEFAULT_PRECISION, format};
///
/// assert_eq!(format(1234.5, DEFAULT_PRECISION), "1.234500e3");
/// assert_eq!(format(-0.00042, 2), "-4.20e-4");
/// assert_eq!(format(0.0, DEFAULT_PRECISION), "0");
/// ```
#[must_use]
pub fn format(value: f64, precision: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    format!("{value:.precision$e}")
}

/// Parses a string in `<mantissa>e<exponent>` form.
///
/// The mantissa is an optionally negative decimal (`1.5`, `.5`, `-12`); the
/// exponent is an optionally negative integer. The marker may be `e` or `E`.
///
/// # Errors
/// Returns [`CalcError::InvalidFormat`] for any other shape, including plain
/// decimals without an exponent.
///
/// ## Example
/// ```
/// use exprcalc::scientific::parse;
///
/// assert_eq!(parse("1.5e3"), Ok(1500.0));
/// assert_eq!(parse("-2E-2"), Ok(-0.02));
/// assert!(parse("1500").is_err());
/// ```
pub fn parse(text: &str) -> Result<f64> {
    let invalid = || CalcError::InvalidFormat { text: text.to_string() };

    let captures = SCIENTIFIC.captures(text).ok_or_else(invalid)?;
    let (mantissa, exponent) = (&captures[1], &captures[2]);

    format!("{mantissa}e{exponent}").parse().map_err(|_| invalid())
}
