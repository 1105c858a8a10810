/// Checked arithmetic on two operands.
///
/// Only division can fail: a zero denominator is reported instead of
/// producing an infinity.
pub mod arithmetic;
/// Natural and base-10 logarithms and the exponential function.
///
/// The logarithms reject non-positive input with a domain error.
pub mod logarithm;
/// Trigonometric and inverse trigonometric functions in radians.
///
/// `asin` and `acos` reject input outside `[-1, 1]` with a domain error.
pub mod trigonometry;
