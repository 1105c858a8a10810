use tracing::trace;

use crate::{
    error::CalcError,
    interpreter::evaluator::core::EvalResult,
    math::{logarithm, trigonometry},
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its single evaluated argument and returns the result
/// or a domain error.
type BuiltinFn = fn(f64) -> EvalResult<f64>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a lowercase name and a function pointer implementing
/// the builtin. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"   => |x| Ok(trigonometry::sin(x)),
    "cos"   => |x| Ok(trigonometry::cos(x)),
    "tan"   => |x| Ok(trigonometry::tan(x)),
    "asin"  => trigonometry::asin,
    "acos"  => trigonometry::acos,
    "atan"  => |x| Ok(trigonometry::atan(x)),
    "log"   => logarithm::log10,
    "log10" => logarithm::log10,
    "ln"    => logarithm::ln,
    "exp"   => |x| Ok(logarithm::exp(x)),
}

/// Applies the builtin called `name` to `argument`.
///
/// Names are matched case-insensitively, so `SIN`, `Sin` and `sin` are the
/// same function. Builtins with a restricted domain (`asin`, `acos`, `ln`,
/// `log`, `log10`) report a domain error rather than returning NaN.
///
/// # Errors
/// - `UnknownFunction` if `name` is not in the table.
/// - `DomainError` if `argument` is outside the function's domain.
///
/// # Example
/// ```
/// use exprcalc::{
///     ErrorKind,
///     interpreter::evaluator::function::{BUILTIN_FUNCTIONS, eval_function},
/// };
///
/// for name in BUILTIN_FUNCTIONS {
///     assert!(eval_function(name, 0.5).is_ok());
/// }
/// let value = eval_function("LOG", 1000.0).unwrap();
/// assert!((value - 3.0).abs() < 1e-12);
/// assert_eq!(eval_function("ln", -1.0).unwrap_err().kind(), ErrorKind::DomainError);
/// assert_eq!(eval_function("sqrt", 4.0).unwrap_err().kind(),
///            ErrorKind::UnknownFunction);
/// ```
pub fn eval_function(name: &str, argument: f64) -> EvalResult<f64> {
    let builtin = BUILTIN_TABLE.iter()
                               .find(|b| b.name.eq_ignore_ascii_case(name))
                               .ok_or_else(|| CalcError::UnknownFunction { name: name.to_string() })?;

    let result = (builtin.func)(argument)?;
    trace!(function = builtin.name, argument, result, "applied builtin");
    Ok(result)
}
