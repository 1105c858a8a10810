use crate::{
    ast::{Expr, UnaryOperator},
    error::CalcError,
    interpreter::evaluator::{binary::eval_binary_chain, function::eval_function},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `CalcError` describing the failure.
pub type EvalResult<T> = Result<T, CalcError>;

/// Evaluates an expression tree and returns its value.
///
/// This is the main entry point for tree evaluation. Operands are evaluated
/// left to right, so when an expression contains several failures the
/// leftmost one is reported. The argument of a function call is evaluated
/// before the name is looked up.
///
/// # Parameters
/// - `expr`: Expression to evaluate.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Example
/// ```
/// use exprcalc::interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse};
///
/// let expr = parse(&tokenize("(2+3)*4").unwrap()).unwrap();
/// assert_eq!(eval(&expr), Ok(20.0));
/// ```
pub fn eval(expr: &Expr) -> EvalResult<f64> {
    match expr {
        Expr::Literal { value, .. } => Ok(*value),
        Expr::UnaryOp { op: UnaryOperator::Negate,
                        expr,
                        .. } => Ok(-eval(expr)?),
        Expr::BinaryOp { .. } => eval_binary_chain(expr),
        Expr::FunctionCall { name, argument, .. } => {
            let value = eval(argument)?;
            eval_function(name, value)
        },
    }
}
