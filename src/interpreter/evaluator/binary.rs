use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::evaluator::core::{EvalResult, eval},
    math::arithmetic,
};

/// Evaluates a left-leaning chain of binary operations.
///
/// The parser builds `a - b - c` as `((a - b) - c)`, so long chains form a
/// deep left spine. The spine is walked iteratively and the operations are
/// then applied from the innermost outwards, which keeps the recursion depth
/// independent of the chain length. Each right operand is evaluated just
/// before its operation is applied, preserving left-to-right order.
///
/// # Parameters
/// - `expr`: The root of the chain. Any other node is evaluated as is.
pub(crate) fn eval_binary_chain(expr: &Expr) -> EvalResult<f64> {
    let mut pending = Vec::new();
    let mut node = expr;

    while let Expr::BinaryOp { left, op, right, .. } = node {
        pending.push((*op, right.as_ref()));
        node = left.as_ref();
    }

    let mut accumulator = eval(node)?;
    for (op, right) in pending.into_iter().rev() {
        let right = eval(right)?;
        accumulator = eval_scalar_op(op, accumulator, right)?;
    }
    Ok(accumulator)
}

/// Evaluates a scalar arithmetic operation.
///
/// Division checks its denominator explicitly: dividing by `0.0` or `-0.0`
/// fails instead of producing an infinity.
///
/// # Example
/// ```
/// use exprcalc::{
///     CalcError, ast::BinaryOperator, interpreter::evaluator::binary::eval_scalar_op,
/// };
///
/// assert_eq!(eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0), Ok(3.0));
/// assert_eq!(eval_scalar_op(BinaryOperator::Div, 1.0, 0.0),
///            Err(CalcError::DivisionByZero));
/// ```
pub fn eval_scalar_op(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(arithmetic::add(left, right)),
        BinaryOperator::Sub => Ok(arithmetic::subtract(left, right)),
        BinaryOperator::Mul => Ok(arithmetic::multiply(left, right)),
        BinaryOperator::Div => arithmetic::divide(left, right),
    }
}
