use crate::ast::BinaryOperator;

/// Applies a binary operator to two operands.
///
/// `left` is the operand that appeared first in the source. Division by zero
/// is not an error: it yields an infinity or NaN as IEEE-754 prescribes.
///
/// # Example
/// ```
/// use reckon::{ast::BinaryOperator, interpreter::evaluator::binary::apply_operator};
///
/// assert_eq!(apply_operator(BinaryOperator::Sub, 7.0, 2.0), 5.0);
/// assert_eq!(apply_operator(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn apply_operator(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
