use crate::ast::BuiltinFunction;

/// Applies a builtin function to its argument.
///
/// Out-of-domain arguments follow IEEE-754 rather than failing: the square
/// root of a negative number is NaN, `log(0)` is negative infinity.
///
/// # Example
/// ```
/// use reckon::{ast::BuiltinFunction, interpreter::evaluator::function::apply_function};
///
/// assert_eq!(apply_function(BuiltinFunction::Sqrt, 9.0), 3.0);
/// assert!(apply_function(BuiltinFunction::Sqrt, -1.0).is_nan());
/// assert_eq!(apply_function(BuiltinFunction::Log, 0.0), f64::NEG_INFINITY);
/// ```
#[must_use]
pub fn apply_function(function: BuiltinFunction, argument: f64) -> f64 {
    match function {
        BuiltinFunction::Sqrt => argument.sqrt(),
        BuiltinFunction::Log => argument.ln(),
        BuiltinFunction::Sin => argument.sin(),
        BuiltinFunction::Cos => argument.cos(),
    }
}
