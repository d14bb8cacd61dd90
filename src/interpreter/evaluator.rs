/// Core evaluation logic.
///
/// Reduces a postfix sequence to a single value against an environment.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two operands with IEEE-754 semantics.
pub mod binary;

/// Builtin function evaluation.
///
/// Applies `sqrt`, `log`, `sin` and `cos` to a single operand.
pub mod function;
