//! # reckon
//!
//! reckon is a small calculator for arithmetic expressions written in Rust.
//! It tokenizes, reorders into postfix form and evaluates expressions built
//! from numbers, variables, the four arithmetic operators, parentheses and
//! the functions `sqrt`, `log`, `sin` and `cos`. Results can be bound to
//! names that persist across evaluations.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvaluationError,
    interpreter::{
        environment::{Environment, LAST_RESULT},
        evaluator::core::reduce,
        lexer::{LexResult, tokenize},
        parser::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the operator and function enums shared by every
/// phase, and the [`ast::Expression`] produced by the parser: an optional
/// bound name plus the expression body in postfix order.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression or handling a session line, each carrying enough detail for a
/// useful diagnostic.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, evaluator, session).
/// - Aggregates them in [`error::EvaluationError`] for the public entry point.
/// - Integrates with the standard `Error` trait for reporting.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the token model, lexer, parser, evaluator and
/// environment that make up the calculator core.
///
/// # Responsibilities
/// - Converts raw text into tokens, tokens into postfix, postfix into a value.
/// - Owns the environment contract used to resolve and record bindings.
pub mod interpreter;
/// Line-oriented session on top of the evaluator.
///
/// A session owns an environment, dispatches `:` directives (listing and
/// clearing bindings, exiting) and runs the read-evaluate-print loop used by
/// the binary.
pub mod session;

/// Evaluates a single expression against `environment`.
///
/// The expression is tokenized, split into an optional `name=` prefix and a
/// body, reordered into postfix form and reduced. On success the result is
/// bound to the prefix name (if any) and, unconditionally, to `_`. On failure
/// the environment is left untouched.
///
/// Whitespace is not allowed anywhere inside `expression`.
///
/// # Errors
/// - `EmptyInput` if `expression` is empty.
/// - `Lexical` for characters that do not form valid tokens.
/// - `Parse` for structurally invalid expressions.
/// - `Runtime` when a variable has no binding.
///
/// # Examples
/// ```
/// use reckon::{evaluate, interpreter::environment::Environment};
///
/// let mut environment = Environment::new();
///
/// assert_eq!(evaluate("test=9/((2+1)*6)", &mut environment).unwrap(), 0.5);
/// assert_eq!(evaluate("test*2", &mut environment).unwrap(), 1.0);
/// assert_eq!(environment.get("_"), Some(1.0));
///
/// // 'nothing' has never been bound.
/// assert!(evaluate("nothing+1", &mut environment).is_err());
/// assert_eq!(environment.get("_"), Some(1.0));
/// ```
pub fn evaluate(expression: &str, environment: &mut Environment) -> Result<f64, EvaluationError> {
    if expression.is_empty() {
        return Err(EvaluationError::EmptyInput);
    }

    let tokens = tokenize(expression).collect::<LexResult<Vec<_>>>()?;
    let parsed = parse(&tokens)?;
    let value = reduce(&parsed.postfix, environment)?;

    if let Some(name) = parsed.binding {
        environment.set(name, value);
    }
    environment.set(LAST_RESULT, value);

    Ok(value)
}
