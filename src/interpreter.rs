/// The environment module holds variable bindings between evaluations.
///
/// An [`environment::Environment`] maps names to values and persists for as
/// long as its owner keeps it. Evaluation reads identifiers from it and
/// records the optional explicit binding and the last result in it.
pub mod environment;
/// The evaluator module reduces postfix sequences to numbers.
///
/// The evaluator walks the postfix output of the parser with a value stack,
/// resolving identifiers against the environment and applying operators and
/// builtin functions.
///
/// # Responsibilities
/// - Applies the four arithmetic operators and the builtin functions.
/// - Resolves variables and reports unbound ones.
/// - Detects malformed postfix input instead of panicking.
pub mod evaluator;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw expression text one character at a time and
/// produces tokens lazily. It is a small state machine: one state per kind
/// of multi-character token being accumulated.
///
/// # Responsibilities
/// - Converts the input character stream into [`token::Token`]s.
/// - Distinguishes builtin function names from identifiers.
/// - Reports lexical errors with the index of the offending character.
pub mod lexer;
/// The parser module reorders tokens into postfix form.
///
/// The parser strips the optional binding prefix and runs an
/// operator-precedence reducer over the rest, validating that operands and
/// operators alternate and that parentheses balance.
///
/// # Responsibilities
/// - Recognises `identifier=` at the start of an expression.
/// - Produces a postfix sequence honouring precedence and associativity.
/// - Reports structural errors such as mismatched parentheses.
pub mod parser;
/// The token module defines the lexical units of an expression.
pub mod token;
