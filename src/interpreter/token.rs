use std::borrow::Cow;

use ordered_float::OrderedFloat;

use crate::ast::{BinaryOperator, BuiltinFunction};

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers and identifiers keep the exact lexeme they were read from;
/// operators, functions and structural markers are identified by their
/// variant alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `0.5` or `.25`.
    Number {
        /// The source text of the literal.
        lexeme: String,
        /// The parsed value.
        value:  OrderedFloat<f64>,
    },
    /// Variable names such as `x` or `total2`.
    Identifier(String),
    /// `sqrt`, `log`, `sin` or `cos`.
    Function(BuiltinFunction),
    /// `+`, `-`, `*` or `/`.
    Operator(BinaryOperator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `=` after the leading identifier of a binding.
    BindingEquals,
}

impl Token {
    /// Builds a number token from its lexeme and value.
    #[must_use]
    pub fn number(lexeme: impl Into<String>, value: f64) -> Self {
        Self::Number { lexeme: lexeme.into(),
                       value:  OrderedFloat(value), }
    }

    /// Builds an identifier token.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Returns the source text this token was read from.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::BinaryOperator, interpreter::token::Token};
    ///
    /// assert_eq!(Token::number(".5", 0.5).lexeme(), ".5");
    /// assert_eq!(Token::Operator(BinaryOperator::Mul).lexeme(), "*");
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> Cow<'_, str> {
        match self {
            Self::Number { lexeme, .. } | Self::Identifier(lexeme) => Cow::Borrowed(lexeme),
            Self::Function(function) => Cow::Borrowed(function.name()),
            Self::Operator(op) => Cow::Owned(op.symbol().to_string()),
            Self::LeftParen => Cow::Borrowed("("),
            Self::RightParen => Cow::Borrowed(")"),
            Self::BindingEquals => Cow::Borrowed("="),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}
