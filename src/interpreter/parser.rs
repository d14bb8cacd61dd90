use crate::{ast::Expression, error::ParseError, interpreter::token::Token};

/// Detection of the optional `identifier=` prefix.
///
/// A binding is only recognised as the very first construct of an
/// expression; the rest of the token sequence is handed on untouched.
pub mod binding;
/// Operator-precedence reduction from infix to postfix order.
///
/// Implements a shunting-yard reducer that tracks whether an operand or an
/// operator is expected next and rejects token sequences that break that
/// alternation.
pub mod shunting;

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into an [`Expression`].
///
/// The optional binding prefix is split off first, then the remainder is
/// reordered into postfix form.
///
/// # Errors
/// Returns a `ParseError` if the binding prefix is malformed or the body is
/// not a well formed expression.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("x=1+2*3").collect::<Result<Vec<_>, _>>().unwrap();
/// let expression = parse(&tokens).unwrap();
///
/// assert_eq!(expression.binding.as_deref(), Some("x"));
/// assert_eq!(expression.to_string(), "x = 1 2 3 * +");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expression> {
    let (binding, body) = binding::split_binding(tokens)?;
    let postfix = shunting::to_postfix(body)?;

    Ok(Expression { binding, postfix })
}
