use crate::{
    error::ParseError,
    interpreter::{parser::ParseResult, token::Token},
};

/// Splits an optional `identifier=` prefix off a token sequence.
///
/// The prefix is only recognised when the sequence has at least three tokens
/// and the second one is [`Token::BindingEquals`]. In that case the first
/// token must be an identifier, which becomes the bound name. Any other
/// placement of `=` is left in the body for the reducer to reject.
///
/// # Returns
/// The bound name, if any, and the tokens that form the expression body.
///
/// # Errors
/// `ParseError::AssignmentTarget` when `=` follows something other than an
/// identifier.
///
/// # Example
/// ```
/// use reckon::interpreter::{parser::binding::split_binding, token::Token};
///
/// let tokens = [Token::identifier("x"), Token::BindingEquals, Token::number("2", 2.0)];
/// let (name, body) = split_binding(&tokens).unwrap();
///
/// assert_eq!(name.as_deref(), Some("x"));
/// assert_eq!(body, &[Token::number("2", 2.0)]);
/// ```
pub fn split_binding(tokens: &[Token]) -> ParseResult<(Option<String>, &[Token])> {
    match tokens {
        [first, Token::BindingEquals, _, ..] => match first {
            Token::Identifier(name) => Ok((Some(name.clone()), &tokens[2..])),
            _ => Err(ParseError::AssignmentTarget),
        },
        _ => Ok((None, tokens)),
    }
}
