use crate::{
    error::ParseError,
    interpreter::{parser::ParseResult, token::Token},
};

/// What the reducer accepts next.
///
/// Operands are numbers, identifiers, function names and `(`; operators are
/// the binary operators and `)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// A value must start here.
    Operand,
    /// The current value must be continued or closed.
    Operator,
}

/// Fails unless the reducer is in the `expected` state.
fn expect(expected: Expectation, state: Expectation, token: &Token) -> ParseResult<()> {
    if expected == state {
        return Ok(());
    }
    let found = token.lexeme().into_owned();
    match state {
        Expectation::Operand => Err(ParseError::ExpectedOperand { found }),
        Expectation::Operator => Err(ParseError::ExpectedOperator { found }),
    }
}

/// Reorders an infix token sequence into postfix order.
///
/// This is the shunting-yard algorithm with an explicit operand/operator
/// expectation:
///
/// - numbers and identifiers go straight to the output;
/// - functions and `(` are pushed onto the stack;
/// - an operator first pops every stacked operator of greater or equal
///   precedence (left associativity), then is pushed itself;
/// - `)` pops to the output down to the matching `(`, which is discarded,
///   and then moves a function left on top of the stack to the output.
///
/// At the end of input the remaining stack is drained into the output.
///
/// # Errors
/// - `ExpectedOperand` / `ExpectedOperator` when a token breaks the
///   alternation of values and operators.
/// - `MisplacedBinding` for any `=` in the body.
/// - `MismatchedParenthesis` when parentheses do not pair up.
/// - `UnexpectedEndOfInput` when the input ends right after an operator,
///   function name or `(`, or is empty.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::tokenize, parser::shunting::to_postfix, token::Token},
/// };
///
/// let tokens = tokenize("8-3-1").collect::<Result<Vec<_>, _>>().unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
///
/// assert_eq!(postfix,
///            vec![Token::number("8", 8.0),
///                 Token::number("3", 3.0),
///                 Token::Operator(BinaryOperator::Sub),
///                 Token::number("1", 1.0),
///                 Token::Operator(BinaryOperator::Sub)]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();
    let mut state = Expectation::Operand;

    for token in tokens {
        match token {
            Token::BindingEquals => return Err(ParseError::MisplacedBinding),
            Token::Number { .. } | Token::Identifier(_) => {
                expect(Expectation::Operand, state, token)?;
                output.push(token.clone());
                state = Expectation::Operator;
            },
            Token::Function(_) | Token::LeftParen => {
                expect(Expectation::Operand, state, token)?;
                stack.push(token.clone());
            },
            Token::Operator(op) => {
                expect(Expectation::Operator, state, token)?;
                while let Some(Token::Operator(top)) = stack.last()
                      && op.precedence() <= top.precedence()
                {
                    output.extend(stack.pop());
                }
                stack.push(token.clone());
                state = Expectation::Operand;
            },
            Token::RightParen => {
                expect(Expectation::Operator, state, token)?;
                loop {
                    match stack.pop() {
                        None => return Err(ParseError::MismatchedParenthesis),
                        Some(Token::LeftParen) => break,
                        Some(entry) => output.push(entry),
                    }
                }
                if let Some(Token::Function(_)) = stack.last() {
                    output.extend(stack.pop());
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        if entry == Token::LeftParen {
            return Err(ParseError::MismatchedParenthesis);
        }
        output.push(entry);
    }

    if state == Expectation::Operand {
        return Err(ParseError::UnexpectedEndOfInput);
    }

    Ok(output)
}
