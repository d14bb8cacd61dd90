use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{binary::apply_operator, function::apply_function},
        token::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Pops one operand for `token`, reporting an underflow if there is none.
fn pop_operand(stack: &mut Vec<f64>, token: &Token) -> EvalResult<f64> {
    stack.pop()
         .ok_or_else(|| RuntimeError::StackUnderflow { token: token.lexeme().into_owned() })
}

/// Reduces a postfix token sequence to a single value.
///
/// Tokens are processed left to right against a value stack:
/// numbers are pushed, identifiers are looked up in `environment` and their
/// value pushed, operators pop their right then left operand and push the
/// result, functions pop their argument and push the result.
///
/// The environment is only read here; recording bindings is left to the
/// caller once the whole reduction has succeeded.
///
/// # Errors
/// - `UnboundVariable` when an identifier has no binding.
/// - `StackUnderflow`, `UnexpectedToken` or `LeftoverOperands` when the
///   sequence is not valid postfix. These cannot occur for sequences built by
///   the parser.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     environment::Environment, evaluator::core::reduce, lexer::tokenize, parser::parse,
/// };
///
/// let mut environment = Environment::new();
/// environment.set("x", 4.0);
///
/// let tokens = tokenize("x*(x-1)").collect::<Result<Vec<_>, _>>().unwrap();
/// let expression = parse(&tokens).unwrap();
///
/// assert_eq!(reduce(&expression.postfix, &environment).unwrap(), 12.0);
/// ```
pub fn reduce(postfix: &[Token], environment: &Environment) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Number { value, .. } => stack.push(value.into_inner()),
            Token::Identifier(name) => {
                let value =
                    environment.get(name)
                               .ok_or_else(|| RuntimeError::UnboundVariable { name: name.clone() })?;
                stack.push(value);
            },
            Token::Operator(op) => {
                let right = pop_operand(&mut stack, token)?;
                let left = pop_operand(&mut stack, token)?;
                stack.push(apply_operator(*op, left, right));
            },
            Token::Function(function) => {
                let argument = pop_operand(&mut stack, token)?;
                stack.push(apply_function(*function, argument));
            },
            Token::LeftParen | Token::RightParen | Token::BindingEquals => {
                return Err(RuntimeError::UnexpectedToken { token: token.lexeme().into_owned() });
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        values => Err(RuntimeError::LeftoverOperands { count: values.len() }),
    }
}
