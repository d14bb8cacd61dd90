use crate::{
    ast::{BinaryOperator, BuiltinFunction},
    error::LexicalError,
    interpreter::token::Token,
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexicalError>;

/// States of the tokenizing state machine.
///
/// A new token always begins in `Start`. Every other state accumulates the
/// characters of a multi-character token until a character arrives that
/// cannot continue it, or the input ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum LexState {
    Start,
    Identifier,
    ZeroOrDecimal,
    IntegerOrDecimal,
    /// `digits` counts the digits consumed since the decimal point.
    DecimalAfterPoint {
        digits: usize,
    },
}

/// Outcome of feeding one character to a state.
enum Step {
    Continue(LexState),
    Emit(Token),
}

/// Lazy tokenizer over an expression string.
///
/// `Lexer` yields one `LexResult<Token>` at a time. Tokens are produced on
/// demand, so an error late in the input is only reported once iteration
/// reaches it. After the first error the iterator is exhausted.
///
/// Whitespace is never skipped: any whitespace character is a lexical error.
pub struct Lexer {
    chars:  Vec<char>,
    /// Index of the first character of the token being built.
    start:  usize,
    /// Index of the next character to examine.
    cursor: usize,
    failed: bool,
}

/// Creates a lexer over `input`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::tokenize, token::Token},
/// };
///
/// let tokens: Vec<Token> = tokenize("x+1").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![Token::identifier("x"),
///                 Token::Operator(BinaryOperator::Add),
///                 Token::number("1", 1.0)]);
///
/// assert!(tokenize("1 + 1").any(|t| t.is_err()));
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Lexer {
    Lexer::new(input)
}

impl Lexer {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { chars:  input.chars().collect(),
               start:  0,
               cursor: 0,
               failed: false, }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn advance(&mut self, next: LexState) -> Step {
        self.cursor += 1;
        Step::Continue(next)
    }

    fn emit_single(&mut self, token: Token) -> Step {
        self.cursor += 1;
        Step::Emit(token)
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.cursor].iter().collect()
    }

    /// Runs the state machine from `Start` until one token is complete.
    fn scan_token(&mut self) -> LexResult<Token> {
        let mut state = LexState::Start;
        loop {
            let step = match self.peek() {
                Some(c) => self.transition(state, c)?,
                None => Step::Emit(self.close(state)?),
            };
            match step {
                Step::Continue(next) => state = next,
                Step::Emit(token) => return Ok(token),
            }
        }
    }

    /// Feeds the character at the cursor to `state`.
    fn transition(&mut self, state: LexState, c: char) -> LexResult<Step> {
        match state {
            LexState::Start => self.start_token(c),
            LexState::Identifier => {
                if c.is_ascii_alphanumeric() {
                    Ok(self.advance(LexState::Identifier))
                } else {
                    Ok(Step::Emit(self.close(state)?))
                }
            },
            LexState::ZeroOrDecimal => match c {
                '0'..='9' => Err(LexicalError::LeadingZero { position: self.cursor }),
                '.' => Ok(self.advance(LexState::DecimalAfterPoint { digits: 0 })),
                _ => Ok(Step::Emit(self.close(state)?)),
            },
            LexState::IntegerOrDecimal => match c {
                c if c.is_ascii_alphabetic() => {
                    Err(LexicalError::UnexpectedCharacter { character: c,
                                                            position:  self.cursor, })
                },
                '0'..='9' => Ok(self.advance(LexState::IntegerOrDecimal)),
                '.' => Ok(self.advance(LexState::DecimalAfterPoint { digits: 0 })),
                _ => Ok(Step::Emit(self.close(state)?)),
            },
            LexState::DecimalAfterPoint { digits } => {
                if c.is_ascii_digit() {
                    Ok(self.advance(LexState::DecimalAfterPoint { digits: digits + 1 }))
                } else {
                    Ok(Step::Emit(self.close(state)?))
                }
            },
        }
    }

    fn start_token(&mut self, c: char) -> LexResult<Step> {
        if let Some(op) = BinaryOperator::from_symbol(c) {
            return Ok(self.emit_single(Token::Operator(op)));
        }
        match c {
            '(' => Ok(self.emit_single(Token::LeftParen)),
            ')' => Ok(self.emit_single(Token::RightParen)),
            '=' => Ok(self.emit_single(Token::BindingEquals)),
            '.' => Ok(self.advance(LexState::DecimalAfterPoint { digits: 0 })),
            '0' => Ok(self.advance(LexState::ZeroOrDecimal)),
            '1'..='9' => Ok(self.advance(LexState::IntegerOrDecimal)),
            c if c.is_ascii_alphabetic() => Ok(self.advance(LexState::Identifier)),
            c => Err(LexicalError::UnexpectedCharacter { character: c,
                                                         position:  self.cursor, }),
        }
    }

    /// Completes the token accumulated in `state`.
    fn close(&self, state: LexState) -> LexResult<Token> {
        match state {
            LexState::Start => unreachable!("a token never closes before its first character"),
            LexState::Identifier => {
                let lexeme = self.lexeme();
                Ok(BuiltinFunction::from_name(&lexeme).map_or_else(|| Token::Identifier(lexeme),
                                                                    Token::Function))
            },
            LexState::ZeroOrDecimal => Ok(Token::number("0", 0.0)),
            LexState::DecimalAfterPoint { digits: 0 } => {
                Err(LexicalError::NoDigitAfterPoint { position: self.cursor - 1 })
            },
            LexState::IntegerOrDecimal | LexState::DecimalAfterPoint { .. } => self.number(),
        }
    }

    fn number(&self) -> LexResult<Token> {
        let lexeme = self.lexeme();
        match lexeme.parse::<f64>() {
            Ok(value) => Ok(Token::number(lexeme, value)),
            Err(_) => Err(LexicalError::MalformedNumber { lexeme,
                                                          position: self.start }),
        }
    }
}

impl Iterator for Lexer {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.start == self.chars.len() {
            return None;
        }

        let result = self.scan_token();
        match result {
            Ok(_) => self.start = self.cursor,
            Err(_) => self.failed = true,
        }
        Some(result)
    }
}
