/// Lexical errors.
///
/// Raised while the lexer walks the raw character sequence: characters that
/// cannot start or continue a token, forbidden leading zeros and decimal
/// points that are not followed by a digit.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning the token sequence
/// into postfix order: a malformed binding prefix, operands and operators in
/// the wrong place, unbalanced parentheses and incomplete expressions.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while reducing a postfix sequence, most
/// notably lookups of variables that have no binding.
pub mod runtime_error;
/// Session errors.
///
/// Errors reported by the line-oriented session layer, wrapping evaluation
/// failures and rejecting unknown directives.
pub mod session_error;

pub use lexical_error::LexicalError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use session_error::SessionError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way a single call to [`crate::evaluate`] can fail.
///
/// Each phase of the pipeline has its own error type; this enum wraps them so
/// callers deal with a single `Result` while still being able to match on the
/// phase that failed.
pub enum EvaluationError {
    /// The expression string was empty.
    EmptyInput,
    /// The lexer rejected the input.
    Lexical(LexicalError),
    /// The token sequence is not a well formed expression.
    Parse(ParseError),
    /// The postfix reduction failed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Cannot evaluate the empty string."),
            Self::Lexical(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmptyInput => None,
            Self::Lexical(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexicalError> for EvaluationError {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl From<ParseError> for EvaluationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvaluationError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
