#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a postfix sequence.
///
/// Only [`RuntimeError::UnboundVariable`] can be produced from text that went
/// through the parser; the remaining variants guard hand-built postfix input.
pub enum RuntimeError {
    /// Tried to read a variable that has no binding.
    UnboundVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator or function found fewer operands than it needs.
    StackUnderflow {
        /// Lexeme of the token that underflowed.
        token: String,
    },
    /// A structural token (parenthesis or `=`) reached the evaluator.
    UnexpectedToken {
        /// Lexeme of the offending token.
        token: String,
    },
    /// The sequence did not reduce to exactly one value.
    LeftoverOperands {
        /// Number of values left on the stack.
        count: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => write!(f, "Unbound variable '{name}'."),
            Self::StackUnderflow { token } => {
                write!(f, "Malformed postfix input: '{token}' is missing operands.")
            },
            Self::UnexpectedToken { token } => {
                write!(f, "Malformed postfix input: unexpected token '{token}'.")
            },
            Self::LeftoverOperands { count } => write!(f,
                                                       "Malformed postfix input: {count} values left after reduction."),
        }
    }
}

impl std::error::Error for RuntimeError {}
