#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reordering tokens into postfix
/// form.
pub enum ParseError {
    /// Something other than an identifier appeared before the binding `=`.
    AssignmentTarget,
    /// An operand (number, identifier, function call or `(`) was expected.
    ExpectedOperand {
        /// Lexeme of the token found instead.
        found: String,
    },
    /// An operator or `)` was expected.
    ExpectedOperator {
        /// Lexeme of the token found instead.
        found: String,
    },
    /// A binding `=` appeared anywhere but right after the leading identifier.
    MisplacedBinding,
    /// Parentheses do not pair up.
    MismatchedParenthesis,
    /// The input ended while an operand was still expected.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssignmentTarget => {
                write!(f, "Parse error: left side of assignment must be an identifier.")
            },
            Self::ExpectedOperand { found } => write!(f,
                                                      "Parse error: found '{found}' where an operand (function call, identifier, left parenthesis, number) was expected."),
            Self::ExpectedOperator { found } => write!(f,
                                                       "Parse error: found '{found}' where an operator or right parenthesis was expected."),
            Self::MisplacedBinding => write!(f,
                                             "Parse error: '=' is only allowed right after the identifier that starts the expression."),
            Self::MismatchedParenthesis => write!(f, "Parse error: mismatched parenthesis."),
            Self::UnexpectedEndOfInput => {
                write!(f, "Parse error: end of input, operand expected.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
