#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting input into tokens.
///
/// Every variant carries the zero-based character index at which the lexer
/// gave up, so callers can point at the offending character.
pub enum LexicalError {
    /// A character that can neither start nor continue a token.
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
        /// Index of the character in the input.
        position:  usize,
    },
    /// A `0` was immediately followed by another digit.
    LeadingZero {
        /// Index of the digit following the zero.
        position: usize,
    },
    /// A decimal point was not followed by at least one digit.
    NoDigitAfterPoint {
        /// Index of the decimal point.
        position: usize,
    },
    /// A numeric lexeme could not be converted to a 64-bit float.
    MalformedNumber {
        /// The lexeme that failed to convert.
        lexeme:   String,
        /// Index of the first character of the lexeme.
        position: usize,
    },
}

impl LexicalError {
    /// Returns the character index the error refers to.
    ///
    /// # Example
    /// ```
    /// use reckon::error::LexicalError;
    ///
    /// let err = LexicalError::LeadingZero { position: 1 };
    /// assert_eq!(err.position(), 1);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::LeadingZero { position }
            | Self::NoDigitAfterPoint { position }
            | Self::MalformedNumber { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Lexical error at index {position}: Unexpected character '{character}'."),
            Self::LeadingZero { position } => write!(f,
                                                     "Lexical error at index {position}: 0 cannot be followed by a digit."),
            Self::NoDigitAfterPoint { position } => {
                write!(f, "Lexical error at index {position}: No digit after point.")
            },
            Self::MalformedNumber { lexeme, position } => write!(f,
                                                                 "Lexical error at index {position}: Malformed number '{lexeme}'."),
        }
    }
}

impl std::error::Error for LexicalError {}
