use crate::error::EvaluationError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors reported while handling a single session line.
pub enum SessionError {
    /// The line was an expression and its evaluation failed.
    Evaluation(EvaluationError),
    /// The line started with `:` but is not a known directive.
    UnknownCommand {
        /// The rejected line.
        line: String,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Evaluation(e) => write!(f, "{e}"),
            Self::UnknownCommand { line } => write!(f, "Unrecognized command: {line}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation(e) => Some(e),
            Self::UnknownCommand { .. } => None,
        }
    }
}

impl From<EvaluationError> for SessionError {
    fn from(error: EvaluationError) -> Self {
        Self::Evaluation(error)
    }
}
