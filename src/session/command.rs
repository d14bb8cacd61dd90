use logos::Logos;

use crate::error::SessionError;

/// Lexical units of a session directive.
///
/// Directives are whitespace separated words; the first one names the
/// directive and starts with `:`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum CommandToken {
    /// `:vars`
    #[token(":vars")]
    Vars,
    /// `:clear`
    #[token(":clear")]
    Clear,
    /// `:exit` or `:quit`
    #[token(":exit")]
    #[token(":quit")]
    Exit,
    /// Directive arguments, such as the names given to `:clear`.
    #[regex(r"[^ \t\f\r\n:][^ \t\f\r\n]*", |lex| lex.slice().to_string())]
    Word(String),
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r\n]+", logos::skip)]
    Ignored,
}

/// A session directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every binding with its value.
    ListBindings,
    /// Remove the named bindings, or all of them when no name is given.
    Clear(Vec<String>),
    /// End the session.
    Exit,
}

impl Command {
    /// Parses a directive line such as `:clear x y`.
    ///
    /// # Errors
    /// `SessionError::UnknownCommand` when the line is not exactly one of the
    /// known directives with the arguments it accepts.
    ///
    /// # Example
    /// ```
    /// use reckon::session::command::Command;
    ///
    /// assert_eq!(Command::parse(":vars").unwrap(), Command::ListBindings);
    /// assert_eq!(Command::parse(":clear a  b").unwrap(),
    ///            Command::Clear(vec!["a".to_string(), "b".to_string()]));
    /// assert!(Command::parse(":vars x").is_err());
    /// assert!(Command::parse(":help").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, SessionError> {
        let unknown = || SessionError::UnknownCommand { line: line.to_string() };

        let tokens = CommandToken::lexer(line).collect::<Result<Vec<_>, _>>()
                                             .map_err(|()| unknown())?;

        match tokens.as_slice() {
            [CommandToken::Vars] => Ok(Self::ListBindings),
            [CommandToken::Exit] => Ok(Self::Exit),
            [CommandToken::Clear, arguments @ ..] => {
                let mut names = Vec::with_capacity(arguments.len());
                for argument in arguments {
                    match argument {
                        CommandToken::Word(name) => names.push(name.clone()),
                        _ => return Err(unknown()),
                    }
                }
                Ok(Self::Clear(names))
            },
            _ => Err(unknown()),
        }
    }
}
