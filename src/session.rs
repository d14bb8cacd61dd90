use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::{
    error::SessionError,
    evaluate,
    interpreter::environment::Environment,
    session::command::Command,
};

/// Parsing of `:` directives.
///
/// Directives are lexed with a small `logos` lexer and turned into a
/// [`command::Command`].
pub mod command;

/// What a session line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The line was blank.
    Nothing,
    /// The value of an evaluated expression.
    Value(f64),
    /// All bindings in creation order.
    Bindings(Vec<(String, f64)>),
    /// The number of bindings a `:clear` removed.
    Cleared(usize),
    /// The session should end.
    Exit,
}

/// An interactive calculator session.
///
/// A session owns the [`Environment`] every expression is evaluated against,
/// so bindings made on one line are visible on the next.
#[derive(Debug, Default)]
pub struct Session {
    environment: Environment,
}

impl Session {
    /// Creates a session with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bindings of this session.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Handles one line of input.
    ///
    /// Surrounding whitespace is ignored. Blank lines do nothing, lines
    /// starting with `:` are directives and anything else is evaluated as an
    /// expression.
    ///
    /// # Errors
    /// Returns a `SessionError` if the directive is unknown or the expression
    /// fails to evaluate. The session remains usable either way.
    ///
    /// # Example
    /// ```
    /// use reckon::session::{Reply, Session};
    ///
    /// let mut session = Session::new();
    ///
    /// assert_eq!(session.handle_line("x=2*3").unwrap(), Reply::Value(6.0));
    /// assert_eq!(session.handle_line(":clear x").unwrap(), Reply::Cleared(1));
    /// assert!(session.handle_line("x").is_err());
    /// ```
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, SessionError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Nothing);
        }

        if line.starts_with(':') {
            let command = Command::parse(line)?;
            return Ok(self.execute(command));
        }

        let value = evaluate(line, &mut self.environment)?;
        debug!("evaluated '{line}' to {value}");
        Ok(Reply::Value(value))
    }

    /// Carries out a parsed directive.
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::ListBindings => {
                let bindings = self.environment
                                   .iter()
                                   .map(|(name, value)| (name.to_string(), value))
                                   .collect();
                Reply::Bindings(bindings)
            },
            Command::Clear(names) if names.is_empty() => {
                let count = self.environment.len();
                self.environment.clear();
                info!("cleared all {count} bindings");
                Reply::Cleared(count)
            },
            Command::Clear(names) => {
                let count = names.iter()
                                 .filter(|name| self.environment.remove(name).is_some())
                                 .count();
                info!("cleared {count} of {} requested bindings", names.len());
                Reply::Cleared(count)
            },
            Command::Exit => {
                info!("exit requested");
                Reply::Exit
            },
        }
    }

    /// Runs the read-evaluate-print loop.
    ///
    /// Reads `input` line by line until it is exhausted or an exit directive
    /// is seen. Values are written to `out`, one per line, always with a
    /// fractional part or an exponent (`4.0`, `1.0E7`, `Infinity`); `:vars`
    /// writes one `name = value` line per binding. Failures are written to `err` as
    /// `*** ERROR: <message>` and the loop carries on with the next line.
    ///
    /// # Returns
    /// The number of lines that failed.
    ///
    /// # Errors
    /// Only I/O errors on `input`, `out` or `err` abort the loop.
    ///
    /// # Example
    /// ```
    /// use reckon::session::Session;
    ///
    /// let mut out = Vec::new();
    /// let mut err = Vec::new();
    /// let failures = Session::new().run("a=1+1\na*5\nb\n".as_bytes(), &mut out, &mut err)
    ///                              .unwrap();
    ///
    /// assert_eq!(failures, 1);
    /// assert_eq!(String::from_utf8(out).unwrap(), "2.0\n10.0\n");
    /// assert!(String::from_utf8(err).unwrap().starts_with("*** ERROR: "));
    /// ```
    pub fn run<R, W, E>(&mut self, input: R, out: &mut W, err: &mut E) -> io::Result<usize>
        where R: BufRead,
              W: Write,
              E: Write
    {
        let mut failures = 0;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Reply::Exit) => break,
                Ok(reply) => write_reply(out, &reply)?,
                Err(e) => {
                    warn!("rejected line '{}': {e}", line.trim());
                    failures += 1;
                    writeln!(err, "*** ERROR: {e}")?;
                },
            }
        }

        out.flush()?;
        Ok(failures)
    }
}

/// Writes the visible part of a reply.
fn write_reply<W: Write>(out: &mut W, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Value(value) => writeln!(out, "{}", format_value(*value)),
        Reply::Bindings(bindings) => {
            for (name, value) in bindings {
                writeln!(out, "{name} = {}", format_value(*value))?;
            }
            Ok(())
        },
        Reply::Nothing | Reply::Cleared(_) | Reply::Exit => Ok(()),
    }
}

/// Renders a value for display.
///
/// Magnitudes in `[1e-3, 1e7)` and zero print in plain decimal notation and
/// always carry a fractional part (`4.0`, `0.5`). Anything else prints as
/// `<mantissa>E<exponent>` (`1.0E7`, `2.5E-4`). Non-finite values print as
/// `NaN`, `Infinity` and `-Infinity`.
fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 || (1e-3..1e7).contains(&value.abs()) {
        return format!("{value:?}");
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => scientific,
    }
}
