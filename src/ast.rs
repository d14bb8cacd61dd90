use crate::interpreter::token::Token;

/// A binary arithmetic operator.
///
/// Operators are left-associative. `Add` and `Sub` share the lowest
/// precedence, `Mul` and `Div` bind tighter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator; higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Sub.precedence(), 0);
    /// assert_eq!(BinaryOperator::Div.precedence(), 1);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 0,
            Self::Mul | Self::Div => 1,
        }
    }

    /// Returns the source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Maps a source character to its operator, if it is one.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the reserved single-argument math functions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    /// `sqrt`
    Sqrt,
    /// `log`, the natural logarithm.
    Log,
    /// `sin`, argument in radians.
    Sin,
    /// `cos`, argument in radians.
    Cos,
}

impl BuiltinFunction {
    /// Returns the reserved name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }

    /// Looks up a function by its exact, case-sensitive name.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::BuiltinFunction;
    ///
    /// assert_eq!(BuiltinFunction::from_name("cos"), Some(BuiltinFunction::Cos));
    /// assert_eq!(BuiltinFunction::from_name("Cos"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "log" => Some(Self::Log),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A parsed expression, ready for evaluation.
///
/// The parser strips the optional `name=` prefix into [`Expression::binding`]
/// and reorders the remaining tokens into postfix (reverse Polish) order. The
/// postfix sequence only ever contains numbers, identifiers, operators and
/// functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// The name the result is bound to, if the expression started with
    /// `identifier=`.
    pub binding: Option<String>,
    /// The expression body in postfix order.
    pub postfix: Vec<Token>,
}

impl std::fmt::Display for Expression {
    /// Formats the postfix sequence with its tokens separated by spaces,
    /// prefixed by `name =` when a binding is present.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.binding {
            write!(f, "{name} = ")?;
        }
        for (i, token) in self.postfix.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
