use std::fmt;

/// An abstract syntax tree (AST) node representing one formula expression.
///
/// `Expr` is a closed set of node kinds. Leaves are numeric literals and
/// variable references; inner nodes own their children. Every statement of a
/// [`Program`] is itself an `Expr`, so an assignment can appear anywhere a
/// statement is allowed, including as a call argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3.5`.
    Number(f64),
    /// Reference to a variable by name, resolved when evaluated.
    Variable(String),
    /// Assignment of an expression's value to a variable (`x = 1 + 2`).
    Assign {
        /// Name of the variable being written.
        name:  String,
        /// The expression whose value is stored.
        value: Box<Self>,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)` or `if(c, a, b)`).
    Call {
        /// Name of the function being called, as written in the source.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// A quoted sub-formula (`"a = a + 1; b = b * 2"`).
    ///
    /// The quoted text is parsed into its own program together with the
    /// enclosing formula. Evaluating it runs the statements in order and
    /// yields the last value.
    Embedded(Program),
}

impl Expr {
    /// Builds an assignment node.
    ///
    /// ## Example
    /// ```
    /// use formulae::ast::Expr;
    ///
    /// let expr = Expr::assign("x", Expr::Number(5.0));
    /// assert_eq!(expr.to_string(), "x = 5");
    /// ```
    #[must_use]
    pub fn assign(name: impl Into<String>, value: Self) -> Self {
        Self::Assign { name:  name.into(),
                       value: Box::new(value), }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a function call node.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>) -> Self {
        Self::Call { name: name.into(),
                     arguments }
    }
}

/// A parsed formula: the ordered statements separated by top-level `;`.
///
/// Statements run in order; the value of the program is the value of its last
/// statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statement roots in source order.
    pub statements: Vec<Expr>,
}

impl Program {
    /// Wraps a list of statements.
    #[must_use]
    pub const fn new(statements: Vec<Expr>) -> Self {
        Self { statements }
    }

    /// Returns `true` if the program has no statements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons. Comparisons produce
/// `1.0` for true and `0.0` for false.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        }
    }

    /// Returns `true` for the comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// Binary operations are always parenthesized so the rendered text parses back
// to the same tree regardless of precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable(name) => f.write_str(name),
            Self::Assign { name, value } => write!(f, "{name} = {value}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(")")
            },
            Self::Embedded(program) => write!(f, "\"{program}\""),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
