use std::fmt;

use logos::Logos;

/// Represents a lexical token in formula source.
///
/// The scanner runs over text that has already had all whitespace removed,
/// so no token is ever separated by blanks and none need to be skipped.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// A run of digits and points such as `3.14`, `.5` or `1.2.3`.
    ///
    /// The run is kept as text; it is converted to `f64` when the parser
    /// builds the literal node, so malformed runs are reported there.
    #[regex(r"[0-9.]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `iter2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// A quoted sub-formula; the payload is the text between the quotes.
    #[regex(r#""[^"]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Quoted(String),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Number(text) | Self::Identifier(text) => return f.write_str(text),
            Self::Quoted(text) => return write!(f, "\"{text}\""),
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equals => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Comma => ",",
            Self::Semicolon => ";",
        };
        f.write_str(symbol)
    }
}

/// Removes every whitespace character from `source`.
///
/// Whitespace never separates tokens in a formula: `1 2` reads as `12` and
/// `x 1` as the identifier `x1`.
///
/// # Example
/// ```
/// use formulae::interpreter::lexer::strip_whitespace;
///
/// assert_eq!(strip_whitespace(" x = 1 +\n 2 "), "x=1+2");
/// ```
#[must_use]
pub fn strip_whitespace(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}
