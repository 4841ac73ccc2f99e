use logos::{Lexer, Logos};

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A token together with its offset in the scanned text.
pub type Spanned = (Token, usize);

/// Recursive-descent parser over a whitespace-free formula.
///
/// Tokens are pulled from the `logos` scanner one at a time as the grammar
/// asks for them; no token list is ever built. Cloning a `Parser` captures its
/// exact position, which is how [`Parser::checkpoint`] and
/// [`Parser::restore`] implement backtracking.
#[derive(Clone)]
pub struct Parser<'src> {
    lexer:  Lexer<'src, Token>,
    /// `None` until the next token has been scanned; `Some(None)` at the end.
    peeked: Option<Option<Spanned>>,
    len:    usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`.
    ///
    /// The caller is responsible for stripping whitespace first; see
    /// [`crate::interpreter::lexer::strip_whitespace`].
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:  Token::lexer(source),
               peeked: None,
               len:    source.len(), }
    }

    /// Parses the whole input as a program.
    ///
    /// Grammar: `program := statement (";" statement)* ";"?`
    ///
    /// Every statement must be followed by `;` or the end of input.
    ///
    /// # Example
    /// ```
    /// use formulae::interpreter::parser::core::Parser;
    ///
    /// let program = Parser::new("x=1;x+1;").parse_program().unwrap();
    /// assert_eq!(program.statements.len(), 2);
    /// ```
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while self.peek()?.is_some() {
            statements.push(self.parse_statement()?);

            match self.next_token()? {
                None | Some((Token::Semicolon, _)) => {},
                Some((token, position)) => {
                    return Err(ParseError::UnexpectedToken { found: token.to_string(),
                                                             position });
                },
            }
        }

        Ok(Program::new(statements))
    }

    /// Parses a full expression.
    ///
    /// Grammar: `expression := comparison`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_comparison()
    }

    /// Returns the next token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&mut self) -> ParseResult<Option<&Token>> {
        self.fill()?;
        Ok(self.peeked.as_ref().and_then(Option::as_ref).map(|(token, _)| token))
    }

    /// Consumes and returns the next token with its offset.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> ParseResult<Option<Spanned>> {
        self.fill()?;
        Ok(self.peeked.take().flatten())
    }

    /// Consumes the next token if it equals `expected`.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: &Token) -> ParseResult<bool> {
        if self.peek()? == Some(expected) {
            self.peeked = None;
            return Ok(true);
        }
        Ok(false)
    }

    /// Offset of the end of the input.
    pub(in crate::interpreter::parser) const fn end(&self) -> usize {
        self.len
    }

    /// Captures the current position.
    pub(in crate::interpreter::parser) fn checkpoint(&self) -> Self {
        self.clone()
    }

    /// Rewinds to a position captured by [`Parser::checkpoint`].
    pub(in crate::interpreter::parser) fn restore(&mut self, checkpoint: Self) {
        *self = checkpoint;
    }

    fn fill(&mut self) -> ParseResult<()> {
        if self.peeked.is_some() {
            return Ok(());
        }

        let next = match self.lexer.next() {
            Some(Ok(token)) => Some((token, self.lexer.span().start)),
            Some(Err(_)) => {
                return Err(ParseError::UnexpectedCharacter { found:    self.lexer
                                                                           .slice()
                                                                           .to_string(),
                                                             position: self.lexer.span().start, });
            },
            None => None,
        };
        self.peeked = Some(next);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::BinaryOperator;

    fn parse(source: &str) -> ParseResult<Program> {
        Parser::new(source).parse_program()
    }

    #[test]
    fn empty_input_is_an_empty_program() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn statements_split_on_semicolons() {
        let program = parse("1;2;3").unwrap();
        assert_eq!(program.statements,
                   vec![Expr::Number(1.0), Expr::Number(2.0), Expr::Number(3.0)]);
    }

    #[test]
    fn doubled_semicolon_is_rejected() {
        assert_eq!(parse("1;;2"),
                   Err(ParseError::UnexpectedToken { found:    ";".into(),
                                                     position: 2, }));
    }

    #[test]
    fn trailing_tokens_after_statement_are_rejected() {
        assert_eq!(parse("2(3)"),
                   Err(ParseError::UnexpectedToken { found:    "(".into(),
                                                     position: 1, }));
    }

    #[test]
    fn checkpoint_restores_lookahead() {
        let mut parser = Parser::new("a+b");
        let checkpoint = parser.checkpoint();
        assert!(parser.next_token().unwrap().is_some());
        parser.restore(checkpoint);

        assert_eq!(parser.parse_expression().unwrap(),
                   Expr::binary(BinaryOperator::Add,
                                Expr::Variable("a".into()),
                                Expr::Variable("b".into())));
    }
}
