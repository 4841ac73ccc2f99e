use crate::{
    ast::Expr,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is either an assignment or an expression:
    ///
    /// Grammar: `statement := IDENT "=" expression | expression`
    ///
    /// An identifier directly followed by `=` starts an assignment. The scanner
    /// keeps `==` as one token, so `x == 1` is never mistaken for one. When the
    /// identifier is not followed by `=` the parser rewinds to the identifier
    /// and parses a plain expression instead.
    ///
    /// Call arguments are parsed with this function too, which is what allows
    /// loop bodies such as `for(3, x = x + 1)`.
    ///
    /// # Example
    /// ```
    /// use formulae::{ast::Expr, interpreter::parser::core::Parser};
    ///
    /// let statement = Parser::new("x=2").parse_statement().unwrap();
    /// assert_eq!(statement, Expr::assign("x", Expr::Number(2.0)));
    /// ```
    pub fn parse_statement(&mut self) -> ParseResult<Expr> {
        if matches!(self.peek()?, Some(Token::Identifier(_))) {
            let checkpoint = self.checkpoint();

            if let Some((Token::Identifier(name), _)) = self.next_token()?
               && self.eat(&Token::Equals)?
            {
                let value = self.parse_expression()?;
                return Ok(Expr::assign(name, value));
            }

            self.restore(checkpoint);
        }

        self.parse_expression()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr},
        error::ParseError,
        interpreter::parser::core::Parser,
    };

    #[test]
    fn identifier_followed_by_equals_is_an_assignment() {
        let statement = Parser::new("y=x*2").parse_statement().unwrap();

        assert_eq!(statement,
                   Expr::assign("y",
                                Expr::binary(BinaryOperator::Mul,
                                             Expr::Variable("x".into()),
                                             Expr::Number(2.0))));
    }

    #[test]
    fn equality_backtracks_to_an_expression() {
        let statement = Parser::new("x==1").parse_statement().unwrap();

        assert_eq!(statement,
                   Expr::binary(BinaryOperator::Equal,
                                Expr::Variable("x".into()),
                                Expr::Number(1.0)));
    }

    #[test]
    fn call_backtracks_to_an_expression() {
        let statement = Parser::new("f(1)+2").parse_statement().unwrap();

        assert_eq!(statement,
                   Expr::binary(BinaryOperator::Add,
                                Expr::call("f", vec![Expr::Number(1.0)]),
                                Expr::Number(2.0)));
    }

    #[test]
    fn assignment_is_not_an_operand() {
        assert_eq!(Parser::new("1+x=2").parse_program(),
                   Err(ParseError::UnexpectedToken { found:    "=".into(),
                                                     position: 3, }));
    }
}
