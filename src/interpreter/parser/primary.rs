use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := NUMBER
    ///          | QUOTED
    ///          | IDENT ("(" arguments? ")")?
    ///          | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `InvalidNumber` if a digit run does not convert to `f64`.
    /// - `MissingClosingParen` if a group or call is not closed.
    /// - `UnexpectedToken` / `UnexpectedEndOfInput` if no operand starts here.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.next_token()? {
            Some((Token::Number(literal), position)) => parse_number(literal, position),
            Some((Token::Quoted(text), position)) => parse_embedded(&text, position),
            Some((Token::Identifier(name), _)) => {
                if self.eat(&Token::LParen)? {
                    let arguments = self.parse_arguments()?;
                    return Ok(Expr::Call { name, arguments });
                }
                Ok(Expr::Variable(name))
            },
            Some((Token::LParen, _)) => {
                let expr = self.parse_expression()?;
                self.expect_closing_paren()?;
                Ok(expr)
            },
            Some((token, position)) => Err(ParseError::UnexpectedToken { found: token.to_string(),
                                                                         position }),
            None => Err(ParseError::UnexpectedEndOfInput { position: self.end() }),
        }
    }

    /// Parses a call's argument list after its opening parenthesis.
    ///
    /// Each argument is a full statement, so assignments are allowed. An
    /// immediately encountered `)` produces an empty list.
    ///
    /// Grammar: `arguments := statement ("," statement)* ")"`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        let mut arguments = Vec::new();
        if self.eat(&Token::RParen)? {
            return Ok(arguments);
        }

        loop {
            arguments.push(self.parse_statement()?);
            match self.next_token()? {
                Some((Token::Comma, _)) => {},
                Some((Token::RParen, _)) => break,
                Some((token, position)) => {
                    return Err(ParseError::ExpectedComma { found: token.to_string(),
                                                           position });
                },
                None => return Err(ParseError::MissingClosingParen { position: self.end() }),
            }
        }

        Ok(arguments)
    }

    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        match self.next_token()? {
            Some((Token::RParen, _)) => Ok(()),
            Some((_, position)) => Err(ParseError::MissingClosingParen { position }),
            None => Err(ParseError::MissingClosingParen { position: self.end() }),
        }
    }
}

/// Converts a digit-and-point run into a number literal.
fn parse_number(literal: String, position: usize) -> ParseResult<Expr> {
    match literal.parse::<f64>() {
        Ok(value) => Ok(Expr::Number(value)),
        Err(_) => Err(ParseError::InvalidNumber { literal, position }),
    }
}

/// Parses the text of a quoted sub-formula into its own program.
///
/// `position` is the offset of the opening quote; errors inside the quotes are
/// reported relative to the enclosing formula.
fn parse_embedded(text: &str, position: usize) -> ParseResult<Expr> {
    trace!(text, position, "parsing quoted sub-formula");

    Parser::new(text).parse_program()
                     .map(Expr::Embedded)
                     .map_err(|e| e.offset_by(position + 1))
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator, Expr, Program},
        error::ParseError,
        interpreter::parser::core::Parser,
    };

    fn expr(source: &str) -> Result<Expr, ParseError> {
        Parser::new(source).parse_expression()
    }

    #[test]
    fn numbers_accept_leading_and_trailing_points() {
        assert_eq!(expr(".5"), Ok(Expr::Number(0.5)));
        assert_eq!(expr("3."), Ok(Expr::Number(3.0)));
    }

    #[test]
    fn malformed_number_is_a_number_format_error() {
        assert_eq!(expr("1.2.3"),
                   Err(ParseError::InvalidNumber { literal:  "1.2.3".into(),
                                                   position: 0, }));
        assert_eq!(expr("."),
                   Err(ParseError::InvalidNumber { literal:  ".".into(),
                                                   position: 0, }));
    }

    #[test]
    fn call_without_arguments() {
        assert_eq!(expr("rand()"), Ok(Expr::call("rand", vec![])));
    }

    #[test]
    fn call_arguments_may_be_assignments() {
        assert_eq!(expr("for(3,x=x+1)"),
                   Ok(Expr::call("for",
                                 vec![Expr::Number(3.0),
                                      Expr::assign("x",
                                                   Expr::binary(BinaryOperator::Add,
                                                                Expr::Variable("x".into()),
                                                                Expr::Number(1.0)))])));
    }

    #[test]
    fn missing_comma_between_arguments() {
        assert_eq!(expr("max(1;2)"),
                   Err(ParseError::ExpectedComma { found:    ";".into(),
                                                   position: 5, }));
    }

    #[test]
    fn unterminated_call_and_group() {
        assert_eq!(expr("max(1,2"), Err(ParseError::MissingClosingParen { position: 7 }));
        assert_eq!(expr("(1+2"), Err(ParseError::MissingClosingParen { position: 4 }));
    }

    #[test]
    fn missing_operand() {
        assert_eq!(expr("1+"), Err(ParseError::UnexpectedEndOfInput { position: 2 }));
        assert_eq!(expr("*2"),
                   Err(ParseError::UnexpectedToken { found:    "*".into(),
                                                     position: 0, }));
    }

    #[test]
    fn quoted_text_becomes_an_embedded_program() {
        assert_eq!(expr("\"a=1;a\""),
                   Ok(Expr::Embedded(Program::new(vec![Expr::assign("a", Expr::Number(1.0)),
                                                       Expr::Variable("a".into())]))));
    }

    #[test]
    fn errors_inside_quotes_point_into_the_outer_formula() {
        assert_eq!(expr("for(2,\"1+\")"),
                   Err(ParseError::UnexpectedEndOfInput { position: 9 }));
    }
}
