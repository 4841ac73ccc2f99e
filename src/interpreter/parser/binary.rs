use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses relational and equality operators.
    ///
    /// Handles `==`, `!=`, `<`, `<=`, `>`, `>=`, left-associative, so
    /// `1 < 2 < 3` compares the `1.0`/`0.0` result of `1 < 2` with `3`.
    ///
    /// The rule is: `comparison := additive (op additive)*`
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;
        while let Some(op) = self.peek_operator(BinaryOperator::is_comparison)? {
            self.next_token()?;
            let right = self.parse_additive()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) =
            self.peek_operator(|op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub))?
        {
            self.next_token()?;
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_exponent()?;
        while let Some(op) = self.peek_operator(|op| {
                                     matches!(op,
                                              BinaryOperator::Mul
                                              | BinaryOperator::Div
                                              | BinaryOperator::Mod)
                                 })?
        {
            self.next_token()?;
            let right = self.parse_exponent()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Parses exponentiation expressions.
    ///
    /// Exponentiation is left-associative here: `2 ^ 3 ^ 2` parses as
    /// `(2 ^ 3) ^ 2` and evaluates to `64`, not `512`. Existing formulas rely
    /// on this reading.
    ///
    /// The rule is: `exponent := primary ("^" primary)*`
    pub(in crate::interpreter::parser) fn parse_exponent(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_primary()?;
        while let Some(op) = self.peek_operator(|op| op == BinaryOperator::Pow)? {
            self.next_token()?;
            let right = self.parse_primary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// Returns the operator at the head of the input if `accepts` admits it.
    fn peek_operator(&mut self,
                     accepts: impl Fn(BinaryOperator) -> bool)
                     -> ParseResult<Option<BinaryOperator>> {
        Ok(self.peek()?
               .and_then(token_to_binary_operator)
               .filter(|op| accepts(*op)))
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not a binary operator, including
/// the assignment `=`.
///
/// # Example
/// ```
/// use formulae::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Caret => Some(BinaryOperator::Pow),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{BinaryOperator::*, Expr},
        interpreter::parser::core::Parser,
    };

    fn expr(source: &str) -> Expr {
        Parser::new(source).parse_expression().unwrap()
    }

    fn num(value: f64) -> Expr {
        Expr::Number(value)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(expr("2+3*4"),
                   Expr::binary(Add, num(2.0), Expr::binary(Mul, num(3.0), num(4.0))));
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(expr("8-4-2"),
                   Expr::binary(Sub, Expr::binary(Sub, num(8.0), num(4.0)), num(2.0)));
    }

    #[test]
    fn exponent_is_left_associative() {
        assert_eq!(expr("2^3^2"),
                   Expr::binary(Pow, Expr::binary(Pow, num(2.0), num(3.0)), num(2.0)));
    }

    #[test]
    fn exponent_binds_tighter_than_modulo() {
        assert_eq!(expr("7%2^2"),
                   Expr::binary(Mod, num(7.0), Expr::binary(Pow, num(2.0), num(2.0))));
    }

    #[test]
    fn comparison_is_the_loosest_level() {
        assert_eq!(expr("1+1>=2"),
                   Expr::binary(GreaterEqual, Expr::binary(Add, num(1.0), num(1.0)), num(2.0)));
    }

    #[test]
    fn two_character_comparisons_win_over_one_character() {
        assert_eq!(expr("1<=2"), Expr::binary(LessEqual, num(1.0), num(2.0)));
        assert_eq!(expr("1!=2"), Expr::binary(NotEqual, num(1.0), num(2.0)));
    }
}
