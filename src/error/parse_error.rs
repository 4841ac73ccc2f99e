use thiserror::Error;

/// Represents all errors that can occur during scanning or parsing.
///
/// Positions are byte offsets into the formula after whitespace has been
/// stripped, which is the text the parser actually reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The scanner met a character that starts no token.
    #[error("Error at position {position}: Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending source text.
        found:    String,
        /// Offset of the character.
        position: usize,
    },
    /// Found a token that cannot appear at this point of the grammar.
    #[error("Error at position {position}: Unexpected token '{found}'.")]
    UnexpectedToken {
        /// The offending source text.
        found:    String,
        /// Offset of the token.
        position: usize,
    },
    /// Reached the end of input while an operand was still expected.
    #[error("Error at position {position}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Offset of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but the input ended.
    #[error("Error at position {position}: Expected closing parenthesis ')' but none found.")]
    MissingClosingParen {
        /// Offset at which `)` was expected.
        position: usize,
    },
    /// Two call arguments were not separated by a comma.
    #[error("Error at position {position}: Expected ',' between function arguments, found '{found}'.")]
    ExpectedComma {
        /// The token found instead of `,`.
        found:    String,
        /// Offset of that token.
        position: usize,
    },
    /// A run of digits and points that is not a valid number.
    #[error("Error at position {position}: '{literal}' is not a valid number.")]
    InvalidNumber {
        /// The literal as written.
        literal:  String,
        /// Offset of the literal.
        position: usize,
    },
}

impl ParseError {
    /// Returns the offset at which the error was detected.
    ///
    /// ## Example
    /// ```
    /// use formulae::parse;
    ///
    /// let err = parse("1 + $").unwrap_err();
    /// assert_eq!(err.position(), 2);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::MissingClosingParen { position }
            | Self::ExpectedComma { position, .. }
            | Self::InvalidNumber { position, .. } => *position,
        }
    }

    /// Shifts the reported position by `offset`.
    ///
    /// Used when a quoted sub-formula is parsed on its own, so that its errors
    /// point into the enclosing formula.
    #[must_use]
    pub(crate) fn offset_by(mut self, offset: usize) -> Self {
        match &mut self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::MissingClosingParen { position }
            | Self::ExpectedComma { position, .. }
            | Self::InvalidNumber { position, .. } => *position += offset,
        }
        self
    }
}
