//! Number literal lexing.
//!
//! PL/0 numbers are unsigned runs of decimal digits. Signs belong to the
//! expression grammar, so `-5` is two tokens.

use crate::chars::is_digit;
use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// # Errors
    ///
    /// [`LexError::InvalidNumber`] when the digits do not fit an `i64`.
    pub(crate) fn lex_number(&mut self) -> Result<TokenKind, LexError> {
        let text = self.cursor.eat_while(is_digit);

        if text.parse::<i64>().is_err() {
            return Err(LexError::InvalidNumber {
                text: text.to_string(),
                span: self.token_span(),
            });
        }

        Ok(TokenKind::Number)
    }
}
