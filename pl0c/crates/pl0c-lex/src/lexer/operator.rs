//! Operator and punctuation lexing.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes the assignment operator `:=`.
    ///
    /// A colon is only valid as the start of `:=`; anything else after it,
    /// including the end of input, is an error.
    pub(crate) fn lex_colon(&mut self) -> Result<TokenKind, LexError> {
        let colon = self.cursor.here();
        self.cursor.advance();

        if self.cursor.match_char('=') {
            return Ok(TokenKind::Assign);
        }

        let found = match self.cursor.current_char() {
            '\0' => None,
            c => Some(c),
        };
        Err(LexError::MalformedAssign {
            found,
            span: colon.to(self.cursor.here()),
        })
    }

    /// Lexes a one-character operator or punctuation mark.
    pub(crate) fn lex_single_char(&mut self, c: char) -> Result<TokenKind, LexError> {
        let start = self.cursor.here();
        match TokenKind::from_single_char(c) {
            Some(kind) => {
                self.cursor.advance();
                Ok(kind)
            },
            None => {
                self.cursor.advance();
                Err(LexError::UnexpectedChar {
                    ch: c,
                    span: start.to(self.cursor.here()),
                })
            },
        }
    }
}
