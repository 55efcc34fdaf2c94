//! Comment lexing.
//!
//! This module handles skipping whitespace and `{ ... }` comments.

use tracing::debug;

use crate::chars::is_whitespace;
use crate::error::LexError;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and comments.
    ///
    /// Called before lexing each token. Newlines in either advance the line
    /// counter through the cursor.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            self.cursor.eat_while(is_whitespace);

            if self.cursor.current_char() != '{' {
                return Ok(());
            }
            self.skip_comment()?;
        }
    }

    /// Skips a comment starting at the current `{`.
    ///
    /// Comments do not nest: the first `}` closes the comment.
    fn skip_comment(&mut self) -> Result<(), LexError> {
        let opened_line = self.cursor.line();
        self.cursor.advance();

        loop {
            match self.cursor.current_char() {
                '}' => {
                    self.cursor.advance();
                    debug!(from = opened_line, to = self.cursor.line(), "skipped comment");
                    return Ok(());
                },
                '\0' => {
                    return Err(LexError::UnterminatedComment {
                        span: self.cursor.here(),
                        opened_line,
                    });
                },
                _ => self.cursor.advance(),
            }
        }
    }
}
