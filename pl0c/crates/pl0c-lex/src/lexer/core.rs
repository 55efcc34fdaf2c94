//! Core lexer implementation.
//!
//! This module contains the [`Lexer`] struct and the dispatch on the first
//! character of every token.

use std::iter::FusedIterator;

use pl0c_util::Span;
use tracing::trace;

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for PL/0 source text.
///
/// One lexer scans one source buffer. It borrows the buffer, so independent
/// inputs can be scanned by independent lexers with no shared state.
///
/// # Example
///
/// ```
/// use pl0c_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("x := 5;");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Assign);
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column where the current token starts (1-based).
    pub(crate) token_start_column: u32,

    /// Set once the iterator has yielded a Dot or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            finished: false,
        }
    }

    /// Scans the next token.
    ///
    /// Skips whitespace and comments, then dispatches on the first character.
    /// At the end of input (or at a NUL character) a Dot token with text `"."`
    /// is returned; calling again keeps returning it.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for an unknown character, a `:` without `=`, a
    /// number that does not fit an `i64`, or an unterminated comment.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let kind = match self.cursor.current_char() {
            '\0' => return Ok(self.end_of_input()),
            c if is_ident_start(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number()?,
            ':' => self.lex_colon()?,
            c => self.lex_single_char(c)?,
        };

        let token = Token::new(kind, self.cursor.slice_from(self.token_start), self.token_span());
        trace!(line = token.line(), kind = %token.kind, text = %token.text, "token");
        Ok(token)
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn end_of_input(&self) -> Token {
        trace!(line = self.cursor.line(), "end of input");
        Token::new(TokenKind::Dot, ".", self.cursor.here())
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte offset in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once every source character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

/// Yields tokens up to and including the first Dot, or up to the first error.
impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.kind == TokenKind::Dot,
            Err(_) => true,
        };
        Some(result)
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
