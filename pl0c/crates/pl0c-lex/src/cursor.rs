//! Character cursor for traversing source code.
//!
//! The [`Cursor`] walks a borrowed `&str` one character at a time and keeps
//! the line/column bookkeeping the lexer reports in spans and errors. It never
//! reads past the end of the buffer: past the end every lookup yields `'\0'`,
//! the same sentinel a NUL-terminated buffer would show.

use pl0c_util::Span;

/// A cursor over PL/0 source text.
///
/// # Example
///
/// ```
/// use pl0c_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x := 1");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at the end.
    ///
    /// # Example
    ///
    /// ```
    /// use pl0c_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        match self.source.as_bytes().get(self.position) {
            None => '\0',
            Some(&b) if b < 128 => b as char,
            Some(_) => self.source[self.position..].chars().next().unwrap_or('\0'),
        }
    }

    /// Advances past the current character.
    ///
    /// Consuming `'\n'` moves to the next line. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use pl0c_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=x");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds and returns them.
    ///
    /// # Example
    ///
    /// ```
    /// use pl0c_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// assert_eq!(cursor.eat_while(|c| c.is_ascii_digit()), "123");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let start = self.position;
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
        self.slice_from(start)
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Empty span at the current location.
    pub fn here(&self) -> Span {
        Span::point(self.position, self.line, self.column)
    }

    /// Source text from byte offset `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
