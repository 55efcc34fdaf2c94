//! pl0c-lex - Lexical Analyzer for PL/0
//!
//! This crate turns PL/0 source text into a stream of tokens for a
//! recursive-descent parser. Scanning is on demand: every call to
//! [`Lexer::next_token`] skips whitespace and comments and returns exactly one
//! token, or the first lexical error.
//!
//! # Example Usage
//!
//! ```
//! use pl0c_lex::{tokenize, Lexer, TokenKind};
//!
//! let source = "var x; begin x := 5 end.";
//!
//! // Pull tokens one at a time
//! let mut lexer = Lexer::new(source);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Var);
//!
//! // Or scan everything up to the closing dot
//! let tokens = tokenize(source).unwrap();
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Dot);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `const`, `var`, `procedure`, `call`, `begin`, `end`, `if`, `then`, `while`,
//! `do`, `odd`. Matching is case-sensitive, so `IF` is an identifier.
//!
//! ## Identifiers and Numbers
//!
//! Identifiers match `[A-Za-z_][A-Za-z0-9_]*`. Numbers are unsigned decimal
//! digit runs that must fit an `i64`.
//!
//! ## Operators and Punctuation
//!
//! `:=`, `=`, `#`, `<`, `>`, `+`, `-`, `*`, `/`, `(`, `)`, `.`, `,`, `;`
//!
//! ## Comments
//!
//! `{ ... }`, not nested, may span lines.
//!
//! ## End of Input
//!
//! Running out of input (or reaching a NUL character) yields a Dot token with
//! text `"."`. See [`Token::is_end_of_input`] to tell it apart from a written
//! dot.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};

/// Scans `source` up to and including the first Dot.
///
/// The returned tokens always end in exactly one Dot, either written in the
/// source or produced at the end of input.
///
/// # Errors
///
/// Returns the first [`LexError`]; no tokens are returned in that case.
///
/// # Example
///
/// ```
/// use pl0c_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("x := 5;")
///     .unwrap()
///     .into_iter()
///     .map(|token| token.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Assign, TokenKind::Number, TokenKind::Semicolon, TokenKind::Dot]
/// );
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}
