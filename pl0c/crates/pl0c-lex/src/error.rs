//! Lexical errors.
//!
//! Every lexical error is fatal: the lexer stops at the first one and the
//! caller decides whether to abort or recover.

use pl0c_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// Error produced by [`Lexer::next_token`](crate::Lexer::next_token).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unknown token '{}'", .ch.escape_default())]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Location of the character.
        span: Span,
    },

    /// `:` not immediately followed by `=`.
    #[error("unknown token {}, expected ':='", describe_colon(.found))]
    MalformedAssign {
        /// Character after the colon, `None` at end of input.
        found: Option<char>,
        /// Location of the colon.
        span: Span,
    },

    /// Digit run that does not fit a 64-bit signed integer.
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The digits as written.
        text: String,
        /// Location of the literal.
        span: Span,
    },

    /// End of input inside a `{ ... }` comment.
    #[error("unterminated comment")]
    UnterminatedComment {
        /// Where input ran out.
        span: Span,
        /// Line holding the opening `{`.
        opened_line: u32,
    },
}

fn describe_colon(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("':{}'", c.escape_default()),
        None => "':' at end of input".to_string(),
    }
}

impl LexError {
    /// Location the error was detected at.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedChar { span, .. }
            | LexError::MalformedAssign { span, .. }
            | LexError::InvalidNumber { span, .. }
            | LexError::UnterminatedComment { span, .. } => *span,
        }
    }

    /// Line the error was detected on.
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedChar { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::MalformedAssign { .. } => DiagnosticCode::E_LEXER_UNKNOWN_TOKEN,
            LexError::InvalidNumber { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexError::UnterminatedComment { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
        }
    }

    /// Converts the error into a located diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string())
            .with_code(self.code())
            .with_span(self.span());

        match self {
            LexError::UnterminatedComment { opened_line, .. } => {
                diag.with_note(format!("comment opened on line {}", opened_line))
            },
            LexError::InvalidNumber { .. } => {
                diag.with_note(format!("numbers must not exceed {}", i64::MAX))
            },
            _ => diag,
        }
    }
}
