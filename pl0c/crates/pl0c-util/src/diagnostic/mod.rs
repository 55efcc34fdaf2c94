//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Phases describe failures as [`Diagnostic`] values; the driver decides how
//! and where they are printed.
//!
//! # Examples
//!
//! ```
//! use pl0c_util::diagnostic::{Diagnostic, DiagnosticCode, Level};
//! use pl0c_util::Span;
//!
//! let diag = Diagnostic::error("unterminated comment")
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
//!     .with_span(Span::point(20, 4, 1))
//!     .with_note("comment opened on line 2");
//!
//! assert_eq!(diag.level, Level::Error);
//! assert_eq!(
//!     diag.render("pl0c"),
//!     "pl0c: error: 4: unterminated comment\n  = note: comment opened on line 2"
//! );
//! ```

mod codes;

pub use codes::DiagnosticCode;

use crate::Span;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use pl0c_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops the run
    Error,
    /// A warning that doesn't stop the run
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and optional location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Source location, when the failure has one
    pub span: Option<Span>,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without code or location
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            code: None,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a source location
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Line the diagnostic points at, if it has a location
    pub fn line(&self) -> Option<u32> {
        self.span.map(|span| span.line)
    }

    /// First line of [`render`](Self::render), without the notes
    pub fn headline(&self, program: &str) -> String {
        match self.line() {
            Some(line) => format!("{}: {}: {}: {}", program, self.level, line, self.message),
            None => format!("{}: {}: {}", program, self.level, self.message),
        }
    }

    /// Render the diagnostic for a terminal
    ///
    /// The first line is `<program>: <level>: [<line>: ]<message>`; every note
    /// follows on its own line as `  = note: <note>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::diagnostic::Diagnostic;
    ///
    /// let diag = Diagnostic::error("file must end in '.pl0'");
    /// assert_eq!(diag.render("pl0c"), "pl0c: error: file must end in '.pl0'");
    /// ```
    pub fn render(&self, program: &str) -> String {
        let mut out = self.headline(program);
        for note in &self.notes {
            out.push_str("\n  = note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = self.code {
            write!(f, "{}[{}]: {}", self.level, code, self.message)
        } else {
            write!(f, "{}: {}", self.level, self.message)
        }
    }
}
