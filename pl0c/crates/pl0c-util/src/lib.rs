//! pl0c-util - Core Utilities and Foundation Types
//!
//! Shared types used by every phase of the PL/0 toolchain: source locations
//! ([`Span`]) and the diagnostic model ([`Diagnostic`], [`Level`],
//! [`DiagnosticCode`]) that phases use to describe failures to the driver.
//!
//! # Example
//!
//! ```
//! use pl0c_util::{Diagnostic, DiagnosticCode, Span};
//!
//! let diag = Diagnostic::error("unterminated comment")
//!     .with_code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
//!     .with_span(Span::new(4, 4, 3, 1));
//!
//! assert_eq!(diag.render("pl0c"), "pl0c: error: 3: unterminated comment");
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Level};
pub use span::Span;
