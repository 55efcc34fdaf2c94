//! Diagnostic codes for categorizing errors.
//!
//! # Examples
//!
//! ```
//! use pl0c_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_NUMBER;
//! assert_eq!(code.to_string(), "E0103");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number padded to four
/// digits. Ranges:
///
/// - `E00xx`: command line usage
/// - `E01xx`: lexical errors
/// - `E02xx`: source input errors
/// - `E03xx`: configuration errors
/// - `W03xx`: configuration warnings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    // =========================================================================
    // USAGE (E0001-E0099)
    // =========================================================================

    /// E0001: Invalid command line invocation
    pub const E_USAGE: Self = Self::new("E", 1);

    // =========================================================================
    // LEXER (E0101-E0199)
    // =========================================================================

    /// E0101: Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 101);
    /// E0102: `:` not followed by `=`
    pub const E_LEXER_UNKNOWN_TOKEN: Self = Self::new("E", 102);
    /// E0103: Number literal outside the representable range
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 103);
    /// E0104: `{` comment without a closing `}`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 104);

    // =========================================================================
    // INPUT (E0201-E0299)
    // =========================================================================

    /// E0201: Source file name lacks the `.pl0` suffix
    pub const E_INPUT_BAD_EXTENSION: Self = Self::new("E", 201);
    /// E0202: Source file could not be opened
    pub const E_INPUT_OPEN_FAILED: Self = Self::new("E", 202);
    /// E0203: Source file could not be read
    pub const E_INPUT_READ_FAILED: Self = Self::new("E", 203);

    // =========================================================================
    // CONFIGURATION (E0301-E0399)
    // =========================================================================

    /// E0301: Configuration file missing or malformed
    pub const E_CONFIG: Self = Self::new("E", 301);
    /// E0302: Writing output or installing the logger failed
    pub const E_ENVIRONMENT: Self = Self::new("E", 302);
    /// W0301: Configuration file found by search but skipped
    pub const W_CONFIG_IGNORED: Self = Self::new("W", 301);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
