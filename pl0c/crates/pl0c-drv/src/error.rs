//! Error handling module for the pl0c driver.
//!
//! Every failure the binary can report is a [`DriverError`]. Lexical errors
//! are wrapped as-is so their location survives into the final diagnostic.

use std::io;
use std::path::PathBuf;

use pl0c_lex::LexError;
use pl0c_util::{Diagnostic, DiagnosticCode};
use thiserror::Error;

/// Main error type for the pl0c driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The command line could not be parsed.
    #[error("{0}")]
    Usage(String),

    /// The input path does not end in `.pl0`.
    #[error("file must end in '.pl0'")]
    BadExtension {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// The input file could not be opened.
    #[error("unable to open file '{}': {source}", path.display())]
    Open {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The input file was opened but could not be read.
    #[error("unable to read file '{}': {source}", path.display())]
    Read {
        /// Path as given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A configuration file is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Writing the token dump failed.
    #[error("unable to write output: {0}")]
    Output(#[from] io::Error),

    /// The source is not lexically valid.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;

impl DriverError {
    /// Stable diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            DriverError::Usage(_) => DiagnosticCode::E_USAGE,
            DriverError::BadExtension { .. } => DiagnosticCode::E_INPUT_BAD_EXTENSION,
            DriverError::Open { .. } => DiagnosticCode::E_INPUT_OPEN_FAILED,
            DriverError::Read { .. } => DiagnosticCode::E_INPUT_READ_FAILED,
            DriverError::Config(_) => DiagnosticCode::E_CONFIG,
            DriverError::Logging(_) | DriverError::Output(_) => DiagnosticCode::E_ENVIRONMENT,
            DriverError::Lex(err) => err.code(),
        }
    }

    /// Converts the error into a diagnostic.
    ///
    /// Only lexical errors carry a source location.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            DriverError::Lex(err) => err.to_diagnostic(),
            other => Diagnostic::error(other.to_string()).with_code(other.code()),
        }
    }
}
