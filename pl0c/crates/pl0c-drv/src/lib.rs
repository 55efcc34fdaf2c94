//! pl0c-drv - Driver for the PL/0 lexer
//!
//! Ties the command line, configuration, logging and the lexer together:
//! parse arguments, load `pl0c.toml`, read the source file and print its
//! tokens. Every failure surfaces as a [`DriverError`]; the binary renders it
//! as a single `pl0c: error: ...` line and exits with status 1.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use cli::{Cli, Invocation, Settings};
pub use config::{Config, Resolved};
pub use error::{DriverError, Result};
pub use output::{write_tokens, Format};

/// Program name used as the diagnostic prefix.
pub const PROGRAM: &str = "pl0c";

/// Required suffix of input file names.
pub const SOURCE_SUFFIX: &str = ".pl0";

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "PL0C_LOG";

/// Runs the driver with the process arguments, printing to stdout.
pub fn run() -> Result<()> {
    let cli = match Cli::parse_args(std::env::args_os())? {
        Invocation::Run(cli) => cli,
        Invocation::Info(text) => {
            print!("{}", text);
            return Ok(());
        },
    };

    let resolved = Config::resolve(cli.config.as_deref())?;
    let settings = cli.settings(resolved.config.clone());
    init_logging(settings.verbose, settings.color)?;
    resolved.log();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&settings, &mut out).map_err(|e| {
        let diag = e.to_diagnostic();
        match diag.span {
            Some(span) => debug!(at = %span, "{}", diag),
            None => debug!("{}", diag),
        }
        for note in &diag.notes {
            debug!("note: {}", note);
        }
        e
    })
}

/// Reads the configured source file and writes its token dump to `out`.
pub fn run_with<W: Write>(settings: &Settings, out: &mut W) -> Result<()> {
    let source = read_source(&settings.path)?;
    write_tokens(&source, settings.format, out)
}

/// Reads a `.pl0` source file.
///
/// Invalid UTF-8 is replaced with U+FFFD, which the lexer then rejects unless
/// it sits inside a comment.
pub fn read_source(path: &Path) -> Result<String> {
    if !has_source_suffix(path) {
        return Err(DriverError::BadExtension {
            path: path.to_path_buf(),
        });
    }

    let mut file = std::fs::File::open(path).map_err(|source| DriverError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source");

    let source = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), "source is not valid UTF-8; invalid bytes replaced");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        },
    };
    Ok(source)
}

/// True when the path ends in the literal suffix `.pl0`.
pub fn has_source_suffix(path: &Path) -> bool {
    path.to_string_lossy().ends_with(SOURCE_SUFFIX)
}

/// Initialize the logging system.
///
/// Logs go to stderr. `PL0C_LOG` takes precedence over `verbose`. Colour is
/// only used when stderr is a terminal.
pub fn init_logging(verbose: bool, color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(color && io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}
