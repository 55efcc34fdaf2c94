//! Command-line interface.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;
use crate::error::{DriverError, Result};
use crate::output::Format;

/// pl0c - Lexical analyzer for PL/0
///
/// Scans a PL/0 source file and prints its tokens, one per line.
#[derive(Parser, Debug)]
#[command(name = "pl0c")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analyzer for PL/0", long_about = None)]
pub struct Cli {
    /// PL/0 source file (must end in .pl0)
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long, env = "PL0C_VERBOSE")]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "PL0C_CONFIG")]
    pub config: Option<PathBuf>,

    /// Token dump format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Disable color output
    #[arg(long, env = "PL0C_NO_COLOR")]
    pub no_color: bool,
}

/// What to do after parsing the command line.
#[derive(Debug)]
pub enum Invocation {
    /// Scan a file.
    Run(Cli),
    /// Help or version was requested; print this and exit successfully.
    Info(String),
}

impl Cli {
    /// Parses arguments, turning clap failures into [`DriverError::Usage`].
    pub fn parse_args<I, T>(args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Ok(Invocation::Run(cli)),
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Ok(Invocation::Info(e.to_string()))
            },
            Err(e) => Err(DriverError::Usage(usage_message(&e.to_string()))),
        }
    }

    /// Merges flags over file configuration.
    pub fn settings(self, config: Config) -> Settings {
        Settings {
            path: self.file,
            verbose: self.verbose || config.verbose,
            color: !self.no_color && config.color,
            format: self.format.unwrap_or(config.format),
        }
    }
}

/// Effective settings for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Source file to scan.
    pub path: PathBuf,
    /// Log at debug level.
    pub verbose: bool,
    /// Colour log output.
    pub color: bool,
    /// Token dump format.
    pub format: Format,
}

/// Condenses a clap error into one line.
///
/// Keeps the leading paragraph (up to the first blank line) and drops clap's
/// own `error: ` prefix, since the caller adds its own.
fn usage_message(rendered: &str) -> String {
    let summary: Vec<&str> = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect();
    let summary = summary.join(" ");
    summary
        .strip_prefix("error: ")
        .unwrap_or(&summary)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Cli {
        match Cli::parse_args(args).unwrap() {
            Invocation::Run(cli) => cli,
            Invocation::Info(text) => panic!("unexpected info output: {text}"),
        }
    }

    #[test]
    fn test_cli_parse_file() {
        let cli = run(&["pl0c", "prog.pl0"]);
        assert_eq!(cli.file, PathBuf::from("prog.pl0"));
        assert!(!cli.verbose);
        assert!(!cli.no_color);
        assert_eq!(cli.format, None);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = run(&["pl0c", "-v", "--no-color", "-f", "json", "-c", "my.toml", "prog.pl0"]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.format, Some(Format::Json));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_cli_missing_file_is_usage_error() {
        let err = Cli::parse_args(["pl0c"]).unwrap_err();
        match err {
            DriverError::Usage(msg) => {
                assert!(msg.contains("required"), "{msg}");
                assert!(msg.contains("<FILE>"), "{msg}");
                assert!(!msg.starts_with("error:"));
            },
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_extra_argument_is_usage_error() {
        let err = Cli::parse_args(["pl0c", "a.pl0", "b.pl0"]).unwrap_err();
        assert!(matches!(err, DriverError::Usage(ref msg) if msg.contains("b.pl0")));
    }

    #[test]
    fn test_cli_unknown_format_is_usage_error() {
        let err = Cli::parse_args(["pl0c", "-f", "xml", "a.pl0"]).unwrap_err();
        assert!(matches!(err, DriverError::Usage(_)));
    }

    #[test]
    fn test_cli_help_and_version() {
        assert!(matches!(
            Cli::parse_args(["pl0c", "--help"]).unwrap(),
            Invocation::Info(ref text) if text.contains("Usage")
        ));
        assert!(matches!(
            Cli::parse_args(["pl0c", "-V"]).unwrap(),
            Invocation::Info(ref text) if text.starts_with("pl0c ")
        ));
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            verbose: false,
            color: true,
            format: Format::Json,
        };
        let settings = run(&["pl0c", "-v", "--no-color", "-f", "text", "x.pl0"]).settings(config);
        assert_eq!(
            settings,
            Settings {
                path: PathBuf::from("x.pl0"),
                verbose: true,
                color: false,
                format: Format::Text,
            }
        );
    }

    #[test]
    fn test_config_fills_unset_flags() {
        let config = Config {
            verbose: true,
            color: false,
            format: Format::Json,
        };
        let settings = run(&["pl0c", "x.pl0"]).settings(config);
        assert!(settings.verbose);
        assert!(!settings.color);
        assert_eq!(settings.format, Format::Json);
    }

    #[test]
    fn test_usage_message_is_one_line() {
        let rendered = "error: the following required arguments were not provided:\n  <FILE>\n\nUsage: pl0c <FILE>\n";
        assert_eq!(
            usage_message(rendered),
            "the following required arguments were not provided: <FILE>"
        );
    }
}
