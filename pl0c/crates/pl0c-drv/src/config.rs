//! Configuration module for the pl0c driver.
//!
//! Settings come from an optional `pl0c.toml`. Command-line flags always win
//! over the file. Lookup runs before logging is installed, so its outcome is
//! kept in a [`Resolved`] and reported once the subscriber is up.

use std::path::{Path, PathBuf};

use dirs::{config_dir, home_dir};
use pl0c_util::{Diagnostic, DiagnosticCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{DriverError, Result};
use crate::output::Format;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "pl0c.toml";

/// Driver configuration loaded from `pl0c.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log at debug level.
    #[serde(default)]
    pub verbose: bool,

    /// Colour log output.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Token dump format.
    #[serde(default)]
    pub format: Format,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            format: Format::default(),
        }
    }
}

/// Outcome of the configuration lookup.
#[derive(Debug)]
pub struct Resolved {
    /// Effective file configuration.
    pub config: Config,
    /// File the lookup settled on, if any.
    pub path: Option<PathBuf>,
    /// Set when a file found by search could not be used.
    pub skipped: Option<Diagnostic>,
}

impl Resolved {
    fn defaults() -> Self {
        Self {
            config: Config::default(),
            path: None,
            skipped: None,
        }
    }

    /// Reports the lookup outcome through `tracing`.
    pub fn log(&self) {
        match (&self.path, &self.skipped) {
            (_, Some(diag)) => warn!("{}", diag),
            (Some(path), None) => {
                debug!(path = %path.display(), config = ?self.config, "loaded configuration")
            },
            (None, None) => debug!("no configuration file found, using defaults"),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path, or search the default locations.
    ///
    /// An explicit path that does not exist or does not parse is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Resolved> {
        match explicit {
            Some(path) => Ok(Resolved {
                config: Self::load_from_path(path)?,
                path: Some(path.to_path_buf()),
                skipped: None,
            }),
            None => Ok(Self::load()),
        }
    }

    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/pl0c/`
    /// 3. Platform configuration directory
    ///
    /// Returns the default configuration if no config file is found. A file
    /// that is found but unusable is skipped with a warning.
    pub fn load() -> Resolved {
        match Self::find_config_file() {
            Some(path) => Self::load_found(path),
            None => Resolved::defaults(),
        }
    }

    fn load_found(path: PathBuf) -> Resolved {
        match Self::load_from_path(&path) {
            Ok(config) => Resolved {
                config,
                path: Some(path),
                skipped: None,
            },
            Err(e) => Resolved {
                skipped: Some(
                    Diagnostic::warning(format!("ignoring configuration file ({})", e))
                        .with_code(DiagnosticCode::W_CONFIG_IGNORED),
                ),
                path: Some(path),
                ..Resolved::defaults()
            },
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            DriverError::Config(format!("unable to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            let reason = e.message().to_string();
            DriverError::Config(format!("failed to parse {}: {}", path.display(), reason))
        })
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("pl0c").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("pl0c").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.color);
        assert_eq!(config.format, Format::Text);
    }

    #[test]
    fn test_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "verbose = true\ncolor = false\nformat = \"json\"\n");

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(
            config,
            Config {
                verbose: true,
                color: false,
                format: Format::Json,
            }
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format = \"json\"\n");

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.color);
        assert!(!config.verbose);
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "");
        assert_eq!(Config::load_from_path(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, DriverError::Config(ref msg) if msg.contains("not found")));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "colour = true\n");
        assert!(matches!(Config::load_from_path(&path), Err(DriverError::Config(_))));
    }

    #[test]
    fn test_explicit_file_is_recorded() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "verbose = true\n");

        let resolved = Config::resolve(Some(&path)).unwrap();
        assert!(resolved.config.verbose);
        assert_eq!(resolved.path, Some(path));
        assert!(resolved.skipped.is_none());
    }

    #[test]
    fn test_explicit_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "colour = true\n");
        assert!(matches!(Config::resolve(Some(&path)), Err(DriverError::Config(_))));
    }

    #[test]
    fn test_found_malformed_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "title = \"not ours\"\n");

        let resolved = Config::load_found(path.clone());
        assert_eq!(resolved.config, Config::default());
        assert_eq!(resolved.path, Some(path));

        let diag = resolved.skipped.unwrap();
        assert_eq!(diag.code, Some(DiagnosticCode::W_CONFIG_IGNORED));
        assert!(diag.to_string().starts_with("warning[W0301]: ignoring configuration file"));
    }

    #[test]
    fn test_found_valid_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format = \"json\"\n");

        let resolved = Config::load_found(path);
        assert_eq!(resolved.config.format, Format::Json);
        assert!(resolved.skipped.is_none());
    }

    #[test]
    fn test_bad_format_value_is_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "format = \"xml\"\n");
        let err = Config::load_from_path(&path).unwrap_err();
        assert!(err.to_string().starts_with("configuration error: failed to parse"));
    }
}
