//! core::config
//!
//! Loading and generating the `.gitwit` configuration.
//!
//! # Location
//!
//! The file is searched in order:
//! 1. `$GITWIT_CONFIG` if set
//! 2. `<repository root>/.gitwit`
//!
//! A missing file is an error: every command except `install`,
//! `uninstall` and `--config-example` needs the configured types.
//!
//! # Example
//!
//! ```no_run
//! use gitwit::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("/path/to/repo")).unwrap();
//! for (name, description) in &config.types.values {
//!     println!("{name}: {description}");
//! }
//! ```

pub mod schema;

pub use schema::{
    BreakingChangesConfig, ChangelogConfig, ChangelogFormat, Config, LintConfig,
    LongDescriptionConfig, ScopeConfig, ScopeKind, ShortDescriptionConfig, TypesConfig,
    DEFAULT_ENTRY_TEMPLATE,
};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::paths;
use crate::i18n::Lang;

/// Environment variable overriding the configuration path.
pub const CONFIG_ENV: &str = "GITWIT_CONFIG";

const EXAMPLE_EN_US: &str = include_str!("example_en_US.gitwit");
const EXAMPLE_PT_BR: &str = include_str!("example_pt_BR.gitwit");

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at '{path}' (run `gitwit --config-example` to create one)")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no commit types configured: `types.values` must not be empty")]
    TypesRequired,

    #[error("invalid scope type '{0}', expected 'text' or 'list'")]
    InvalidScopeType(String),

    #[error("`scope.values` must not be empty when `scope.type` is 'list'")]
    ScopeValuesRequired,

    #[error("invalid `{field}` length range: minLength {min} is greater than maxLength {max}")]
    InvalidLengthRange {
        field: &'static str,
        min: usize,
        max: usize,
    },
}

/// Result of [`Config::generate_example`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleOutcome {
    /// The example was written to this path.
    Written(PathBuf),
    /// A configuration already exists at this path and was left untouched.
    AlreadyExists(PathBuf),
}

impl Config {
    /// Resolve the configuration path for a repository.
    pub fn path_for(repo_root: &Path) -> PathBuf {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => repo_root.join(paths::CONFIG_FILE),
        }
    }

    /// Load and validate the configuration of a repository.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NotFound`] if the file does not exist
    /// - [`ConfigError::ParseError`] if it is not valid YAML for the schema
    /// - a validation error from [`Config::validate`]
    pub fn load(repo_root: &Path) -> Result<Config, ConfigError> {
        Self::load_from(&Self::path_for(repo_root))
    }

    /// Load and validate a configuration file at an explicit path.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        tracing::debug!(path = %path.display(), "loading configuration");

        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config = Self::parse(&contents).map_err(|message| ConfigError::ParseError {
            path: path.to_path_buf(),
            message,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse YAML text without validating it.
    ///
    /// An empty document yields the defaults.
    pub fn parse(contents: &str) -> Result<Config, String> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(contents).map_err(|e| e.to_string())
    }

    /// Embedded example configuration for a language.
    pub fn example_for(lang: Lang) -> &'static str {
        match lang {
            Lang::Pt => EXAMPLE_PT_BR,
            Lang::En => EXAMPLE_EN_US,
        }
    }

    /// Write the example configuration into the repository root.
    ///
    /// An existing `.gitwit` is never overwritten.
    pub fn generate_example(repo_root: &Path, lang: Lang) -> Result<ExampleOutcome, ConfigError> {
        let path = repo_root.join(paths::CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "configuration already present");
            return Ok(ExampleOutcome::AlreadyExists(path));
        }

        tracing::debug!(
            resource = %paths::example_file_name(lang.locale_tag()),
            "writing example configuration"
        );
        fs::write(&path, Self::example_for(lang)).map_err(|e| ConfigError::WriteError {
            path: path.clone(),
            source: e,
        })?;

        Ok(ExampleOutcome::Written(path))
    }
}
