//! cli
//!
//! Command-line interface layer for GitWit.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Initialize logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. Handlers open the repository through [`crate::git`],
//! load the configuration through [`crate::core::config`] and report to the
//! user through [`crate::ui::output`]. Domain errors bubble up as
//! `anyhow::Error` and are printed by `main`.

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::git::Git;
use crate::logging;
use crate::ui::output::Verbosity;

/// Global settings derived from CLI flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (errors only).
    pub quiet: bool,
    /// Interactive prompts allowed.
    pub interactive: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            debug: false,
            quiet: false,
            interactive: true,
        }
    }
}

impl Context {
    /// A context rooted at `dir`, as used by tests and `--cwd`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Directory commands run in.
    pub fn work_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("failed to read the current directory"),
        }
    }

    /// Open the repository containing the working directory.
    pub fn open_repo(&self) -> Result<Git> {
        Ok(Git::open(&self.work_dir()?)?)
    }

    /// Load the `.gitwit` configuration of a repository.
    pub fn load_config(&self, git: &Git) -> Result<Config> {
        Ok(Config::load(git.work_dir()?)?)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    logging::init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };
    tracing::debug!(?ctx, "starting");

    if cli.config_example {
        commands::config_example(&ctx)?;
        if cli.command.is_none() {
            return Ok(());
        }
    }

    match cli.command {
        Some(command) => commands::dispatch(command, &ctx),
        None => commands::print_help(None),
    }
}
