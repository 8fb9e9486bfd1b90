//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Errors only
//! - `--no-interactive`: Never prompt
//!
//! `--config-example` writes an example `.gitwit` and can be used without a
//! subcommand.

use clap::{Args, Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// GitWit - Conventional Commits made easy
#[derive(Parser, Debug)]
#[command(name = "gitwit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitwit was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Only print errors; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never prompt, fail instead
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Write an example .gitwit configuration in your language
    #[arg(long)]
    pub config_example: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Whether prompts may be shown.
    ///
    /// True unless `--no-interactive` or `--quiet` was given, or stdin is not
    /// a terminal.
    pub fn interactive(&self) -> bool {
        !(self.no_interactive || self.quiet) && std::io::stdin().is_terminal()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register the `git wit` alias, or the commit wizard hook
    #[command(after_help = "\
EXAMPLES:
    # Use `git wit` in this repository
    gitwit install

    # Use `git wit` everywhere
    gitwit install --global

    # Launch the wizard on every `git commit`
    gitwit install --hook")]
    Install {
        /// Install the prepare-commit-msg hook instead of the alias
        #[arg(long, conflicts_with = "global")]
        hook: bool,

        /// Overwrite an existing hook
        #[arg(short, long)]
        force: bool,

        /// Register the alias in the global git config
        #[arg(short, long)]
        global: bool,
    },

    /// Remove the `git wit` alias, or the commit wizard hook
    Uninstall {
        /// Remove the prepare-commit-msg hook instead of the alias
        #[arg(long, conflicts_with = "global")]
        hook: bool,

        /// Remove the alias from the global git config
        #[arg(short, long)]
        global: bool,
    },

    /// Create a commit with the wizard, or from the given parts
    #[command(after_help = "\
EXAMPLES:
    # Interactive wizard
    gitwit commit

    # Stage everything and commit without prompts
    gitwit commit -a -t feat -s api -d \"add pagination\"")]
    Commit(CommitArgs),

    /// Run the commit wizard and write the message to FILE (used by the git hook)
    #[command(hide = true)]
    Hook {
        /// Path of the commit message file
        file: PathBuf,
    },

    /// Validate commit messages
    #[command(after_help = "\
EXAMPLES:
    # Check HEAD
    gitwit lint

    # Check everything since v1.0.0
    gitwit lint v1.0.0..

    # Check a message before committing it
    gitwit lint --message \"feat: add wizard\"")]
    Lint {
        /// Commit or range (`a..b`) to check; defaults to HEAD
        #[arg(conflicts_with = "message")]
        rev_spec: Option<String>,

        /// Check this message instead of commits
        #[arg(short, long)]
        message: Option<String>,

        /// Range start (deprecated, use REV_SPEC)
        #[arg(short, long, hide = true)]
        from: Option<String>,

        /// Range end (deprecated, use REV_SPEC)
        #[arg(short, long, hide = true)]
        to: Option<String>,
    },

    /// Generate a changelog from the commit history
    #[command(after_help = "\
EXAMPLES:
    # Everything since the latest tag, next minor version as subtitle
    gitwit changelog --minor

    # Release notes of a given tag, printed
    gitwit changelog --for-tag v1.2.0 --stdout

    # A range, appended to the existing file
    gitwit changelog v1.0.0..v1.1.0 --append")]
    Changelog(ChangelogArgs),

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the documentation site configuration as JSON
    #[command(hide = true)]
    SiteConfig {
        /// Print the merged view of one locale (e.g. `root`, `pt`)
        #[arg(long, conflicts_with = "path")]
        locale: Option<String>,

        /// Print the merged view of the locale serving this URL path
        #[arg(long)]
        path: Option<String>,
    },
}

/// Arguments of `commit`.
#[derive(Args, Debug, Default, Clone)]
pub struct CommitArgs {
    /// Stage all changes before committing
    #[arg(short, long)]
    pub add: bool,

    /// Amend the previous commit
    #[arg(long)]
    pub amend: bool,

    /// Allow a commit without changes
    #[arg(long)]
    pub allow_empty: bool,

    /// Commit type; skips the wizard
    #[arg(short = 't', long = "type")]
    pub r#type: Option<String>,

    /// Commit scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Short description
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Long description
    #[arg(short, long)]
    pub long_description: Option<String>,

    /// Mark as a breaking change, optionally describing it
    #[arg(long, value_name = "DESCRIPTION", num_args = 0..=1, default_missing_value = "")]
    pub breaking: Option<String>,
}

/// Arguments of `changelog`.
#[derive(Args, Debug, Default, Clone)]
pub struct ChangelogArgs {
    /// Commit or range (`a..b`) to include; defaults to HEAD
    pub rev_spec: Option<String>,

    /// Range start (deprecated, use REV_SPEC)
    #[arg(short, long, hide = true)]
    pub from: Option<String>,

    /// Range end (deprecated, use REV_SPEC)
    #[arg(short, long, hide = true)]
    pub to: Option<String>,

    /// Append to the existing changelog file
    #[arg(short, long)]
    pub append: bool,

    /// Subtitle, usually the version
    #[arg(short, long, conflicts_with = "no_subtitle")]
    pub subtitle: Option<String>,

    /// Do not add a subtitle
    #[arg(short, long)]
    pub no_subtitle: bool,

    /// Copy to the clipboard instead of writing the file
    #[arg(short, long, conflicts_with = "stdout")]
    pub copy: bool,

    /// Print instead of writing the file
    #[arg(short = 'S', long)]
    pub stdout: bool,

    /// Commits since the latest tag
    #[arg(short, long, conflicts_with = "for_tag")]
    pub last_tag: bool,

    /// Commits between the previous tag and this one
    #[arg(long, value_name = "TAG")]
    pub for_tag: Option<String>,

    /// Bump the major version of the latest tag
    #[arg(short = 'M', long, conflicts_with_all = ["minor", "patch"])]
    pub major: bool,

    /// Bump the minor version of the latest tag
    #[arg(short, long, conflicts_with = "patch")]
    pub minor: bool,

    /// Bump the patch version of the latest tag
    #[arg(short, long)]
    pub patch: bool,
}

impl ChangelogArgs {
    /// Whether nothing at all was asked for.
    pub fn is_empty(&self) -> bool {
        self.rev_spec.is_none()
            && self.from.is_none()
            && self.to.is_none()
            && !self.append
            && self.subtitle.is_none()
            && !self.no_subtitle
            && !self.copy
            && !self.stdout
            && !self.last_tag
            && self.for_tag.is_none()
            && !self.major
            && !self.minor
            && !self.patch
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
