//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the repository and loads `.gitwit` when it needs them
//! 2. Calls into [`crate::core`], [`crate::git`] or [`crate::ui::wizard`]
//! 3. Reports through [`crate::ui::output`]
//!
//! Handlers that prompt have a `*_with` variant taking a
//! [`crate::ui::prompts::Prompter`], used by tests.

mod changelog;
mod commit;
mod completion;
mod config_example;
mod hook;
mod install;
mod lint;
mod site;
mod uninstall;

// Re-export command functions for testing and direct invocation
pub use changelog::{changelog, select_commits};
pub use commit::{build_message, commit, commit_with};
pub use completion::{completion, write_completion};
pub use config_example::config_example;
pub use hook::{hook, hook_with};
pub use install::{install, install_for};
pub use lint::{lint, LintTarget};
pub use site::{site_config, site_config_json};
pub use uninstall::uninstall;

use anyhow::Result;
use clap::CommandFactory;

use crate::cli::args::{Cli, Command};
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Install {
            hook,
            force,
            global,
        } => install(ctx, hook, force, global),
        Command::Uninstall { hook, global } => uninstall(ctx, hook, global),
        Command::Commit(args) => commit(ctx, &args),
        Command::Hook { file } => hook(ctx, &file),
        Command::Lint {
            rev_spec,
            message,
            from,
            to,
        } => lint(
            ctx,
            &LintTarget {
                rev_spec,
                message,
                from,
                to,
            },
        ),
        Command::Changelog(args) => changelog(ctx, &args),
        Command::Completion { shell } => completion(shell),
        Command::SiteConfig { locale, path } => site_config(locale.as_deref(), path.as_deref()),
    }
}

/// Print help for the program or one of its subcommands.
pub fn print_help(subcommand: Option<&str>) -> Result<()> {
    let mut cmd = Cli::command();
    cmd.build();
    if let Some(name) = subcommand {
        if let Some(sub) = cmd.find_subcommand_mut(name) {
            sub.print_help()?;
            return Ok(());
        }
    }
    cmd.print_help()?;
    Ok(())
}
