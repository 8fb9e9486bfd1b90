//! install command - Register the `git wit` alias or the commit hook

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::git::hooks::{self, AliasChange, HookInstall};
use crate::git::ConfigStore;
use crate::i18n::{t, tf};
use crate::ui::output;

/// Install for the running executable.
pub fn install(ctx: &Context, hook: bool, force: bool, global: bool) -> Result<()> {
    let exe = std::env::current_exe().context("failed to locate the gitwit executable")?;
    install_for(ctx, &exe, hook, force, global)
}

/// Install pointing the alias or hook at `exe`.
pub fn install_for(ctx: &Context, exe: &Path, hook: bool, force: bool, global: bool) -> Result<()> {
    let verbosity = ctx.verbosity();

    if hook {
        let git = ctx.open_repo()?;
        output::info(t("install.hook.start"), verbosity);
        match hooks::install_commit_hook(&git, exe, force)? {
            HookInstall::Installed {
                path,
                migrated,
                configured,
            } => {
                for moved in &migrated {
                    output::info(tf("install.hook.migrated", &[moved.display().to_string()]), verbosity);
                }
                if !configured {
                    output::debug("core.hooksPath already set", verbosity);
                }
                output::success(tf("install.hook.success", &[path.display().to_string()]), verbosity);
            }
            HookInstall::AlreadyExists(path) => {
                output::warn(tf("install.hook.exists", &[path.display().to_string()]), verbosity);
            }
        }
        return Ok(());
    }

    let mut config = if global {
        output::info(t("install.alias.global"), verbosity);
        ConfigStore::global()?
    } else {
        output::info(t("install.alias.local"), verbosity);
        ctx.open_repo()?.local_config()?
    };

    match hooks::set_alias(&mut config, exe)? {
        AliasChange::AlreadySet => {
            output::warn(tf("install.alias.exists", &[config.scope().to_string()]), verbosity);
        }
        _ => {
            output::success(t("install.success"), verbosity);
        }
    }
    Ok(())
}
