//! uninstall command - Remove the `git wit` alias or the commit hook

use anyhow::Result;

use crate::cli::Context;
use crate::git::hooks::{self, AliasChange};
use crate::git::ConfigStore;
use crate::i18n::{t, tf};
use crate::ui::output;

pub fn uninstall(ctx: &Context, hook: bool, global: bool) -> Result<()> {
    let verbosity = ctx.verbosity();

    if hook {
        let git = ctx.open_repo()?;
        output::info(t("uninstall.hook.start"), verbosity);
        let removal = hooks::uninstall_commit_hook(&git)?;
        match removal.removed {
            Some(path) => {
                output::success(tf("uninstall.hook.success", &[path.display().to_string()]), verbosity)
            }
            None => output::warn(t("uninstall.hook.missing"), verbosity),
        }
        if removal.config_cleared {
            output::debug("core.hooksPath and core.editor cleared", verbosity);
        }
        return Ok(());
    }

    let mut config = if global {
        output::info(t("uninstall.alias.global"), verbosity);
        ConfigStore::global()?
    } else {
        output::info(t("uninstall.alias.local"), verbosity);
        ctx.open_repo()?.local_config()?
    };

    match hooks::remove_alias(&mut config)? {
        AliasChange::NotConfigured => {
            output::warn(tf("uninstall.alias.missing", &[config.scope().to_string()]), verbosity)
        }
        _ => output::success(t("uninstall.success"), verbosity),
    }
    Ok(())
}
