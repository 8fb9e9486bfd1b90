//! hook command - Run the wizard from the prepare-commit-msg hook

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::i18n::{t, tf};
use crate::ui::output;
use crate::ui::prompts::{Prompter, TermPrompter};
use crate::ui::wizard::CommitWizard;

pub fn hook(ctx: &Context, file: &Path) -> Result<()> {
    let mut prompter = TermPrompter::new(ctx.interactive);
    hook_with(ctx, file, &mut prompter)
}

/// Run the wizard and replace the contents of the commit message file.
pub fn hook_with(ctx: &Context, file: &Path, prompter: &mut dyn Prompter) -> Result<()> {
    let verbosity = ctx.verbosity();
    let git = ctx.open_repo()?;
    let config = ctx.load_config(&git)?;

    let message = CommitWizard::new(&config).run(prompter)?;

    fs::write(file, message.format())
        .with_context(|| format!("failed to write commit message to '{}'", file.display()))?;
    output::debug(tf("hook.written", &[file.display().to_string()]), verbosity);
    output::success(t("hook.success"), verbosity);
    Ok(())
}
