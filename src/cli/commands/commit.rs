//! commit command - Create a commit through the wizard or from flags

use anyhow::Result;

use crate::cli::args::CommitArgs;
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::emoji::{process_emojis, replace_emoji_with_alias};
use crate::core::lint;
use crate::core::message::CommitMessage;
use crate::git::CommitOptions;
use crate::i18n::tf;
use crate::ui::output;
use crate::ui::prompts::{Prompter, TermPrompter};
use crate::ui::wizard::{self, CommitWizard};

pub fn commit(ctx: &Context, args: &CommitArgs) -> Result<()> {
    let mut prompter = TermPrompter::new(ctx.interactive);
    commit_with(ctx, args, &mut prompter)
}

/// Build the message from the flags when a type is given, otherwise
/// through the wizard.
pub fn build_message(
    config: &Config,
    args: &CommitArgs,
    prompter: &mut dyn Prompter,
) -> Result<CommitMessage> {
    let given_type = args.r#type.as_deref().filter(|t| !t.trim().is_empty());
    let Some(r#type) = given_type else {
        return Ok(CommitWizard::new(config).run(prompter)?);
    };

    let alias = |text: Option<&str>| text.map(|t| replace_emoji_with_alias(t).into_owned());
    let scope = alias(args.scope.as_deref());
    let description = alias(args.description.as_deref());
    let long_description = alias(args.long_description.as_deref());

    let mut message = CommitMessage::new(
        replace_emoji_with_alias(r#type.trim()),
        scope.as_deref(),
        description.as_deref(),
        long_description.as_deref(),
    );
    if let Some(breaking) = args.breaking.as_deref() {
        message = message.with_breaking_change(Some(breaking));
    }

    lint::validate(&message, config)?;
    Ok(message)
}

pub fn commit_with(ctx: &Context, args: &CommitArgs, prompter: &mut dyn Prompter) -> Result<()> {
    let verbosity = ctx.verbosity();
    let git = ctx.open_repo()?;
    let config = ctx.load_config(&git)?;

    let message = build_message(&config, args, prompter)?;
    output::debug(wizard::preview(&message), verbosity);

    let record = git.commit(
        &message.format(),
        CommitOptions {
            add_all: args.add,
            amend: args.amend,
            allow_empty: args.allow_empty,
        },
    )?;

    output::success(
        tf(
            "commit.success",
            &[
                record.short_id().to_string(),
                process_emojis(&message.format()).lines().next().unwrap_or_default().to_string(),
            ],
        ),
        verbosity,
    );
    Ok(())
}
