//! lint command - Validate commit messages against `.gitwit`

use anyhow::Result;

use crate::cli::Context;
use crate::core::lint;
use crate::core::message::CommitMessage;
use crate::git::HistoryCommit;
use crate::i18n::{t, tf};
use crate::ui::output;

/// Which messages to check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintTarget {
    pub rev_spec: Option<String>,
    /// A message given on the command line instead of commits.
    pub message: Option<String>,
    /// Deprecated range start.
    pub from: Option<String>,
    /// Deprecated range end.
    pub to: Option<String>,
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

pub fn lint(ctx: &Context, target: &LintTarget) -> Result<()> {
    let verbosity = ctx.verbosity();
    let git = ctx.open_repo()?;
    let config = ctx.load_config(&git)?;

    if let Some(raw) = target.message.as_deref() {
        output::info(t("lint.start"), verbosity);
        lint::validate(&CommitMessage::parse(raw), &config)?;
        output::success(t("lint.success"), verbosity);
        return Ok(());
    }

    if !is_set(&target.rev_spec) && (is_set(&target.from) || is_set(&target.to)) {
        output::warn(t("lint.deprecated_range"), verbosity);
    }

    output::info(t("lint.start"), verbosity);
    let commits = git.resolve_range(
        target.rev_spec.as_deref(),
        target.from.as_deref(),
        target.to.as_deref(),
    )?;

    let (checked, ignored) =
        lint::split_ignored(commits, &config.lint.ignored, |c: &HistoryCommit| {
            c.message.as_str()
        })?;
    for commit in &ignored {
        output::debug(tf("lint.ignored", &[commit.short_id()]), verbosity);
    }
    output::debug(tf("lint.total", &[checked.len().to_string()]), verbosity);

    let messages: Vec<(String, CommitMessage)> = checked
        .iter()
        .map(|commit| (commit.short_id().to_string(), commit.to_message()))
        .collect();
    lint::validate_many(messages.iter().map(|(id, m)| (id.as_str(), m)), &config)?;

    output::success(t("lint.success"), verbosity);
    Ok(())
}
