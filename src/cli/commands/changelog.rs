//! changelog command - Generate a changelog from history

use anyhow::Result;

use crate::cli::args::ChangelogArgs;
use crate::cli::Context;
use crate::core::changelog::render::{MarkdownRenderer, Renderer};
use crate::core::changelog::version::resolve_subtitle;
use crate::core::changelog::{
    self, output as changelog_output, Bump, ChangelogOptions, OutputTarget, TagSelection,
};
use crate::core::lint;
use crate::git::{Git, GitError, HistoryCommit};
use crate::i18n::{t, tf, Lang};
use crate::ui::output::{self, Verbosity};

impl From<&ChangelogArgs> for ChangelogOptions {
    fn from(args: &ChangelogArgs) -> Self {
        let bump = if args.major {
            Some(Bump::Major)
        } else if args.minor {
            Some(Bump::Minor)
        } else if args.patch {
            Some(Bump::Patch)
        } else {
            None
        };
        let tag = match (&args.for_tag, args.last_tag) {
            (Some(tag), _) => TagSelection::For(tag.clone()),
            (None, true) => TagSelection::Latest,
            (None, false) => TagSelection::None,
        };
        let output = if args.stdout {
            OutputTarget::Stdout
        } else if args.copy {
            OutputTarget::Clipboard
        } else {
            OutputTarget::File
        };

        ChangelogOptions {
            rev_spec: args.rev_spec.clone(),
            from: args.from.clone(),
            to: args.to.clone(),
            append: args.append,
            subtitle: args.subtitle.clone(),
            no_subtitle: args.no_subtitle,
            output,
            tag,
            bump,
        }
    }
}

/// Commits the changelog covers, newest first.
pub fn select_commits(
    git: &Git,
    options: &ChangelogOptions,
    verbosity: Verbosity,
) -> Result<Vec<HistoryCommit>> {
    if let TagSelection::For(tag) = &options.tag {
        return Ok(match git.previous_tag(tag)? {
            Some(previous) => {
                output::debug(format!("range {previous}..{tag}"), verbosity);
                git.list_commits_between(&previous, tag)?
            }
            None => {
                output::warn(tf("changelog.no_previous_tag", &[tag]), verbosity);
                match git.list_commits_between(&format!("{tag}^"), tag) {
                    Ok(commits) => commits,
                    // the tag is on the root commit
                    Err(GitError::RevNotFound { .. }) => git.history(tag)?,
                    Err(e) => return Err(e.into()),
                }
            }
        });
    }

    if options.since_latest_tag() {
        return Ok(match git.latest_tag()? {
            Some(latest) => {
                output::debug(format!("range {latest}..HEAD"), verbosity);
                git.list_commits_between(&latest, "HEAD")?
            }
            None => {
                output::debug("no tags, using the whole history", verbosity);
                git.history("HEAD")?
            }
        });
    }

    let has = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
    if !has(&options.rev_spec) && (has(&options.from) || has(&options.to)) {
        output::warn(t("changelog.deprecated_range"), verbosity);
    }
    Ok(git.resolve_range(
        options.rev_spec.as_deref(),
        options.from.as_deref(),
        options.to.as_deref(),
    )?)
}

pub fn changelog(ctx: &Context, args: &ChangelogArgs) -> Result<()> {
    if args.is_empty() {
        return super::print_help(Some("changelog"));
    }

    let verbosity = ctx.verbosity();
    let options = ChangelogOptions::from(args);
    let git = ctx.open_repo()?;
    let config = ctx.load_config(&git)?;

    output::info(t("changelog.start"), verbosity);

    let commits = select_commits(&git, &options, verbosity)?;
    let (commits, ignored) =
        lint::split_ignored(commits, &config.changelog.ignored, |c: &HistoryCommit| {
            c.message.as_str()
        })?;
    for commit in &ignored {
        output::debug(tf("changelog.ignored", &[commit.short_id()]), verbosity);
    }

    let grouped = changelog::group_by_type(commits.iter().map(HistoryCommit::to_message));
    for hash in &grouped.untyped {
        output::warn(tf("changelog.untyped", &[hash]), verbosity);
    }

    let latest_tag = match options.tag {
        TagSelection::For(_) => None,
        _ => git.latest_tag()?,
    };
    let subtitle = resolve_subtitle(&options, latest_tag.as_deref());
    if let Some(version) = &subtitle.unparsed_version {
        output::warn(tf("changelog.unparsed_version", &[version]), verbosity);
    }

    let Some(changelog) = changelog::generate(&config.changelog, grouped.groups, subtitle.text)?
    else {
        output::warn(t("changelog.empty"), verbosity);
        return Ok(());
    };
    let content = MarkdownRenderer::new(Lang::current()).render(&changelog, options.append);

    match options.output {
        OutputTarget::Stdout => print!("{content}"),
        OutputTarget::Clipboard => {
            changelog_output::copy_to_clipboard(&content)?;
            output::success(t("changelog.copied"), verbosity);
        }
        OutputTarget::File => {
            let path = git
                .paths()?
                .changelog_path(config.changelog.filepath.as_deref());
            let path = changelog_output::write_to_file(&path, &content, options.append)?;
            output::success(
                tf("changelog.written", &[path.display().to_string()]),
                verbosity,
            );
        }
    }
    Ok(())
}
