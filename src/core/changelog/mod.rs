//! core::changelog
//!
//! Changelog generation from parsed commit messages.
//!
//! # Pipeline
//!
//! 1. Commits are parsed into [`CommitMessage`]s and grouped by type
//!    ([`group_by_type`]). Commits without a type are reported, not grouped.
//! 2. [`generate`] turns the groups into a format-agnostic [`Changelog`]:
//!    breaking changes first (when enabled), then one section per configured
//!    type in configured order, then every remaining type under "other".
//! 3. A [`render::Renderer`] turns the [`Changelog`] into text.
//! 4. [`output`] writes it to a file or the clipboard.
//!
//! The subtitle (usually a version) is resolved by [`version`].

pub mod output;
pub mod render;
pub mod version;

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::core::config::{ChangelogConfig, ChangelogFormat};
use crate::core::emoji::replace_emoji_with_alias;
use crate::core::message::CommitMessage;

/// Errors from changelog generation and output.
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("no changelog types configured: `changelog.types` must not be empty")]
    TypesRequired,

    #[error("no template defined for the {0} block and no `defaultTemplate` set")]
    NoTemplate(TemplateScope),

    #[error("failed to write changelog '{path}': {source}")]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy changelog to the clipboard: {0}")]
    Clipboard(String),
}

/// Block of the changelog an entry template applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateScope {
    Section,
    BreakingChanges,
    OtherTypes,
}

impl std::fmt::Display for TemplateScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TemplateScope::Section => "section",
            TemplateScope::BreakingChanges => "breaking changes",
            TemplateScope::OtherTypes => "other types",
        })
    }
}

/// Where the rendered changelog goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    File,
    Clipboard,
    Stdout,
}

/// Which tag bounds the commit range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagSelection {
    /// Use the rev-spec or range options.
    #[default]
    None,
    /// `<latest tag>..HEAD`.
    Latest,
    /// `<previous tag>..<tag>`.
    For(String),
}

/// Semantic version component to bump in the subtitle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

/// Options of one `changelog` run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogOptions {
    pub rev_spec: Option<String>,
    /// Deprecated range start.
    pub from: Option<String>,
    /// Deprecated range end.
    pub to: Option<String>,
    pub append: bool,
    pub subtitle: Option<String>,
    pub no_subtitle: bool,
    pub output: OutputTarget,
    pub tag: TagSelection,
    pub bump: Option<Bump>,
}

impl ChangelogOptions {
    /// Whether commits are taken from the latest tag up to `HEAD`.
    pub fn since_latest_tag(&self) -> bool {
        self.tag == TagSelection::Latest || self.bump.is_some()
    }
}

/// Structured changelog, independent of the output format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Changelog {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub breaking_changes: Vec<String>,
    /// Section title to entries, in configured order.
    pub sections: IndexMap<String, Vec<String>>,
    pub other_changes: Vec<String>,
}

/// Commits grouped by type.
#[derive(Debug, Clone, Default)]
pub struct Grouped {
    /// Type (alias form) to commits, in first-seen order.
    pub groups: IndexMap<String, Vec<CommitMessage>>,
    /// Short hashes of commits without a type.
    pub untyped: Vec<String>,
}

/// Group commits by type, setting aside the ones without a type.
pub fn group_by_type(commits: impl IntoIterator<Item = CommitMessage>) -> Grouped {
    let mut grouped = Grouped::default();
    for commit in commits {
        match commit.r#type.as_deref() {
            Some(r#type) => {
                let key = replace_emoji_with_alias(r#type).into_owned();
                grouped.groups.entry(key).or_default().push(commit);
            }
            None => grouped
                .untyped
                .push(commit.short_hash().unwrap_or_default().to_string()),
        }
    }
    grouped
}

/// Entry template for a block, falling back to the default template.
pub fn template_for(format: &ChangelogFormat, scope: TemplateScope) -> Result<&str, ChangelogError> {
    let specific = match scope {
        TemplateScope::Section => format.section_template.as_deref(),
        TemplateScope::BreakingChanges => format.breaking_changes_template.as_deref(),
        TemplateScope::OtherTypes => format.other_types_template.as_deref(),
    };

    specific
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            format
                .default_template
                .as_deref()
                .filter(|t| !t.trim().is_empty())
        })
        .ok_or(ChangelogError::NoTemplate(scope))
}

/// Build the changelog.
///
/// Returns `Ok(None)` when there is nothing to report.
///
/// # Errors
///
/// - [`ChangelogError::TypesRequired`] when `changelog.types` is empty
/// - [`ChangelogError::NoTemplate`] when a needed template is missing
pub fn generate(
    config: &ChangelogConfig,
    mut groups: IndexMap<String, Vec<CommitMessage>>,
    subtitle: Option<String>,
) -> Result<Option<Changelog>, ChangelogError> {
    let types: IndexMap<String, &String> = config
        .types
        .iter()
        .map(|(key, title)| (replace_emoji_with_alias(key.trim()).into_owned(), title))
        .collect();
    if types.is_empty() {
        return Err(ChangelogError::TypesRequired);
    }

    if groups.values().all(Vec::is_empty) {
        return Ok(None);
    }

    let mut breaking_changes = Vec::new();
    if config.show_breaking_changes {
        let template = template_for(&config.format, TemplateScope::BreakingChanges)?;
        for commits in groups.values_mut() {
            let (breaking, rest): (Vec<_>, Vec<_>) =
                std::mem::take(commits).into_iter().partition(|c| c.breaking_changes);
            *commits = rest;
            breaking_changes.extend(breaking.iter().map(|c| c.format_for_changelog(template)));
        }
    }

    let mut sections = IndexMap::new();
    for (r#type, title) in &types {
        let Some(commits) = groups.shift_remove(r#type) else {
            continue;
        };
        if commits.is_empty() {
            continue;
        }
        let template = template_for(&config.format, TemplateScope::Section)?;
        let entries: Vec<String> = commits
            .iter()
            .map(|c| c.format_for_changelog(template))
            .collect();
        sections
            .entry(title.to_string())
            .or_insert_with(Vec::new)
            .extend(entries);
    }

    let mut other_changes = Vec::new();
    if config.show_other_types {
        let remaining: Vec<&CommitMessage> = groups.values().flatten().collect();
        if !remaining.is_empty() {
            let template = template_for(&config.format, TemplateScope::OtherTypes)?;
            other_changes.extend(remaining.iter().map(|c| c.format_for_changelog(template)));
        }
    }

    let title = Some(config.title.clone()).filter(|t| !t.trim().is_empty());

    Ok(Some(Changelog {
        title,
        subtitle: subtitle.filter(|s| !s.trim().is_empty()),
        breaking_changes,
        sections,
        other_changes,
    }))
}
