//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to all Git operations in
//! GitWit: history reads for `lint` and `changelog`, commit creation, and
//! configuration edits for aliases and hooks.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::RevNotFound`]: A revision does not resolve
//! - [`GitError::OperationInProgress`]: Rebase/merge/cherry-pick in progress
//! - [`GitError::EmptyCommit`]: Nothing to commit
//!
//! # Example
//!
//! ```ignore
//! use gitwit::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! for commit in git.resolve_commits("v1.0.0..HEAD")? {
//!     println!("{} {}", commit.short_id(), commit.summary());
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use regex::Regex;
use thiserror::Error;

use crate::core::message::{Author, CommitMessage, SHORT_HASH_LEN};
use crate::core::paths::RepoPaths;

static DESCRIBE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-\d+-g[0-9a-f]+$").expect("describe suffix pattern is valid"));

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// A revision does not resolve to a commit.
    #[error("revision not found: '{spec}'")]
    RevNotFound {
        /// The revision as given
        spec: String,
    },

    /// A revision resolves to something other than a commit or tag.
    #[error("unsupported object type '{kind}' for '{spec}'")]
    UnsupportedObject { spec: String, kind: String },

    /// HEAD does not point to a commit yet.
    #[error("no HEAD commit: the repository has no commits yet")]
    NoHead,

    /// Git operation in progress (rebase, merge, etc.).
    #[error("{operation} in progress")]
    OperationInProgress {
        /// The type of operation in progress
        operation: GitState,
    },

    /// The index has unresolved conflicts.
    #[error("cannot commit with unmerged paths")]
    UnmergedPaths,

    /// The commit would not change anything.
    #[error("nothing to commit (use --allow-empty to create an empty commit)")]
    EmptyCommit,

    /// Reading or writing Git configuration failed.
    #[error("git config error for '{key}': {message}")]
    Config { key: String, message: String },

    /// No global configuration file could be located.
    #[error("global git config not found (is $HOME set?)")]
    NoGlobalConfig,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with richer context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound | git2::ErrorCode::InvalidSpec | git2::ErrorCode::Ambiguous => {
                GitError::RevNotFound {
                    spec: context.to_string(),
                }
            }
            git2::ErrorCode::UnbornBranch => GitError::NoHead,
            git2::ErrorCode::Unmerged => GitError::UnmergedPaths,
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// State of in-progress Git operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitState {
    /// No operation in progress.
    Clean,
    Rebase,
    Merge,
    CherryPick,
    Revert,
    Bisect,
    ApplyMailbox,
}

impl GitState {
    /// Check if any operation is in progress.
    ///
    /// # Example
    ///
    /// ```
    /// use gitwit::git::GitState;
    ///
    /// assert!(!GitState::Clean.is_in_progress());
    /// assert!(GitState::Merge.is_in_progress());
    /// ```
    pub fn is_in_progress(&self) -> bool {
        !matches!(self, GitState::Clean)
    }

    /// Get a human-readable description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            GitState::Clean => "clean",
            GitState::Rebase => "rebase",
            GitState::Merge => "merge",
            GitState::CherryPick => "cherry-pick",
            GitState::Revert => "revert",
            GitState::Bisect => "bisect",
            GitState::ApplyMailbox => "apply-mailbox",
        }
    }
}

impl std::fmt::Display for GitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// A commit read from history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCommit {
    /// Full hex object id.
    pub id: String,
    /// Full raw message.
    pub message: String,
    pub author: Author,
}

impl HistoryCommit {
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(SHORT_HASH_LEN)]
    }

    /// First line of the message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }

    /// Parse the message and attach the commit id and author.
    pub fn to_message(&self) -> CommitMessage {
        CommitMessage::parse(&self.message).with_origin(self.id.clone(), Some(self.author.clone()))
    }
}

/// Options for [`Git::commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitOptions {
    /// Stage every change in the working tree first (`git add -A`).
    pub add_all: bool,
    /// Replace the HEAD commit.
    pub amend: bool,
    /// Allow a commit whose tree equals its parent's.
    pub allow_empty: bool,
}

/// A commit created by [`Git::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub id: String,
}

impl CommitRecord {
    pub fn short_id(&self) -> &str {
        &self.id[..self.id.len().min(SHORT_HASH_LEN)]
    }
}

/// Which Git configuration file to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `.git/config` of the current repository.
    Local,
    /// The user's `~/.gitconfig`.
    Global,
}

impl std::fmt::Display for ConfigScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ConfigScope::Local => "local",
            ConfigScope::Global => "global",
        })
    }
}

/// One Git configuration file, opened for reading and writing.
pub struct ConfigStore {
    config: git2::Config,
    scope: ConfigScope,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("scope", &self.scope)
            .finish()
    }
}

impl ConfigStore {
    /// Open the user's global configuration.
    ///
    /// Falls back to `~/.gitconfig` when libgit2 finds no existing file,
    /// which is then created on first write.
    pub fn global() -> Result<Self, GitError> {
        let path = match git2::Config::find_global() {
            Ok(path) => path,
            Err(_) => dirs::home_dir()
                .ok_or(GitError::NoGlobalConfig)?
                .join(".gitconfig"),
        };
        Self::open_file(&path, ConfigScope::Global)
    }

    /// Open a configuration file at an explicit path.
    pub fn open_file(path: &Path, scope: ConfigScope) -> Result<Self, GitError> {
        let config = git2::Config::open(path).map_err(|e| GitError::Config {
            key: path.display().to_string(),
            message: e.message().to_string(),
        })?;
        Ok(Self { config, scope })
    }

    pub fn scope(&self) -> ConfigScope {
        self.scope
    }

    /// Read a string value. Missing keys are `None`.
    pub fn get(&self, key: &str) -> Result<Option<String>, GitError> {
        match self.config.get_string(key) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(GitError::Config {
                key: key.to_string(),
                message: e.message().to_string(),
            }),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), GitError> {
        self.config
            .set_str(key, value)
            .map_err(|e| GitError::Config {
                key: key.to_string(),
                message: e.message().to_string(),
            })
    }

    /// Remove a key. Returns whether it was present.
    pub fn unset(&mut self, key: &str) -> Result<bool, GitError> {
        match self.config.remove(key) {
            Ok(()) => Ok(true),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(false),
            Err(e) => Err(GitError::Config {
                key: key.to_string(),
                message: e.message().to_string(),
            }),
        }
    }
}

/// The Git interface.
///
/// This is the **single point of interaction** with Git. All repository
/// reads and writes flow through this interface. No other module should
/// import `git2` directly.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Working directory (repository root).
    pub fn work_dir(&self) -> Result<&Path, GitError> {
        self.repo.workdir().ok_or(GitError::BareRepo)
    }

    /// Path of the .git directory.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Path routing for this repository.
    pub fn paths(&self) -> Result<RepoPaths, GitError> {
        Ok(RepoPaths::new(
            self.work_dir()?.to_path_buf(),
            self.git_dir().to_path_buf(),
        ))
    }

    /// The repository's own `.git/config`.
    pub fn local_config(&self) -> Result<ConfigStore, GitError> {
        let config = self
            .repo
            .config()
            .and_then(|c| c.open_level(git2::ConfigLevel::Local))
            .map_err(|e| GitError::Config {
                key: "local".to_string(),
                message: e.message().to_string(),
            })?;
        Ok(ConfigStore {
            config,
            scope: ConfigScope::Local,
        })
    }

    // =========================================================================
    // State Detection
    // =========================================================================

    /// Get the current Git state (rebase, merge, etc.).
    pub fn state(&self) -> GitState {
        match self.repo.state() {
            git2::RepositoryState::Clean => GitState::Clean,
            git2::RepositoryState::Rebase
            | git2::RepositoryState::RebaseInteractive
            | git2::RepositoryState::RebaseMerge => GitState::Rebase,
            git2::RepositoryState::Merge => GitState::Merge,
            git2::RepositoryState::CherryPick | git2::RepositoryState::CherryPickSequence => {
                GitState::CherryPick
            }
            git2::RepositoryState::Revert | git2::RepositoryState::RevertSequence => {
                GitState::Revert
            }
            git2::RepositoryState::Bisect => GitState::Bisect,
            git2::RepositoryState::ApplyMailbox | git2::RepositoryState::ApplyMailboxOrRebase => {
                GitState::ApplyMailbox
            }
        }
    }

    // =========================================================================
    // History
    // =========================================================================

    fn to_history(commit: &git2::Commit<'_>) -> HistoryCommit {
        let author = commit.author();
        let when = author.when();
        let offset = FixedOffset::east_opt(when.offset_minutes() * 60)
            .unwrap_or_else(|| Utc.fix());
        let time = DateTime::from_timestamp(when.seconds(), 0)
            .unwrap_or(DateTime::UNIX_EPOCH)
            .with_timezone(&offset);

        HistoryCommit {
            id: commit.id().to_string(),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            author: Author {
                name: author.name().unwrap_or_default().to_string(),
                email: author.email().unwrap_or_default().to_string(),
                time,
            },
        }
    }

    /// Resolve a revision to a commit, peeling annotated tags.
    fn find_commit(&self, spec: &str) -> Result<git2::Commit<'_>, GitError> {
        if spec.trim().is_empty() {
            return Err(GitError::RevNotFound {
                spec: spec.to_string(),
            });
        }

        let object = self
            .repo
            .revparse_single(spec)
            .map_err(|e| GitError::from_git2(e, spec))?;

        match object.kind() {
            Some(git2::ObjectType::Commit) | Some(git2::ObjectType::Tag) => object
                .peel_to_commit()
                .map_err(|e| GitError::from_git2(e, spec)),
            kind => Err(GitError::UnsupportedObject {
                spec: spec.to_string(),
                kind: kind.map(|k| k.str()).unwrap_or("unknown").to_string(),
            }),
        }
    }

    /// Whether a revision names an annotated tag object.
    fn is_annotated_tag(&self, spec: &str) -> bool {
        self.repo
            .revparse_single(spec)
            .map(|o| o.kind() == Some(git2::ObjectType::Tag))
            .unwrap_or(false)
    }

    /// Resolve a single revision.
    pub fn resolve_commit(&self, spec: &str) -> Result<HistoryCommit, GitError> {
        Ok(Self::to_history(&self.find_commit(spec)?))
    }

    /// Commits reachable from `to` but not from `from`, newest first,
    /// followed by `from` itself unless it names an annotated tag.
    pub fn list_commits_between(&self, from: &str, to: &str) -> Result<Vec<HistoryCommit>, GitError> {
        let from_commit = self.find_commit(from)?;
        let to_commit = self.find_commit(to)?;

        let mut walk = self.repo.revwalk()?;
        walk.set_sorting(git2::Sort::TIME)?;
        walk.push(to_commit.id())?;
        walk.hide(from_commit.id())?;

        let mut commits = Vec::new();
        for oid in walk {
            let commit = self.repo.find_commit(oid?)?;
            commits.push(Self::to_history(&commit));
        }

        if !self.is_annotated_tag(from) {
            commits.push(Self::to_history(&from_commit));
        }

        tracing::debug!(from, to, count = commits.len(), "listed commits");
        Ok(commits)
    }

    /// Every commit reachable from `rev`, newest first.
    pub fn history(&self, rev: &str) -> Result<Vec<HistoryCommit>, GitError> {
        let tip = self.find_commit(rev)?;

        let mut walk = self.repo.revwalk()?;
        walk.set_sorting(git2::Sort::TIME)?;
        walk.push(tip.id())?;

        let mut commits = Vec::new();
        for oid in walk {
            commits.push(Self::to_history(&self.repo.find_commit(oid?)?));
        }
        tracing::debug!(rev, count = commits.len(), "walked history");
        Ok(commits)
    }

    /// Resolve a rev-spec: `a..b` (empty `b` means `HEAD`) or a single revision.
    ///
    /// # Errors
    ///
    /// - [`GitError::RevNotFound`] for a blank spec or an unknown revision
    pub fn resolve_commits(&self, spec: &str) -> Result<Vec<HistoryCommit>, GitError> {
        if spec.trim().is_empty() {
            return Err(GitError::RevNotFound {
                spec: spec.to_string(),
            });
        }

        match spec.split_once("..") {
            Some((from, to)) => {
                let to = if to.trim().is_empty() { "HEAD" } else { to.trim() };
                let from = if from.trim().is_empty() { "HEAD" } else { from.trim() };
                self.list_commits_between(from, to)
            }
            None => Ok(vec![self.resolve_commit(spec.trim())?]),
        }
    }

    /// Resolve the commits a command works on.
    ///
    /// The rev-spec wins; otherwise `from`/`to` form a range (blank ends
    /// default to `HEAD`); otherwise `HEAD` alone.
    pub fn resolve_range(
        &self,
        rev_spec: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Vec<HistoryCommit>, GitError> {
        fn non_blank(s: Option<&str>) -> Option<&str> {
            s.map(str::trim).filter(|s| !s.is_empty())
        }

        if let Some(spec) = non_blank(rev_spec) {
            return self.resolve_commits(spec);
        }

        if non_blank(from).is_some() || non_blank(to).is_some() {
            let range = format!(
                "{}..{}",
                non_blank(from).unwrap_or("HEAD"),
                non_blank(to).unwrap_or("HEAD")
            );
            return self.resolve_commits(&range);
        }

        Ok(vec![self.resolve_commit("HEAD")?])
    }

    // =========================================================================
    // Tags
    // =========================================================================

    /// Tags with their target commit time, newest first.
    fn tags_by_time(&self) -> Result<Vec<(String, i64)>, GitError> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::new();

        for name in names.iter().flatten() {
            let reference = format!("refs/tags/{name}");
            let commit = match self
                .repo
                .revparse_single(&reference)
                .and_then(|o| o.peel_to_commit())
            {
                Ok(commit) => commit,
                Err(e) => {
                    tracing::debug!(tag = name, error = %e.message(), "skipping tag");
                    continue;
                }
            };
            let name = DESCRIBE_SUFFIX.replace(name, "").into_owned();
            tags.push((name, commit.time().seconds()));
        }

        tags.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(tags)
    }

    /// The tag pointing at the newest commit, if any.
    pub fn latest_tag(&self) -> Result<Option<String>, GitError> {
        Ok(self.tags_by_time()?.into_iter().next().map(|(name, _)| name))
    }

    /// The newest tag strictly older than the commit `rev` points at.
    pub fn previous_tag(&self, rev: &str) -> Result<Option<String>, GitError> {
        let time = self.find_commit(rev)?.time().seconds();
        Ok(self
            .tags_by_time()?
            .into_iter()
            .find(|(_, t)| *t < time)
            .map(|(name, _)| name))
    }

    // =========================================================================
    // Committing
    // =========================================================================

    /// Create a commit on HEAD with the given message.
    ///
    /// Uses the repository's configured signature. Hooks are not run.
    ///
    /// # Errors
    ///
    /// - [`GitError::OperationInProgress`] during a merge, rebase, ...
    /// - [`GitError::UnmergedPaths`] if the index has conflicts
    /// - [`GitError::NoHead`] when amending without commits
    /// - [`GitError::EmptyCommit`] if nothing changed and empty commits are not allowed
    pub fn commit(&self, message: &str, options: CommitOptions) -> Result<CommitRecord, GitError> {
        let state = self.state();
        if state.is_in_progress() {
            return Err(GitError::OperationInProgress { operation: state });
        }

        let mut index = self.repo.index()?;
        if options.add_all {
            tracing::debug!("staging all changes");
            index.add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)?;
            index.update_all(["*"].iter(), None)?;
            index.write()?;
        }
        if index.has_conflicts() {
            return Err(GitError::UnmergedPaths);
        }

        let tree = self.repo.find_tree(index.write_tree()?)?;
        let signature = self.repo.signature().map_err(|e| GitError::Config {
            key: "user.name".to_string(),
            message: e.message().to_string(),
        })?;

        let head = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                None
            }
            Err(e) => return Err(GitError::from_git2(e, "HEAD")),
        };

        let id = if options.amend {
            let head = head.ok_or(GitError::NoHead)?;
            head.amend(
                Some("HEAD"),
                None,
                Some(&signature),
                None,
                Some(message),
                Some(&tree),
            )?
        } else {
            if !options.allow_empty {
                let unchanged = match &head {
                    Some(parent) => parent.tree_id() == tree.id(),
                    None => index.is_empty(),
                };
                if unchanged {
                    return Err(GitError::EmptyCommit);
                }
            }
            let parents: Vec<&git2::Commit<'_>> = head.iter().collect();
            self.repo
                .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?
        };

        tracing::debug!(id = %id, amend = options.amend, "commit created");
        Ok(CommitRecord { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod errors {
        use super::*;

        #[test]
        fn display_formatting() {
            let err = GitError::RevNotFound {
                spec: "v9.9.9".to_string(),
            };
            assert!(err.to_string().contains("v9.9.9"));

            let err = GitError::OperationInProgress {
                operation: GitState::Merge,
            };
            assert_eq!(err.to_string(), "merge in progress");
        }
    }

    mod git_state {
        use super::*;

        #[test]
        fn clean_is_not_in_progress() {
            assert!(!GitState::Clean.is_in_progress());
        }

        #[test]
        fn operations_are_in_progress() {
            for state in [
                GitState::Rebase,
                GitState::Merge,
                GitState::CherryPick,
                GitState::Revert,
                GitState::Bisect,
                GitState::ApplyMailbox,
            ] {
                assert!(state.is_in_progress(), "{state}");
            }
        }
    }

    mod history_commit {
        use super::*;
        use chrono::TimeZone;

        fn commit(message: &str) -> HistoryCommit {
            HistoryCommit {
                id: "0123456789abcdef0123456789abcdef01234567".to_string(),
                message: message.to_string(),
                author: Author {
                    name: "Dev".to_string(),
                    email: "dev@example.com".to_string(),
                    time: FixedOffset::east_opt(-3 * 3600)
                        .unwrap()
                        .with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
                        .unwrap(),
                },
            }
        }

        #[test]
        fn short_id_and_summary() {
            let c = commit("feat: a\n\nbody");
            assert_eq!(c.short_id(), "0123456");
            assert_eq!(c.summary(), "feat: a");
        }

        #[test]
        fn to_message_keeps_origin() {
            let msg = commit("fix(ui): b").to_message();
            assert_eq!(msg.r#type.as_deref(), Some("fix"));
            assert_eq!(msg.short_hash(), Some("0123456"));
            assert_eq!(
                msg.format_for_changelog("{author} {date}"),
                "Dev 2025-06-01 09:00:00"
            );
        }
    }

    #[test]
    fn config_scope_display() {
        assert_eq!(ConfigScope::Local.to_string(), "local");
        assert_eq!(ConfigScope::Global.to_string(), "global");
    }
}
