//! git::hooks
//!
//! Installing the commit wizard as a `prepare-commit-msg` hook, and the
//! `git wit` alias.
//!
//! # Hook layout
//!
//! The hook lives in `.githooks/` at the repository root so it can be
//! versioned. Installing it:
//! 1. creates `.githooks/` and moves existing non-sample hooks from
//!    `.git/hooks/` into it,
//! 2. writes an executable `prepare-commit-msg` script,
//! 3. sets `core.hooksPath=.githooks` and `core.editor=cat`.
//!
//! Uninstalling removes the script and clears both keys, but only when
//! `core.hooksPath` still points at `.githooks`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::interface::{ConfigStore, Git, GitError};
use crate::core::paths::{self, RepoPaths};

const HOOKS_PATH_KEY: &str = "core.hooksPath";
const EDITOR_KEY: &str = "core.editor";

/// Errors from hook and alias management.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("failed to migrate hook '{path}': {source}")]
    Migrate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write hook '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to remove hook '{path}': {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// Result of [`install_commit_hook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookInstall {
    Installed {
        path: PathBuf,
        /// Hooks moved from `.git/hooks`.
        migrated: Vec<PathBuf>,
        /// Whether `core.hooksPath` and `core.editor` were changed.
        configured: bool,
    },
    /// The hook exists and `force` was not given.
    AlreadyExists(PathBuf),
}

/// Result of [`uninstall_commit_hook`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookRemoval {
    /// Path of the removed script, if there was one.
    pub removed: Option<PathBuf>,
    /// Whether `core.hooksPath` and `core.editor` were cleared.
    pub config_cleared: bool,
}

/// Outcome of an alias change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasChange {
    Set,
    AlreadySet,
    Removed,
    NotConfigured,
}

/// Path of an executable as written into scripts and aliases.
fn portable(exe: &Path) -> String {
    exe.display().to_string().replace('\\', "/")
}

/// Shell script of the `prepare-commit-msg` hook.
pub fn hook_script(exe: &Path) -> String {
    format!(
        r#"#!/usr/bin/env bash
# Generated by gitwit. Do not edit.
COMMIT_MSG_FILE="$1"

# merge and squash messages are prepared by git
case "$2" in
  merge|squash) exit 0 ;;
esac

# git runs hooks without a terminal on stdin
if (: < /dev/tty) 2>/dev/null; then
  exec < /dev/tty
fi

"{exe}" hook "$COMMIT_MSG_FILE" || {{
  echo 'gitwit: commit wizard failed; aborting commit.' >&2
  exit 1
}}
"#,
        exe = portable(exe)
    )
}

/// Command stored in `alias.wit`.
pub fn alias_command(exe: &Path) -> String {
    format!("!{}", portable(exe))
}

fn migrate_default_hooks(paths: &RepoPaths) -> Result<Vec<PathBuf>, HookError> {
    let hooks_dir = paths.hooks_dir();
    if !hooks_dir.exists() {
        fs::create_dir_all(&hooks_dir).map_err(|e| HookError::Write {
            path: hooks_dir.clone(),
            source: e,
        })?;
        tracing::debug!(dir = %hooks_dir.display(), "created hooks directory");
    }

    let default_dir = paths.default_hooks_dir();
    let Ok(entries) = fs::read_dir(&default_dir) else {
        return Ok(Vec::new());
    };

    let mut migrated = Vec::new();
    for entry in entries.flatten() {
        let source = entry.path();
        let is_sample = source.extension().is_some_and(|ext| ext == "sample");
        if !source.is_file() || is_sample {
            continue;
        }
        let target = hooks_dir.join(entry.file_name());
        fs::rename(&source, &target)
            .or_else(|_| fs::copy(&source, &target).and_then(|_| fs::remove_file(&source)))
            .map_err(|e| HookError::Migrate {
                path: source.clone(),
                source: e,
            })?;
        tracing::debug!(from = %source.display(), to = %target.display(), "migrated hook");
        migrated.push(target);
    }
    Ok(migrated)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Install the commit wizard hook for `exe`.
pub fn install_commit_hook(git: &Git, exe: &Path, force: bool) -> Result<HookInstall, HookError> {
    let paths = git.paths()?;
    let hook = paths.commit_hook_path();

    if hook.exists() && !force {
        return Ok(HookInstall::AlreadyExists(hook));
    }

    let migrated = migrate_default_hooks(&paths)?;

    let write_err = |source| HookError::Write {
        path: hook.clone(),
        source,
    };
    fs::write(&hook, hook_script(exe)).map_err(write_err)?;
    make_executable(&hook).map_err(write_err)?;
    tracing::debug!(path = %hook.display(), "hook script written");

    let mut config = git.local_config()?;
    let configured = config.get(HOOKS_PATH_KEY)?.as_deref() != Some(paths::HOOKS_DIR);
    if configured {
        config.set(HOOKS_PATH_KEY, paths::HOOKS_DIR)?;
        config.set(EDITOR_KEY, paths::CORE_EDITOR_CAT)?;
    }

    Ok(HookInstall::Installed {
        path: hook,
        migrated,
        configured,
    })
}

/// Remove the commit wizard hook and its configuration.
pub fn uninstall_commit_hook(git: &Git) -> Result<HookRemoval, HookError> {
    let paths = git.paths()?;
    let hook = paths.commit_hook_path();
    let mut removal = HookRemoval::default();

    if hook.exists() {
        fs::remove_file(&hook).map_err(|e| HookError::Remove {
            path: hook.clone(),
            source: e,
        })?;
        removal.removed = Some(hook);
    }

    let mut config = git.local_config()?;
    if config.get(HOOKS_PATH_KEY)?.as_deref() == Some(paths::HOOKS_DIR) {
        config.unset(HOOKS_PATH_KEY)?;
        config.unset(EDITOR_KEY)?;
        removal.config_cleared = true;
    }

    Ok(removal)
}

/// Whether the commit wizard hook is installed.
pub fn is_hook_installed(git: &Git) -> Result<bool, GitError> {
    Ok(git.paths()?.commit_hook_path().exists())
}

fn alias_key() -> String {
    format!("alias.{}", paths::GITWIT_ALIAS)
}

/// Point `alias.wit` at `exe`, leaving an existing alias untouched.
pub fn set_alias(config: &mut ConfigStore, exe: &Path) -> Result<AliasChange, GitError> {
    let key = alias_key();
    if config.get(&key)?.is_some() {
        return Ok(AliasChange::AlreadySet);
    }
    config.set(&key, &alias_command(exe))?;
    Ok(AliasChange::Set)
}

/// Remove `alias.wit`.
pub fn remove_alias(config: &mut ConfigStore) -> Result<AliasChange, GitError> {
    if config.unset(&alias_key())? {
        Ok(AliasChange::Removed)
    } else {
        Ok(AliasChange::NotConfigured)
    }
}
