//! core::paths
//!
//! Centralized path routing for the files GitWit reads and writes.
//!
//! # Layout
//!
//! Relative to the repository working directory:
//! - `.gitwit` - Configuration
//! - `CHANGELOG.md` - Default changelog output
//! - `.githooks/prepare-commit-msg` - Commit wizard hook
//!
//! Relative to the git directory:
//! - `hooks/` - Default hooks, migrated into `.githooks/` on install
//!
//! # Example
//!
//! ```
//! use gitwit::core::paths::RepoPaths;
//! use std::path::PathBuf;
//!
//! let paths = RepoPaths::new(PathBuf::from("/repo"), PathBuf::from("/repo/.git"));
//!
//! assert_eq!(
//!     paths.commit_hook_path(),
//!     PathBuf::from("/repo/.githooks/prepare-commit-msg")
//! );
//! ```

use std::path::{Path, PathBuf};

/// Configuration file name at the repository root.
pub const CONFIG_FILE: &str = ".gitwit";

/// Default changelog file name.
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Hooks directory managed by GitWit, relative to the working directory.
pub const HOOKS_DIR: &str = ".githooks";

/// Hook that launches the commit wizard.
pub const PREPARE_COMMIT_MSG: &str = "prepare-commit-msg";

/// Editor configured while the hook is installed so Git accepts the
/// prepared message as-is.
pub const CORE_EDITOR_CAT: &str = "cat";

/// Name of the Git alias (`git wit`).
pub const GITWIT_ALIAS: &str = "wit";

/// Name of the embedded example configuration for a locale tag.
pub fn example_file_name(locale_tag: &str) -> String {
    format!("example_{locale_tag}.gitwit")
}

/// Paths of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    /// Working directory (repository root).
    pub work_dir: PathBuf,
    /// The `.git` directory.
    pub git_dir: PathBuf,
}

impl RepoPaths {
    pub fn new(work_dir: PathBuf, git_dir: PathBuf) -> Self {
        Self { work_dir, git_dir }
    }

    /// `.gitwit` at the repository root.
    pub fn config_path(&self) -> PathBuf {
        self.work_dir.join(CONFIG_FILE)
    }

    /// `.githooks` at the repository root.
    pub fn hooks_dir(&self) -> PathBuf {
        self.work_dir.join(HOOKS_DIR)
    }

    /// `.githooks/prepare-commit-msg`.
    pub fn commit_hook_path(&self) -> PathBuf {
        self.hooks_dir().join(PREPARE_COMMIT_MSG)
    }

    /// `.git/hooks`, the location Git uses without `core.hooksPath`.
    pub fn default_hooks_dir(&self) -> PathBuf {
        self.git_dir.join("hooks")
    }

    /// Changelog output path.
    ///
    /// `configured` is relative to the repository root. When it names an
    /// existing directory, `CHANGELOG.md` is placed inside it.
    pub fn changelog_path(&self, configured: Option<&str>) -> PathBuf {
        match configured.map(str::trim).filter(|p| !p.is_empty()) {
            None => self.work_dir.join(CHANGELOG_FILE),
            Some(configured) => {
                let target = resolve(&self.work_dir, Path::new(configured));
                if target.is_dir() {
                    target.join(CHANGELOG_FILE)
                } else {
                    target
                }
            }
        }
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
