//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. All repository reads and writes
//! flow through this interface. No other module should import `git2`.
//! The `git` CLI is never shelled out to.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Rev-spec and range resolution, tag ordering
//! - Commit creation (stage, amend, empty-commit checks)
//! - Local and global configuration edits
//! - Commit wizard hook and `git wit` alias ([`hooks`])
//!
//! # Example
//!
//! ```ignore
//! use gitwit::git::{CommitOptions, Git};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let latest = git.latest_tag()?;
//! let record = git.commit("feat: add wizard", CommitOptions::default())?;
//! println!("created {}", record.short_id());
//! ```

pub mod hooks;
mod interface;

pub use interface::{
    CommitOptions, CommitRecord, ConfigScope, ConfigStore, Git, GitError, GitState, HistoryCommit,
};
