//! GitWit - Conventional Commits made easy
//!
//! GitWit is a single-binary tool that keeps commit messages consistent:
//! it validates messages against a per-repository `.gitwit` file, writes
//! commits through an interactive wizard (also usable as a Git hook), and
//! turns the history into Markdown changelogs with version subtitles.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, runs commands)
//! - [`core`] - Commit messages, configuration, lint rules, changelogs
//! - [`git`] - Single interface for all Git operations
//! - [`ui`] - Styled output, prompts and the commit wizard
//! - [`i18n`] - English and Portuguese messages
//! - [`docs`] - Documentation site configuration
//! - [`logging`] - Diagnostic logging setup
//!
//! # Invariants
//!
//! 1. Only [`git`] talks to the repository, and only through libgit2
//! 2. [`core`] never prints; warnings are returned to the caller
//! 3. Types are compared on their emoji alias form everywhere

pub mod cli;
pub mod core;
pub mod docs;
pub mod git;
pub mod i18n;
pub mod logging;
pub mod ui;
