//! core
//!
//! Domain types and rules for GitWit.
//!
//! # Modules
//!
//! - [`message`] - Conventional Commit message parsing and formatting
//! - [`emoji`] - Emoji alias conversion
//! - [`config`] - `.gitwit` schema and loading
//! - [`lint`] - Message validation rules
//! - [`changelog`] - Changelog generation, rendering and output
//! - [`paths`] - Centralized path routing
//!
//! Nothing in here talks to the terminal. Warnings that the user must see
//! are returned to the caller.

pub mod changelog;
pub mod config;
pub mod emoji;
pub mod lint;
pub mod message;
pub mod paths;
