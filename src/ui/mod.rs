//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Styled messages on stderr
//! - [`prompts`] - Prompt abstraction with terminal and scripted backends
//! - [`wizard`] - Interactive commit wizard
//!
//! # Design
//!
//! All terminal interaction goes through this module, so that core logic
//! stays free of I/O and the wizard can be tested without a terminal.

pub mod output;
pub mod prompts;
pub mod wizard;
