//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! User-facing messages go to stderr through `console` styles, so that
//! stdout stays clean for generated content (`changelog --stdout`,
//! `site-config`). Everything except errors respects `--quiet`.

use std::fmt::Display;

use console::{Style, Term};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    fn shows(self, level: Verbosity) -> bool {
        match level {
            Verbosity::Quiet => true,
            Verbosity::Normal => self != Verbosity::Quiet,
            Verbosity::Debug => self == Verbosity::Debug,
        }
    }
}

fn write(style: &Style, message: impl Display) {
    let _ = Term::stderr().write_line(&style.apply_to(message.to_string()).to_string());
}

/// Print a plain message to stdout (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(Verbosity::Normal) {
        println!("{message}");
    }
}

/// Print an informational message in blue.
pub fn info(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(Verbosity::Normal) {
        write(&Style::new().blue(), message);
    }
}

/// Print a warning in yellow.
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(Verbosity::Normal) {
        write(&Style::new().yellow(), message);
    }
}

/// Print a success message in bold green.
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(Verbosity::Normal) {
        write(&Style::new().green().bold(), message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity.shows(Verbosity::Debug) {
        write(&Style::new().dim(), format_args!("[debug] {message}"));
    }
}

/// Print an error in bold red (always shown).
pub fn error(message: impl Display) {
    write(&Style::new().red().bold(), message);
}

/// Format a list of items, one per line.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{prefix}{item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn levels() {
        assert!(Verbosity::Quiet.shows(Verbosity::Quiet));
        assert!(!Verbosity::Quiet.shows(Verbosity::Normal));
        assert!(Verbosity::Normal.shows(Verbosity::Normal));
        assert!(!Verbosity::Normal.shows(Verbosity::Debug));
        assert!(Verbosity::Debug.shows(Verbosity::Debug));
    }

    #[test]
    fn list_formatting() {
        assert_eq!(format_list(&["a", "b"], " - "), " - a\n - b");
        assert_eq!(format_list::<&str>(&[], " - "), "");
    }
}
