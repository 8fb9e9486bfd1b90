//! core::changelog::output
//!
//! Writing a rendered changelog to disk or to the system clipboard.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clipboard_rs::{Clipboard, ClipboardContext};

use super::ChangelogError;

/// Write the changelog to `path`, creating parent directories.
///
/// In append mode an existing non-empty file gets a blank line before the
/// new content. Otherwise the file is replaced.
pub fn write_to_file(path: &Path, content: &str, append: bool) -> Result<PathBuf, ChangelogError> {
    let write_err = |source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    if append {
        let needs_separator = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(write_err)?;
        if needs_separator {
            file.write_all(b"\n").map_err(write_err)?;
        }
        file.write_all(content.as_bytes()).map_err(write_err)?;
    } else {
        fs::write(path, content).map_err(write_err)?;
    }

    tracing::debug!(path = %path.display(), append, "changelog written");
    Ok(path.to_path_buf())
}

/// Put the changelog on the system clipboard.
pub fn copy_to_clipboard(content: &str) -> Result<(), ChangelogError> {
    let ctx = ClipboardContext::new().map_err(|e| ChangelogError::Clipboard(e.to_string()))?;
    ctx.set_text(content.to_string())
        .map_err(|e| ChangelogError::Clipboard(e.to_string()))
}
