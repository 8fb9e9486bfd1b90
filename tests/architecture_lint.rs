//! Architecture enforcement tests.
//!
//! These tests scan the source tree for boundary violations so they are
//! caught in CI rather than in review.
//!
//! # Rules
//!
//! 1. **Single Git doorway** - only `src/git/` may use `git2`
//! 2. **No git CLI** - nothing spawns the `git` executable
//! 3. **Silent core** - `src/core/` never writes to the terminal
//! 4. **Known messages** - every message key used in code exists in the
//!    English and Portuguese catalogs

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Every `.rs` file under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("Failed to read {}", dir.display())) {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|e| e == "rs") {
            files.push(path);
        }
    }
    files.sort();
    files
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()))
}

/// Source text without `#[cfg(test)]` modules and comment lines.
fn production_code(content: &str) -> String {
    let code = match content.find("#[cfg(test)]") {
        Some(index) => &content[..index],
        None => content,
    };
    code.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flatten a TOML catalog into dotted keys.
fn catalog_keys(path: &str) -> BTreeSet<String> {
    fn walk(prefix: &str, value: &toml::Value, keys: &mut BTreeSet<String>) {
        match value {
            toml::Value::Table(table) => {
                for (key, value) in table {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    walk(&path, value, keys);
                }
            }
            _ => {
                keys.insert(prefix.to_string());
            }
        }
    }

    let value: toml::Value = read(Path::new(path))
        .parse()
        .unwrap_or_else(|e| panic!("{path} is not valid TOML: {e}"));
    let mut keys = BTreeSet::new();
    walk("", &value, &mut keys);
    keys
}

// =============================================================================
// Git Access
// =============================================================================

#[test]
fn only_git_module_uses_git2() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        if path.starts_with("src/git") {
            continue;
        }
        if production_code(&read(&path)).contains("git2::") {
            violations.push(path.display().to_string());
        }
    }

    assert!(
        violations.is_empty(),
        "git2 used outside src/git:\n  {}",
        violations.join("\n  ")
    );
}

#[test]
fn git_cli_is_never_spawned() {
    let spawn = Regex::new(r#"Command::new\(\s*"git"\s*\)"#).unwrap();
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        if spawn.is_match(&production_code(&read(&path))) {
            violations.push(path.display().to_string());
        }
    }

    assert!(
        violations.is_empty(),
        "git executable spawned in:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// Output
// =============================================================================

#[test]
fn core_never_prints() {
    let printing = Regex::new(r"\b(e?println!|e?print!|dbg!)|ui::output|Term::std").unwrap();
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/core")) {
        let code = production_code(&read(&path));
        if let Some(found) = printing.find(&code) {
            violations.push(format!("{}: {}", path.display(), found.as_str()));
        }
    }

    assert!(
        violations.is_empty(),
        "terminal output in src/core:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn catalogs_have_the_same_keys() {
    let en = catalog_keys("src/i18n/en.toml");
    let pt = catalog_keys("src/i18n/pt.toml");

    let only_en: Vec<_> = en.difference(&pt).collect();
    let only_pt: Vec<_> = pt.difference(&en).collect();
    assert!(only_en.is_empty(), "missing in pt.toml: {only_en:?}");
    assert!(only_pt.is_empty(), "missing in en.toml: {only_pt:?}");
}

#[test]
fn message_keys_exist() {
    let usage = Regex::new(r#"\b(?:t|tf|text|format)\(\s*"([a-z_]+(?:\.[a-z_]+)+)""#).unwrap();
    let field_key = Regex::new(r#""(commit\.field\.[a-z_]+)""#).unwrap();
    let known = catalog_keys("src/i18n/en.toml");
    let mut missing = Vec::new();

    for path in rust_files(Path::new("src")) {
        let content = production_code(&read(&path));
        let keys = usage
            .captures_iter(&content)
            .chain(field_key.captures_iter(&content))
            .map(|caps| caps[1].to_string());
        for key in keys {
            if !known.contains(&key) {
                missing.push(format!("{}: {key}", path.display()));
            }
        }
    }

    assert!(
        missing.is_empty(),
        "message keys not in the catalog:\n  {}",
        missing.join("\n  ")
    );
}
