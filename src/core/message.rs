//! core::message
//!
//! The Conventional Commit message value type.
//!
//! ```text
//! type(scope)!: short description
//!
//! long description
//!
//! BREAKING CHANGE: description
//! ```
//!
//! Messages are produced three ways: parsed from history ([`CommitMessage::parse`]),
//! assembled by the commit wizard, or built from `commit` flags. All three are
//! validated by [`crate::core::lint`] and written back with [`CommitMessage::format`].

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset};
use regex::Regex;
use serde::Serialize;

/// Length of abbreviated commit hashes.
pub const SHORT_HASH_LEN: usize = 7;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>:[A-Za-z0-9_+\-]+:|[\w\-]+)\s*(?:\((?P<scope>[^()]*)\))?\s*(?P<bang>!)?\s*(?P<colon>:)?\s*(?P<desc>.*)$",
    )
    .expect("header pattern is valid")
});

static BREAKING_FOOTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^BREAKING[ \-]CHANGE:[ \t]*").expect("breaking footer pattern is valid")
});

static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?\(\)").expect("empty parens pattern is valid"));

static LEADING_COLON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:\s+").expect("leading colon pattern is valid"));

/// Author of a commit read from history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub email: String,
    /// Author timestamp in the author's own UTC offset.
    pub time: DateTime<FixedOffset>,
}

/// A Conventional Commit message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    /// Commit type, e.g. `feat`, `fix` or `:sparkles:`.
    pub r#type: Option<String>,
    pub scope: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub breaking_changes: bool,
    pub breaking_changes_desc: Option<String>,
    /// Full hex object id, only set for commits read from history.
    pub hash: Option<String>,
    pub author: Option<Author>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl CommitMessage {
    /// Build a message from its parts, treating blank strings as absent.
    pub fn new(
        r#type: impl AsRef<str>,
        scope: Option<&str>,
        short_description: Option<&str>,
        long_description: Option<&str>,
    ) -> Self {
        Self {
            r#type: non_blank(r#type.as_ref()),
            scope: scope.and_then(non_blank),
            short_description: short_description.and_then(non_blank),
            long_description: long_description.and_then(non_blank),
            ..Default::default()
        }
    }

    /// Mark the message as breaking with an optional description.
    pub fn with_breaking_change(mut self, description: Option<&str>) -> Self {
        self.breaking_changes = true;
        self.breaking_changes_desc = description.and_then(non_blank);
        self
    }

    /// Attach history information (object id and author).
    pub fn with_origin(mut self, hash: impl Into<String>, author: Option<Author>) -> Self {
        self.hash = Some(hash.into());
        self.author = author;
        self
    }

    /// Parse a raw commit message.
    ///
    /// Never fails: a header without a recognizable type keeps its whole text
    /// as the short description, and an empty message yields an empty value.
    ///
    /// # Example
    ///
    /// ```
    /// use gitwit::core::message::CommitMessage;
    ///
    /// let msg = CommitMessage::parse("feat(api)!: change response format");
    /// assert_eq!(msg.r#type.as_deref(), Some("feat"));
    /// assert_eq!(msg.scope.as_deref(), Some("api"));
    /// assert!(msg.breaking_changes);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.replace("\r\n", "\n");
        let text = normalized.trim();
        if text.is_empty() {
            return Self::default();
        }

        let (header, body) = match text.split_once("\n\n") {
            Some((header, body)) => (header.trim(), Some(body)),
            None => (text, None),
        };

        let mut message = Self::parse_header(header);

        if let Some(body) = body {
            match BREAKING_FOOTER.find(body) {
                Some(footer) => {
                    message.long_description = non_blank(&body[..footer.start()]);
                    message.breaking_changes_desc = non_blank(&body[footer.end()..]);
                    message.breaking_changes = true;
                }
                None => message.long_description = non_blank(body),
            }
        }

        message
    }

    fn parse_header(header: &str) -> Self {
        let fallback = || Self {
            short_description: non_blank(header),
            ..Default::default()
        };

        let Some(caps) = HEADER.captures(header) else {
            return fallback();
        };

        let r#type = &caps["type"];
        let is_emoji_type = r#type.starts_with(':');
        if caps.name("colon").is_none() && !is_emoji_type {
            return fallback();
        }

        Self {
            r#type: non_blank(r#type),
            scope: caps.name("scope").and_then(|m| non_blank(m.as_str())),
            short_description: caps.name("desc").and_then(|m| non_blank(m.as_str())),
            breaking_changes: caps.name("bang").is_some(),
            ..Default::default()
        }
    }

    /// Abbreviated object id, if the message came from history.
    pub fn short_hash(&self) -> Option<&str> {
        self.hash
            .as_deref()
            .map(|hash| &hash[..hash.len().min(SHORT_HASH_LEN)])
    }

    /// Format the message following the Conventional Commits layout.
    ///
    /// # Example
    ///
    /// ```
    /// use gitwit::core::message::CommitMessage;
    ///
    /// let msg = CommitMessage::new(":sparkles:", Some("core"), Some("add feature"), None);
    /// assert_eq!(msg.format(), ":sparkles: (core): add feature");
    /// ```
    pub fn format(&self) -> String {
        let mut out = self.r#type.clone().unwrap_or_default();

        if let Some(scope) = self.scope.as_deref().filter(|s| !s.trim().is_empty()) {
            if out.ends_with(':') {
                out.push(' ');
            }
            out.push('(');
            out.push_str(scope.trim());
            out.push(')');
        }
        if self.breaking_changes {
            out.push('!');
        }
        if let Some(short) = self.short_description.as_deref().and_then(non_blank) {
            out.push_str(": ");
            out.push_str(&short);
        }
        if let Some(long) = self.long_description.as_deref().and_then(non_blank) {
            out.push_str("\n\n");
            out.push_str(&long);
        }
        if let Some(desc) = self.breaking_changes_desc.as_deref().and_then(non_blank) {
            out.push_str("\n\nBREAKING CHANGE: ");
            out.push_str(&desc);
        }
        out
    }

    /// Render the message through a changelog entry template.
    ///
    /// Placeholders: `{type}`, `{scope}`, `{description}`, `{hash}`,
    /// `{shortHash}`, `{breakingChanges}`, `{author}` and `{date}`.
    /// Empty `()` groups and a dangling leading `: ` are removed.
    pub fn format_for_changelog(&self, template: &str) -> String {
        let trimmed = |value: &Option<String>| {
            if is_blank(value) {
                String::new()
            } else {
                value.as_deref().unwrap_or_default().trim().to_string()
            }
        };

        let date = self
            .author
            .as_ref()
            .map(|a| a.time.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        let author = self
            .author
            .as_ref()
            .map(|a| a.name.clone())
            .unwrap_or_default();

        let rendered = template
            .replace("{type}", &trimmed(&self.r#type))
            .replace("{scope}", &trimmed(&self.scope))
            .replace("{description}", &trimmed(&self.short_description))
            .replace("{hash}", self.hash.as_deref().unwrap_or_default())
            .replace("{shortHash}", self.short_hash().unwrap_or_default())
            .replace(
                "{breakingChanges}",
                if self.breaking_changes { "!" } else { "" },
            )
            .replace("{author}", &author)
            .replace("{date}", &date);

        let rendered = EMPTY_PARENS.replace_all(&rendered, "");
        let rendered = LEADING_COLON.replace(&rendered, "");
        rendered.trim_start().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn parts(msg: &CommitMessage) -> (Option<&str>, Option<&str>, bool, Option<&str>, Option<&str>) {
        (
            msg.r#type.as_deref(),
            msg.scope.as_deref(),
            msg.breaking_changes,
            msg.short_description.as_deref(),
            msg.long_description.as_deref(),
        )
    }

    mod parse {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn conventional_headers() {
            let cases = [
                ("fix: correct minor typos in code", (Some("fix"), None, false, Some("correct minor typos in code"), None)),
                ("feat(core): add new engine", (Some("feat"), Some("core"), false, Some("add new engine"), None)),
                ("feat(api)!: change response format", (Some("feat"), Some("api"), true, Some("change response format"), None)),
                ("docs: update README\n", (Some("docs"), None, false, Some("update README"), None)),
                ("feat: ", (Some("feat"), None, false, None, None)),
            ];
            for (raw, expected) in cases {
                assert_eq!(parts(&CommitMessage::parse(raw)), expected, "{raw:?}");
            }
        }

        #[test]
        fn emoji_headers() {
            let cases = [
                (":sparkles: add new feature", (Some(":sparkles:"), None, false, Some("add new feature"), None)),
                (":sparkles:(core): add engine", (Some(":sparkles:"), Some("core"), false, Some("add engine"), None)),
                (":bug:(api)!: fix critical issue", (Some(":bug:"), Some("api"), true, Some("fix critical issue"), None)),
                (":bug: (:fire:): fix issue with config", (Some(":bug:"), Some(":fire:"), false, Some("fix issue with config"), None)),
            ];
            for (raw, expected) in cases {
                assert_eq!(parts(&CommitMessage::parse(raw)), expected, "{raw:?}");
            }
        }

        #[test]
        fn body_becomes_long_description() {
            let msg = CommitMessage::parse(
                "chore: update dependencies\n\nUpdated all dependencies to their latest versions.",
            );
            assert_eq!(
                msg.long_description.as_deref(),
                Some("Updated all dependencies to their latest versions.")
            );
        }

        #[test]
        fn breaking_change_footer() {
            let msg = CommitMessage::parse(
                "feat(core): add support\n\nSome long description\n\nBREAKING CHANGE: config format changed\n",
            );
            assert_eq!(msg.long_description.as_deref(), Some("Some long description"));
            assert_eq!(msg.breaking_changes_desc.as_deref(), Some("config format changed"));
            assert!(msg.breaking_changes);
        }

        #[test]
        fn breaking_footer_only_body() {
            let msg = CommitMessage::parse(
                ":boom:(auth)!: change login flow\n\nBREAKING CHANGE: token format updated\n",
            );
            assert!(msg.breaking_changes);
            assert_eq!(msg.long_description, None);
            assert_eq!(msg.breaking_changes_desc.as_deref(), Some("token format updated"));
        }

        #[test]
        fn breaking_marker_without_description() {
            let msg = CommitMessage::parse("feat: change\n\nBREAKING CHANGE:\n");
            assert!(msg.breaking_changes);
            assert_eq!(msg.breaking_changes_desc, None);
        }

        #[test]
        fn empty_message_is_empty() {
            assert_eq!(CommitMessage::parse(""), CommitMessage::default());
            assert_eq!(CommitMessage::parse("   \n"), CommitMessage::default());
        }

        #[test]
        fn empty_scope_is_absent() {
            let msg = CommitMessage::parse("feat (): add feature");
            assert_eq!(msg.scope, None);
            assert_eq!(msg.format(), "feat: add feature");
        }

        #[test]
        fn untyped_header_is_kept_as_description() {
            let msg = CommitMessage::parse(".");
            assert_eq!(msg.r#type, None);
            assert_eq!(msg.short_description.as_deref(), Some("."));

            let msg = CommitMessage::parse("Initial commit");
            assert_eq!(msg.r#type, None);
            assert_eq!(msg.short_description.as_deref(), Some("Initial commit"));
        }

        #[test]
        fn crlf_is_normalized() {
            let msg = CommitMessage::parse("fix: a\r\n\r\nbody text\r\n");
            assert_eq!(msg.long_description.as_deref(), Some("body text"));
        }
    }

    mod format {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn breaking_change_commit() {
            let msg = CommitMessage::new("feat", Some("api"), Some("change endpoint"), None)
                .with_breaking_change(Some("endpoint renamed"));
            assert_eq!(
                msg.format(),
                "feat(api)!: change endpoint\n\nBREAKING CHANGE: endpoint renamed"
            );
        }

        #[test]
        fn long_description() {
            let msg = CommitMessage::new(
                "fix",
                None,
                Some("handle null pointer"),
                Some("This fixes an edge case\nwhen value is null"),
            );
            assert_eq!(
                msg.format(),
                "fix: handle null pointer\n\nThis fixes an edge case\nwhen value is null"
            );
        }

        #[test]
        fn empty_long_description_is_skipped() {
            let msg = CommitMessage::new("fix", None, Some("handle case"), Some(""));
            assert_eq!(msg.format(), "fix: handle case");
        }

        #[test]
        fn no_colon_without_short_description() {
            let msg = CommitMessage::new("feat", None, None, None);
            assert_eq!(msg.format(), "feat");
        }
    }

    mod changelog_template {
        use super::*;
        use pretty_assertions::assert_eq;

        fn author() -> Author {
            Author {
                name: "Rafa".to_string(),
                email: "rafa@email.com".to_string(),
                time: FixedOffset::east_opt(0)
                    .unwrap()
                    .with_ymd_and_hms(2025, 1, 1, 10, 15, 30)
                    .unwrap(),
            }
        }

        #[test]
        fn all_fields() {
            let msg = CommitMessage::new("feat", Some("core"), Some("add engine"), None)
                .with_breaking_change(None)
                .with_origin("0123456789012345678901234567890123456789", Some(author()));

            let out = msg.format_for_changelog(
                "- {type}({scope}){breakingChanges}: {description} [{shortHash}] by {author} on {date}",
            );
            assert_eq!(
                out,
                "- feat(core)!: add engine [0123456] by Rafa on 2025-01-01 10:15:30"
            );
        }

        #[test]
        fn empty_scope_removed() {
            let msg = CommitMessage::new("fix", None, Some("minor fix"), None);
            assert_eq!(msg.format_for_changelog("- {type}({scope}): {description}"), "- fix: minor fix");
        }

        #[test]
        fn missing_author_gives_empty_date() {
            let msg = CommitMessage::new("fix", None, Some("bug"), None);
            assert_eq!(msg.format_for_changelog("{date}"), "");
        }

        #[test]
        fn missing_type() {
            let msg = CommitMessage {
                short_description: Some("desc".to_string()),
                ..Default::default()
            };
            assert_eq!(msg.format_for_changelog("{type}:{description}"), ":desc");
        }

        #[test]
        fn missing_description() {
            let msg = CommitMessage::new("fix", None, None, None);
            assert_eq!(msg.format_for_changelog("{type}: {description}"), "fix: ");
        }

        #[test]
        fn default_template_without_scope() {
            let msg = CommitMessage::new("fix", None, Some("crash"), None)
                .with_origin("abcdef0123456789", None);
            assert_eq!(
                msg.format_for_changelog("{scope}: {description} ({shortHash})"),
                "crash (abcdef0)"
            );
        }
    }
}
