//! core::emoji
//!
//! Conversion between GitHub emoji aliases (`:sparkles:`) and the emoji
//! characters themselves.
//!
//! Commit types, scopes and ignore patterns may be written either way in the
//! configuration and in commit history. Comparisons are always done on the
//! alias form, display is always done on the emoji form.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

static ALIAS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z0-9_+\-]+):").expect("alias pattern is valid"));

/// Every known emoji paired with its first GitHub alias, longest sequences
/// first so that `❤️` is matched before `❤`.
static EMOJI_TABLE: LazyLock<Vec<(&'static str, &'static str)>> = LazyLock::new(|| {
    let mut table: Vec<_> = emojis::iter()
        .filter_map(|emoji| emoji.shortcode().map(|code| (emoji.as_str(), code)))
        .collect();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
});

/// Check whether the text contains at least one `:alias:` token.
pub fn contains_alias(text: &str) -> bool {
    ALIAS_PATTERN.is_match(text)
}

/// Replace every known `:alias:` with its emoji. Unknown aliases are kept.
///
/// # Example
///
/// ```
/// use gitwit::core::emoji::process_emojis;
///
/// assert_eq!(process_emojis(":sparkles: new"), "✨ new");
/// assert_eq!(process_emojis(":not_an_emoji:"), ":not_an_emoji:");
/// ```
pub fn process_emojis(text: &str) -> Cow<'_, str> {
    if !contains_alias(text) {
        return Cow::Borrowed(text);
    }
    ALIAS_PATTERN.replace_all(text, |caps: &Captures<'_>| {
        match emojis::get_by_shortcode(&caps[1]) {
            Some(emoji) => emoji.as_str().to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// Replace every emoji character with its first GitHub alias.
///
/// # Example
///
/// ```
/// use gitwit::core::emoji::replace_emoji_with_alias;
///
/// assert_eq!(replace_emoji_with_alias("✨ new"), ":sparkles: new");
/// assert_eq!(replace_emoji_with_alias("feat"), "feat");
/// ```
pub fn replace_emoji_with_alias(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let mut out = text.to_string();
    for (emoji, alias) in EMOJI_TABLE.iter() {
        if out.contains(emoji) {
            out = out.replace(emoji, &format!(":{}:", alias));
        }
        if out.is_ascii() {
            break;
        }
    }
    Cow::Owned(out)
}
