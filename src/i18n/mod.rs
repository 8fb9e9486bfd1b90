//! i18n
//!
//! Localized user-facing messages.
//!
//! # Catalogs
//!
//! English (`en.toml`) and Portuguese (`pt.toml`) catalogs are embedded in
//! the binary. Nested tables are flattened into dotted keys, so
//!
//! ```toml
//! [lint]
//! success = "All commits are valid."
//! ```
//!
//! is looked up as `lint.success`. Placeholders are positional: `{0}`,
//! `{1}`, ...
//!
//! # Language selection
//!
//! The first non-empty of `GITWIT_LANG`, `LC_ALL`, `LC_MESSAGES` and `LANG`
//! decides: values starting with `pt` select Portuguese, anything else
//! English. Keys missing from the Portuguese catalog fall back to English,
//! and unknown keys resolve to themselves.

use std::collections::HashMap;
use std::sync::{LazyLock, OnceLock};

const EN_CATALOG: &str = include_str!("en.toml");
const PT_CATALOG: &str = include_str!("pt.toml");

/// Environment variables consulted by [`Lang::detect`], in order.
pub const LANG_ENV_VARS: [&str; 4] = ["GITWIT_LANG", "LC_ALL", "LC_MESSAGES", "LANG"];

type Catalog = HashMap<String, String>;

fn flatten(prefix: &str, table: &toml::Table, out: &mut Catalog) {
    for (key, value) in table {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(nested) => flatten(&full, nested, out),
            toml::Value::String(text) => {
                out.insert(full, text.clone());
            }
            other => {
                out.insert(full, other.to_string());
            }
        }
    }
}

fn load(source: &str, name: &str) -> Catalog {
    let mut catalog = Catalog::new();
    match source.parse::<toml::Table>() {
        Ok(table) => flatten("", &table, &mut catalog),
        Err(e) => tracing::error!(catalog = name, error = %e, "invalid message catalog"),
    }
    catalog
}

static EN: LazyLock<Catalog> = LazyLock::new(|| load(EN_CATALOG, "en"));
static PT: LazyLock<Catalog> = LazyLock::new(|| load(PT_CATALOG, "pt"));

static CURRENT: OnceLock<Lang> = OnceLock::new();

/// Supported languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lang {
    #[default]
    En,
    Pt,
}

impl Lang {
    /// Map a locale value such as `pt_BR.UTF-8` to a language.
    ///
    /// # Example
    ///
    /// ```
    /// use gitwit::i18n::Lang;
    ///
    /// assert_eq!(Lang::from_locale("pt_BR.UTF-8"), Lang::Pt);
    /// assert_eq!(Lang::from_locale("en_US"), Lang::En);
    /// assert_eq!(Lang::from_locale("C"), Lang::En);
    /// ```
    pub fn from_locale(value: &str) -> Lang {
        if value.trim().to_ascii_lowercase().starts_with("pt") {
            Lang::Pt
        } else {
            Lang::En
        }
    }

    /// Detect the language from the environment.
    pub fn detect() -> Lang {
        Self::detect_with(|name| std::env::var(name).ok())
    }

    /// Detect the language with a custom variable lookup.
    pub fn detect_with(lookup: impl Fn(&str) -> Option<String>) -> Lang {
        LANG_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map(|value| Lang::from_locale(&value))
            .unwrap_or_default()
    }

    /// The process-wide language, detected once.
    pub fn current() -> Lang {
        *CURRENT.get_or_init(Lang::detect)
    }

    /// Locale tag used for resources, e.g. `pt_BR`.
    pub fn locale_tag(self) -> &'static str {
        match self {
            Lang::En => "en_US",
            Lang::Pt => "pt_BR",
        }
    }

    /// Look up a message. Unknown keys resolve to themselves.
    pub fn text(self, key: &str) -> &str {
        let primary = match self {
            Lang::En => &*EN,
            Lang::Pt => &*PT,
        };
        primary
            .get(key)
            .or_else(|| EN.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Look up a message and fill its `{n}` placeholders.
    pub fn format<S: AsRef<str>>(self, key: &str, args: &[S]) -> String {
        fill(self.text(key), args)
    }
}

/// Replace `{0}`, `{1}`, ... with the given arguments.
pub fn fill<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    args.iter()
        .enumerate()
        .fold(template.to_string(), |text, (i, arg)| {
            text.replace(&format!("{{{i}}}"), arg.as_ref())
        })
}

/// Message in the current language.
pub fn t(key: &str) -> String {
    Lang::current().text(key).to_string()
}

/// Formatted message in the current language.
pub fn tf<S: AsRef<str>>(key: &str, args: &[S]) -> String {
    Lang::current().format(key, args)
}
