//! docs::locale
//!
//! Per-language documentation settings.

use indexmap::IndexMap;
use serde::Serialize;

/// A navigation bar entry: a link or a dropdown of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    Link { text: String, link: String },
    Menu { text: String, items: Vec<NavLink> },
}

/// A leaf (label, link) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn link(text: &str, link: &str) -> Self {
        NavItem::Link {
            text: text.into(),
            link: link.into(),
        }
    }

    pub fn menu(text: &str, items: &[(&str, &str)]) -> Self {
        NavItem::Menu {
            text: text.into(),
            items: items.iter().map(|(t, l)| NavLink::new(t, l)).collect(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            NavItem::Link { text, .. } | NavItem::Menu { text, .. } => text,
        }
    }

    /// Every link reachable from this entry.
    pub fn links(&self) -> Vec<&str> {
        match self {
            NavItem::Link { link, .. } => vec![link.as_str()],
            NavItem::Menu { items, .. } => items.iter().map(|i| i.link.as_str()).collect(),
        }
    }
}

impl NavLink {
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// A titled group of sidebar links sharing a base path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    pub text: String,
    pub base: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub collapsed: bool,
    pub items: Vec<NavLink>,
}

impl SidebarSection {
    pub fn new(text: &str, base: &str, items: &[(&str, &str)]) -> Self {
        Self {
            text: text.into(),
            base: base.into(),
            collapsed: false,
            items: items.iter().map(|(t, l)| NavLink::new(t, l)).collect(),
        }
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    /// Full links of the section: the base path joined with each item.
    ///
    /// # Example
    ///
    /// ```
    /// use gitwit::docs::SidebarSection;
    ///
    /// let section = SidebarSection::new("Guide", "/guide", &[("Start", "/getting-started")]);
    /// assert_eq!(section.links(), vec!["/guide/getting-started"]);
    /// ```
    pub fn links(&self) -> Vec<String> {
        let base = self.base.trim_end_matches('/');
        self.items
            .iter()
            .map(|item| {
                let link = item.link.trim_start_matches('/');
                if link.is_empty() {
                    base.to_string()
                } else {
                    format!("{base}/{link}")
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub message: String,
    pub copyright: String,
}

/// "Edit this page" link; `:path` is replaced with the page path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditLink {
    pub pattern: String,
    pub text: String,
}

impl EditLink {
    pub fn url_for(&self, page: &str) -> String {
        self.pattern.replace(":path", page.trim_start_matches('/'))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub src: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LastUpdated {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub date_style: String,
    pub time_style: String,
}

/// Settings for one language of the site.
///
/// Optional parts left empty are taken from the root locale when the site
/// is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleConfig {
    /// BCP 47 tag, e.g. `pt-BR`.
    pub lang: String,
    /// Name shown in the language menu.
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    pub nav: Vec<NavItem>,
    pub sidebar: Vec<SidebarSection>,
    pub footer: Footer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdated>,
    /// UI label key (dotted, e.g. `search.modal.noResultsText`) to text.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub translations: IndexMap<String, String>,
}

impl LocaleConfig {
    /// Every link the locale refers to, with sidebar links fully joined.
    pub fn links(&self) -> Vec<String> {
        let mut links: Vec<String> = self
            .nav
            .iter()
            .flat_map(|item| item.links())
            .map(str::to_string)
            .collect();
        for section in &self.sidebar {
            links.push(section.base.clone());
            links.extend(section.links());
        }
        if let Some(logo) = &self.logo {
            links.push(logo.src.clone());
        }
        if let Some(edit) = &self.edit_link {
            links.push(edit.pattern.clone());
        }
        links
    }

    pub fn translation(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }
}
