//! docs::site
//!
//! Site-wide documentation settings and locale resolution.

use indexmap::IndexMap;
use serde::Serialize;

use super::locale::{EditLink, Footer, LastUpdated, LocaleConfig, Logo, NavItem, SidebarSection};
use super::{LinkProblem, SiteError};

/// Key of the default locale, served without a URL prefix.
pub const ROOT_LOCALE: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
    /// Follow the reader's system preference.
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
}

/// Root configuration of the documentation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    /// URL path the site is served under, e.g. `/gitwit/`.
    pub base: String,
    pub appearance: Appearance,
    pub favicon: String,
    /// Search provider tag understood by the site tool, e.g. `local`.
    pub search_provider: String,
    pub social_links: Vec<SocialLink>,
    /// Locales by key. Must contain [`ROOT_LOCALE`].
    pub locales: IndexMap<String, LocaleConfig>,
}

/// Root metadata merged with one locale's settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSite {
    pub locale: String,
    pub title: String,
    pub base: String,
    pub appearance: Appearance,
    pub favicon: String,
    pub search_provider: String,
    pub social_links: Vec<SocialLink>,
    pub lang: String,
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
    pub translations: IndexMap<String, String>,
}

/// Whether `link` is a relative (`/...`) or absolute `http(s)://` URL.
///
/// # Example
///
/// ```
/// use gitwit::docs::is_well_formed_link;
///
/// assert!(is_well_formed_link("/guide/getting-started"));
/// assert!(is_well_formed_link("https://github.com/rafandoo/gitwit"));
/// assert!(!is_well_formed_link("guide"));
/// assert!(!is_well_formed_link("https://"));
/// ```
pub fn is_well_formed_link(link: &str) -> bool {
    if link.is_empty() || link.chars().any(char::is_whitespace) {
        return false;
    }
    if link.starts_with('/') {
        return !link.starts_with("//");
    }
    let rest = link
        .strip_prefix("https://")
        .or_else(|| link.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            !host.is_empty()
        }
        None => false,
    }
}

impl SiteConfig {
    pub fn locale(&self, key: &str) -> Option<&LocaleConfig> {
        self.locales.get(key)
    }

    pub fn root_locale(&self) -> Result<&LocaleConfig, SiteError> {
        self.locale(ROOT_LOCALE)
            .ok_or_else(|| SiteError::UnknownLocale(ROOT_LOCALE.to_string()))
    }

    /// Pick the locale serving a request path.
    ///
    /// A locale `pt` serves `/pt` and everything under `/pt/`, with or
    /// without the site base in front. Anything else is served by the
    /// root locale.
    pub fn locale_for_path(&self, path: &str) -> &str {
        let base = self.base.trim_end_matches('/');
        let path = if base.is_empty() {
            path
        } else {
            path.strip_prefix(base)
                .filter(|rest| rest.is_empty() || rest.starts_with('/'))
                .unwrap_or(path)
        };
        let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();

        self.locales
            .get_key_value(first)
            .map(|(key, _)| key.as_str())
            .filter(|key| *key != ROOT_LOCALE)
            .unwrap_or(ROOT_LOCALE)
    }

    /// Merged view of the site for one locale.
    pub fn resolved(&self, key: &str) -> Result<ResolvedSite, SiteError> {
        let locale = self
            .locale(key)
            .ok_or_else(|| SiteError::UnknownLocale(key.to_string()))?;
        let root = self.root_locale()?;

        let mut translations = root.translations.clone();
        translations.extend(locale.translations.clone());

        Ok(ResolvedSite {
            locale: key.to_string(),
            title: self.title.clone(),
            base: self.base.clone(),
            appearance: self.appearance,
            favicon: self.favicon.clone(),
            search_provider: self.search_provider.clone(),
            social_links: self.social_links.clone(),
            lang: locale.lang.clone(),
            label: locale.label.clone(),
            description: locale.description.clone(),
            logo: locale.logo.clone().or_else(|| root.logo.clone()),
            nav: locale.nav.clone(),
            sidebar: locale.sidebar.clone(),
            footer: locale.footer.clone(),
            edit_link: locale.edit_link.clone().or_else(|| root.edit_link.clone()),
            last_updated: locale
                .last_updated
                .clone()
                .or_else(|| root.last_updated.clone()),
            translations,
        })
    }

    /// Check the whole configuration, reporting every problem found.
    pub fn validate(&self) -> Result<(), SiteError> {
        let mut problems = Vec::new();
        let mut check = |locale: &str, link: &str| {
            if !is_well_formed_link(link) {
                problems.push(LinkProblem {
                    locale: locale.to_string(),
                    link: link.to_string(),
                });
            }
        };

        check(ROOT_LOCALE, &self.base);
        check(ROOT_LOCALE, &self.favicon);
        for social in &self.social_links {
            check(ROOT_LOCALE, &social.link);
        }
        for (key, locale) in &self.locales {
            for link in locale.links() {
                check(key, &link);
            }
        }

        if !self.locales.contains_key(ROOT_LOCALE) {
            return Err(SiteError::UnknownLocale(ROOT_LOCALE.to_string()));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(SiteError::InvalidLinks(problems))
        }
    }
}
