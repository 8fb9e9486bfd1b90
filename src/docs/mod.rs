//! docs
//!
//! Configuration of the GitWit documentation site.
//!
//! # Overview
//!
//! The documentation is built by an external static site generator. This
//! module only holds its parameters as typed, immutable data: a root
//! [`SiteConfig`] plus one [`LocaleConfig`] per language. The generator
//! merges the root with a locale's overrides, choosing the locale by URL
//! prefix; [`SiteConfig::locale_for_path`] and [`SiteConfig::resolved`]
//! make that merge explicit so it can be inspected and tested.
//!
//! The hidden `site-config` command prints the data as JSON.

mod builtin;
mod locale;
mod site;

use std::fmt;

use thiserror::Error;

pub use locale::{EditLink, Footer, LastUpdated, LocaleConfig, Logo, NavItem, NavLink, SidebarSection};
pub use site::{is_well_formed_link, Appearance, ResolvedSite, SiteConfig, SocialLink, ROOT_LOCALE};

/// A link that is neither relative (`/...`) nor absolute `http(s)://`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkProblem {
    pub locale: String,
    pub link: String,
}

impl fmt::Display for LinkProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.locale, self.link)
    }
}

/// Errors from the site configuration.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("malformed links: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    InvalidLinks(Vec<LinkProblem>),
}
