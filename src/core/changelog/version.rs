//! core::changelog::version
//!
//! Subtitle resolution and semantic version bumping.
//!
//! # Resolution order
//!
//! 1. An explicit subtitle is used as-is.
//! 2. Otherwise the base version is the `--for-tag` tag or the latest tag.
//! 3. Without a base version, a bump yields the first version of its kind
//!    (`v1.0.0`, `v0.1.0`, `v0.0.1`) and no bump yields no subtitle.
//! 4. With a base version and a bump, the version is parsed and bumped;
//!    pre-release and build metadata are dropped. A tag that is not a
//!    semantic version is used unchanged.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::{Bump, ChangelogOptions, TagSelection};

static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<prefix>v?)(?P<major>\d+)\.(?P<minor>\d+)\.(?P<patch>\d+)(?:-(?P<pre>[0-9A-Za-z.\-]+))?(?:\+(?P<build>[0-9A-Za-z.\-]+))?$",
    )
    .expect("semver pattern is valid")
});

/// A parsed semantic version, keeping the optional `v` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemVer {
    pub prefix: String,
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<String>,
    pub build: Option<String>,
}

impl SemVer {
    /// Parse `v?MAJOR.MINOR.PATCH[-pre][+build]`.
    pub fn parse(version: &str) -> Option<SemVer> {
        let caps = SEMVER.captures(version.trim())?;
        Some(SemVer {
            prefix: caps["prefix"].to_string(),
            major: caps["major"].parse().ok()?,
            minor: caps["minor"].parse().ok()?,
            patch: caps["patch"].parse().ok()?,
            pre_release: caps.name("pre").map(|m| m.as_str().to_string()),
            build: caps.name("build").map(|m| m.as_str().to_string()),
        })
    }

    /// Bump one component, resetting the lower ones and dropping metadata.
    pub fn bump(&self, bump: Bump) -> SemVer {
        let (major, minor, patch) = match bump {
            Bump::Major => (self.major + 1, 0, 0),
            Bump::Minor => (self.major, self.minor + 1, 0),
            Bump::Patch => (self.major, self.minor, self.patch + 1),
        };
        SemVer {
            prefix: self.prefix.clone(),
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}.{}", self.prefix, self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{pre}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

/// First version for a bump when the repository has no tag.
pub fn initial_version(bump: Bump) -> &'static str {
    match bump {
        Bump::Major => "v1.0.0",
        Bump::Minor => "v0.1.0",
        Bump::Patch => "v0.0.1",
    }
}

/// Outcome of subtitle resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Subtitle {
    pub text: Option<String>,
    /// Set when a bump was requested on a tag that is not a semantic version.
    pub unparsed_version: Option<String>,
}

/// Resolve the changelog subtitle.
///
/// `latest_tag` is only consulted when the options do not name a tag.
pub fn resolve_subtitle(options: &ChangelogOptions, latest_tag: Option<&str>) -> Subtitle {
    if options.no_subtitle {
        return Subtitle::default();
    }

    if let Some(subtitle) = options.subtitle.as_deref().filter(|s| !s.trim().is_empty()) {
        return Subtitle {
            text: Some(subtitle.to_string()),
            unparsed_version: None,
        };
    }

    let base = match &options.tag {
        TagSelection::For(tag) if !tag.trim().is_empty() => Some(tag.as_str()),
        _ => latest_tag,
    };

    match (base, options.bump) {
        (None, Some(bump)) => Subtitle {
            text: Some(initial_version(bump).to_string()),
            unparsed_version: None,
        },
        (None, None) => Subtitle::default(),
        (Some(version), None) => Subtitle {
            text: Some(version.to_string()),
            unparsed_version: None,
        },
        (Some(version), Some(bump)) => match SemVer::parse(version) {
            Some(semver) => Subtitle {
                text: Some(semver.bump(bump).to_string()),
                unparsed_version: None,
            },
            None => Subtitle {
                text: Some(version.to_string()),
                unparsed_version: Some(version.to_string()),
            },
        },
    }
}
