//! core::config::schema
//!
//! Configuration schema types for the `.gitwit` YAML file.
//!
//! # Example
//!
//! ```yaml
//! types:
//!   description: Select the type of change
//!   values:
//!     feat: A new feature
//!     fix: A bug fix
//! scope:
//!   required: false
//!   type: list
//!   values: [core, cli]
//! shortDescription:
//!   minLength: 1
//!   maxLength: 72
//! changelog:
//!   title: Changelog
//!   types:
//!     feat: Features
//!     fix: Bug Fixes
//! ```
//!
//! # Validation
//!
//! Every section has serde defaults, so a file only needs the keys it
//! changes. Unknown keys are rejected. Cross-field rules (non-empty types,
//! scope kind, length ranges) are checked by [`Config::validate`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Root of the `.gitwit` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub types: TypesConfig,
    pub scope: ScopeConfig,
    pub short_description: ShortDescriptionConfig,
    pub long_description: LongDescriptionConfig,
    pub breaking_changes: BreakingChangesConfig,
    pub changelog: ChangelogConfig,
    pub lint: LintConfig,
}

impl Config {
    /// Validate cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule that does not hold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.types.values.is_empty() {
            return Err(ConfigError::TypesRequired);
        }

        if self.scope.kind()? == ScopeKind::List && self.scope.values.is_empty() {
            return Err(ConfigError::ScopeValuesRequired);
        }

        if self.short_description.min_length > self.short_description.max_length {
            return Err(ConfigError::InvalidLengthRange {
                field: "shortDescription",
                min: self.short_description.min_length,
                max: self.short_description.max_length,
            });
        }

        if self.long_description.min_length > self.long_description.max_length {
            return Err(ConfigError::InvalidLengthRange {
                field: "longDescription",
                min: self.long_description.min_length,
                max: self.long_description.max_length,
            });
        }

        Ok(())
    }
}

/// Allowed commit types.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TypesConfig {
    /// Hint shown next to the wizard prompt.
    pub description: Option<String>,
    /// Type identifier to description, in prompt order.
    pub values: IndexMap<String, String>,
}

/// How the scope is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    /// Free-form text input.
    Text,
    /// Choice among `scope.values`.
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    pub description: Option<String>,
    pub required: bool,
    /// `text` or `list`, case-insensitive.
    #[serde(rename = "type")]
    pub kind: String,
    pub values: Vec<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            description: None,
            required: false,
            kind: "text".to_string(),
            values: Vec::new(),
        }
    }
}

impl ScopeConfig {
    /// Parse the configured scope kind.
    pub fn kind(&self) -> Result<ScopeKind, ConfigError> {
        match self.kind.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ScopeKind::Text),
            "list" => Ok(ScopeKind::List),
            _ => Err(ConfigError::InvalidScopeType(self.kind.clone())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ShortDescriptionConfig {
    pub description: Option<String>,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for ShortDescriptionConfig {
    fn default() -> Self {
        Self {
            description: None,
            min_length: 1,
            max_length: 72,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LongDescriptionConfig {
    /// Ask for a long description in the wizard.
    pub enabled: bool,
    pub description: Option<String>,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for LongDescriptionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            description: None,
            required: false,
            min_length: 0,
            max_length: 100,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BreakingChangesConfig {
    /// Ask whether the commit is breaking in the wizard.
    pub enabled: bool,
    pub description: Option<String>,
}

/// Changelog generation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangelogConfig {
    pub title: String,
    /// Commit type to section title, in section order.
    pub types: IndexMap<String, String>,
    pub show_other_types: bool,
    pub show_breaking_changes: bool,
    /// Regular expressions matched against full commit messages.
    pub ignored: Vec<String>,
    /// Output file or directory, relative to the repository root.
    pub filepath: Option<String>,
    pub format: ChangelogFormat,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            title: "Changelog".to_string(),
            types: IndexMap::new(),
            show_other_types: true,
            show_breaking_changes: false,
            ignored: Vec::new(),
            filepath: None,
            format: ChangelogFormat::default(),
        }
    }
}

/// Entry templates per changelog block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangelogFormat {
    pub section_template: Option<String>,
    pub breaking_changes_template: Option<String>,
    pub other_types_template: Option<String>,
    pub default_template: Option<String>,
}

/// Template used when no block-specific template is configured.
pub const DEFAULT_ENTRY_TEMPLATE: &str = "{scope}: {description} ({shortHash})";

impl Default for ChangelogFormat {
    fn default() -> Self {
        Self {
            section_template: None,
            breaking_changes_template: None,
            other_types_template: None,
            default_template: Some(DEFAULT_ENTRY_TEMPLATE.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Regular expressions; matching commits are skipped by `lint`.
    pub ignored: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Config {
        let mut config = Config::default();
        config
            .types
            .values
            .insert("feat".to_string(), "A new feature".to_string());
        config
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.scope.kind, "text");
        assert_eq!(config.short_description.min_length, 1);
        assert_eq!(config.short_description.max_length, 72);
        assert_eq!(config.long_description.max_length, 100);
        assert_eq!(config.changelog.title, "Changelog");
        assert!(config.changelog.show_other_types);
        assert!(!config.changelog.show_breaking_changes);
        assert_eq!(
            config.changelog.format.default_template.as_deref(),
            Some(DEFAULT_ENTRY_TEMPLATE)
        );
    }

    #[test]
    fn empty_types_rejected() {
        assert!(matches!(
            Config::default().validate(),
            Err(ConfigError::TypesRequired)
        ));
    }

    #[test]
    fn scope_kind_is_case_insensitive() {
        let mut scope = ScopeConfig::default();
        scope.kind = "LIST".to_string();
        assert_eq!(scope.kind().unwrap(), ScopeKind::List);
    }

    #[test]
    fn invalid_scope_kind_rejected() {
        let mut config = minimal();
        config.scope.kind = "dropdown".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidScopeType(kind)) if kind == "dropdown"
        ));
    }

    #[test]
    fn list_scope_requires_values() {
        let mut config = minimal();
        config.scope.kind = "list".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ScopeValuesRequired)
        ));

        config.scope.values = vec!["core".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn inverted_length_range_rejected() {
        let mut config = minimal();
        config.short_description.min_length = 80;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLengthRange { field: "shortDescription", .. })
        ));
    }

    #[test]
    fn camel_case_keys_parse() {
        let yaml = r#"
types:
  values:
    feat: Feature
shortDescription:
  maxLength: 50
changelog:
  showBreakingChanges: true
  format:
    sectionTemplate: "- {description}"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.short_description.max_length, 50);
        assert_eq!(config.short_description.min_length, 1);
        assert!(config.changelog.show_breaking_changes);
        assert_eq!(
            config.changelog.format.section_template.as_deref(),
            Some("- {description}")
        );
    }

    #[test]
    fn type_order_is_preserved() {
        let yaml = "types:\n  values:\n    zeta: z\n    alpha: a\n    mid: m\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<_> = config.types.values.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn unknown_keys_rejected() {
        let yaml = "types:\n  values:\n    feat: f\nunknown: 1\n";
        assert!(serde_yaml::from_str::<Config>(yaml).is_err());
    }
}
