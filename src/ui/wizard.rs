//! ui::wizard
//!
//! Interactive commit wizard.
//!
//! Asks for each part of a Conventional Commit in the order and with the
//! constraints configured in `.gitwit`, then validates the assembled
//! message before returning it.

use thiserror::Error;

use super::prompts::{PromptError, Prompter};
use crate::core::config::{Config, ConfigError, ScopeKind};
use crate::core::emoji::{process_emojis, replace_emoji_with_alias};
use crate::core::lint::{self, LintError};
use crate::core::message::CommitMessage;
use crate::i18n::{t, tf};

/// Errors from the commit wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error("no commit types configured: 'types.values' must not be empty")]
    TypesRequired,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Lint(#[from] LintError),
}

/// Builds a [`CommitMessage`] by asking questions.
pub struct CommitWizard<'a> {
    config: &'a Config,
}

/// Prompt label with the configured description and an optional marker.
fn compose(label: &str, description: Option<&str>, optional: bool) -> String {
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(process_emojis);
    match (description, optional) {
        (Some(desc), true) => format!("{label} ({desc}, {}):", t("wizard.optional")),
        (Some(desc), false) => format!("{label} ({desc}):"),
        (None, true) => format!("{label} ({}):", t("wizard.optional")),
        (None, false) => format!("{label}:"),
    }
}

/// Normalize an answer: blank becomes `None`, emoji become aliases.
fn answer(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| replace_emoji_with_alias(text).into_owned())
}

/// Type choices rendered as `<emoji key> <description>`, keys padded.
fn type_choices(config: &Config) -> Vec<String> {
    let rendered: Vec<(String, String)> = config
        .types
        .values
        .iter()
        .map(|(key, desc)| (process_emojis(key).into_owned(), process_emojis(desc).into_owned()))
        .collect();
    let width = rendered
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    rendered
        .into_iter()
        .map(|(key, desc)| format!("{key:<width$} {desc}"))
        .collect()
}

impl<'a> CommitWizard<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Run the wizard and return a validated message.
    pub fn run(&self, prompter: &mut dyn Prompter) -> Result<CommitMessage, WizardError> {
        let config = self.config;
        if config.types.values.is_empty() {
            return Err(WizardError::TypesRequired);
        }

        // type
        let choices = type_choices(config);
        let index = prompter.select(
            &compose(&t("wizard.type"), config.types.description.as_deref(), false),
            &choices,
            Some(0),
        )?;
        let r#type = config
            .types
            .values
            .get_index(index)
            .map(|(key, _)| replace_emoji_with_alias(key).into_owned())
            .unwrap_or_default();

        // scope
        let optional = !config.scope.required;
        let label = compose(&t("wizard.scope"), config.scope.description.as_deref(), optional);
        let scope = match config.scope.kind()? {
            ScopeKind::List => {
                if config.scope.values.is_empty() {
                    return Err(ConfigError::ScopeValuesRequired.into());
                }
                let mut options: Vec<String> = config
                    .scope
                    .values
                    .iter()
                    .map(|v| process_emojis(v).into_owned())
                    .collect();
                if optional {
                    options.push(t("wizard.skip"));
                }
                let index = prompter.select(&label, &options, None)?;
                config.scope.values.get(index).and_then(|v| answer(v))
            }
            ScopeKind::Text => answer(&prompter.input(&label)?),
        };

        // short description
        let short = answer(&prompter.input(&compose(
            &t("wizard.short_description"),
            config.short_description.description.as_deref(),
            false,
        ))?);

        // long description
        let long = if config.long_description.enabled {
            answer(&prompter.input(&compose(
                &t("wizard.long_description"),
                config.long_description.description.as_deref(),
                !config.long_description.required,
            ))?)
        } else {
            None
        };

        let mut message =
            CommitMessage::new(&r#type, scope.as_deref(), short.as_deref(), long.as_deref());

        // breaking changes
        if config.breaking_changes.enabled {
            let breaking = prompter.confirm(
                &compose(
                    &t("wizard.breaking_changes"),
                    Some(&t("wizard.breaking_changes_hint")),
                    false,
                ),
                false,
            )?;
            if breaking {
                let description = answer(&prompter.input(&compose(
                    &t("wizard.breaking_changes_description"),
                    config.breaking_changes.description.as_deref(),
                    false,
                ))?);
                message = message.with_breaking_change(description.as_deref());
            }
        }

        tracing::debug!(header = %message.format(), "wizard finished");
        lint::validate(&message, config)?;
        Ok(message)
    }
}

/// Summary line shown after the wizard, e.g. for `--debug`.
pub fn preview(message: &CommitMessage) -> String {
    tf("wizard.preview", &[process_emojis(&message.format()).into_owned()])
}
