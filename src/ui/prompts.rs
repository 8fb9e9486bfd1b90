//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts go through the [`Prompter`] trait so the commit wizard can be
//! driven by a terminal ([`TermPrompter`]) or by a fixed script of answers
//! ([`ScriptedPrompter`]). In non-interactive mode the terminal prompter
//! fails with [`PromptError::NotInteractive`] instead of blocking.

use std::collections::VecDeque;
use std::io;

use console::{Style, Term};
use thiserror::Error;

use crate::i18n::t;

/// Invalid answers tolerated before a prompt gives up.
const MAX_ATTEMPTS: usize = 3;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("unexpected prompt '{prompt}': scripted answer was {answer}")]
    UnexpectedAnswer { prompt: String, answer: String },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Source of answers for the commit wizard.
pub trait Prompter {
    /// Choose one of `options`, returning its index.
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, PromptError>;

    /// Free text input. Surrounding whitespace is trimmed.
    fn input(&mut self, message: &str) -> Result<String, PromptError>;

    /// Yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;
}

/// Prompter reading from the controlling terminal.
pub struct TermPrompter {
    term: Term,
    interactive: bool,
}

impl TermPrompter {
    pub fn new(interactive: bool) -> Self {
        Self {
            term: Term::stderr(),
            interactive,
        }
    }

    fn ensure_interactive(&self) -> Result<(), PromptError> {
        if self.interactive {
            Ok(())
        } else {
            Err(PromptError::NotInteractive)
        }
    }

    fn ask(&self, message: &str) -> Result<String, PromptError> {
        let question = Style::new().cyan().bold().apply_to("?");
        self.term
            .write_str(&format!("{question} {} ", Style::new().bold().apply_to(message)))?;
        Ok(self.term.read_line()?.trim().to_string())
    }
}

impl Prompter for TermPrompter {
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: Option<usize>,
    ) -> Result<usize, PromptError> {
        self.ensure_interactive()?;
        if options.is_empty() {
            return Err(PromptError::Cancelled);
        }

        self.term.write_line(&Style::new().bold().apply_to(message).to_string())?;
        let width = options.len().to_string().len();
        for (i, option) in options.iter().enumerate() {
            let marker = if Some(i) == default { ">" } else { " " };
            self.term
                .write_line(&format!("{marker} {:>width$}) {option}", i + 1))?;
        }

        let hint = match default {
            Some(i) => format!("{} [{}]", t("prompt.choose"), i + 1),
            None => t("prompt.choose"),
        };
        for _ in 0..MAX_ATTEMPTS {
            let answer = self.ask(&hint)?;
            if answer.is_empty() {
                if let Some(i) = default {
                    return Ok(i);
                }
                continue;
            }
            match answer.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => {
                    self.term.write_line(
                        &Style::new()
                            .yellow()
                            .apply_to(t("prompt.invalid_choice"))
                            .to_string(),
                    )?;
                }
            }
        }
        Err(PromptError::Cancelled)
    }

    fn input(&mut self, message: &str) -> Result<String, PromptError> {
        self.ensure_interactive()?;
        self.ask(message)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        self.ensure_interactive()?;
        let suffix = if default { "[Y/n]" } else { "[y/N]" };
        for _ in 0..MAX_ATTEMPTS {
            let answer = self.ask(&format!("{message} {suffix}"))?.to_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" | "s" | "sim" => return Ok(true),
                "n" | "no" | "nao" | "não" => return Ok(false),
                _ => continue,
            }
        }
        Err(PromptError::Cancelled)
    }
}

/// A recorded answer for [`ScriptedPrompter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Select(usize),
    Input(String),
    Confirm(bool),
}

/// Prompter that replays a fixed list of answers.
///
/// Running out of answers fails with [`PromptError::NotInteractive`], and
/// an answer of the wrong kind with [`PromptError::UnexpectedAnswer`].
/// Every question asked is recorded in [`ScriptedPrompter::asked`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<Answer, PromptError> {
        self.asked.push(message.to_string());
        self.answers.pop_front().ok_or(PromptError::NotInteractive)
    }

    fn unexpected(message: &str, answer: Answer) -> PromptError {
        PromptError::UnexpectedAnswer {
            prompt: message.to_string(),
            answer: format!("{answer:?}"),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        _default: Option<usize>,
    ) -> Result<usize, PromptError> {
        match self.next(message)? {
            Answer::Select(i) if i < options.len() => Ok(i),
            other => Err(Self::unexpected(message, other)),
        }
    }

    fn input(&mut self, message: &str) -> Result<String, PromptError> {
        match self.next(message)? {
            Answer::Input(text) => Ok(text.trim().to_string()),
            other => Err(Self::unexpected(message, other)),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool, PromptError> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(Self::unexpected(message, other)),
        }
    }
}
