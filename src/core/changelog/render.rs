//! core::changelog::render
//!
//! Rendering a [`Changelog`] into text.

use super::Changelog;
use crate::core::emoji::process_emojis;
use crate::i18n::Lang;

/// Turns a changelog into its textual form.
pub trait Renderer {
    /// Render the changelog. When `append` is set the document title is
    /// omitted, since the output goes below an existing changelog.
    fn render(&self, changelog: &Changelog, append: bool) -> String;
}

/// Markdown output with ATX headings and `-` bullet lists.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    other_title: String,
}

impl MarkdownRenderer {
    pub fn new(lang: Lang) -> Self {
        Self {
            other_title: lang.text("changelog.other").to_string(),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(Lang::current())
    }
}

fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text.trim())
}

fn bullets(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Renderer for MarkdownRenderer {
    fn render(&self, changelog: &Changelog, append: bool) -> String {
        let mut blocks = Vec::new();

        if let Some(title) = changelog.title.as_deref().filter(|t| !t.trim().is_empty()) {
            if !append {
                blocks.push(heading(1, &process_emojis(title)));
            }
        }

        if let Some(subtitle) = changelog.subtitle.as_deref().filter(|s| !s.trim().is_empty()) {
            blocks.push(heading(2, &process_emojis(subtitle)));
        }

        if !changelog.breaking_changes.is_empty() {
            blocks.push(heading(3, "Breaking Changes"));
            blocks.push(bullets(&changelog.breaking_changes));
        }

        for (title, items) in &changelog.sections {
            blocks.push(heading(3, &process_emojis(title)));
            blocks.push(bullets(items));
        }

        if !changelog.other_changes.is_empty() {
            blocks.push(heading(3, &self.other_title));
            blocks.push(bullets(&changelog.other_changes));
        }

        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn full() -> Changelog {
        let mut sections = IndexMap::new();
        sections.insert(
            "Features".to_string(),
            vec!["New login flow".to_string(), "Dark mode".to_string()],
        );
        sections.insert("Fixes".to_string(), vec!["Crash on startup".to_string()]);
        Changelog {
            title: Some(":rocket: Release v1.0.0".to_string()),
            subtitle: Some("Highlights".to_string()),
            breaking_changes: vec!["API breaking change".to_string()],
            sections,
            other_changes: vec!["Minor refactoring".to_string()],
        }
    }

    #[test]
    fn renders_every_block() {
        let out = MarkdownRenderer::new(Lang::En).render(&full(), false);
        assert_eq!(
            out,
            "# 🚀 Release v1.0.0\n\n\
             ## Highlights\n\n\
             ### Breaking Changes\n\n\
             - API breaking change\n\n\
             ### Features\n\n\
             - New login flow\n\
             - Dark mode\n\n\
             ### Fixes\n\n\
             - Crash on startup\n\n\
             ### Other\n\n\
             - Minor refactoring\n"
        );
    }

    #[test]
    fn append_skips_title() {
        let out = MarkdownRenderer::new(Lang::En).render(&full(), true);
        assert!(!out.contains("# 🚀"));
        assert!(out.starts_with("## Highlights"));
    }

    #[test]
    fn blank_title_renders_only_subtitle() {
        let changelog = Changelog {
            title: Some(" ".to_string()),
            subtitle: Some("Only subtitle".to_string()),
            ..Default::default()
        };
        let out = MarkdownRenderer::new(Lang::En).render(&changelog, false);
        assert_eq!(out, "## Only subtitle\n");
    }

    #[test]
    fn empty_blocks_are_skipped() {
        let changelog = Changelog {
            title: Some("Release".to_string()),
            ..Default::default()
        };
        let out = MarkdownRenderer::new(Lang::En).render(&changelog, false);
        assert!(out.contains("# Release"));
        assert!(!out.contains("Breaking Changes"));
        assert!(!out.contains("Other"));
    }

    #[test]
    fn other_heading_is_localized() {
        let changelog = Changelog {
            other_changes: vec!["x".to_string()],
            ..Default::default()
        };
        let out = MarkdownRenderer::new(Lang::Pt).render(&changelog, false);
        assert!(out.contains("### Outros"));
    }
}
