//! Formatting utilities for CLI output

use colored::{ColoredString, Colorize};
use pollview_core::{PollDetailView, RenderedView};
use serde::Serialize;

/// Output format of the one-shot command
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    Text,
    /// Machine readable JSON
    Json,
}

/// Formats a rendered view as terminal text
#[derive(Debug, Clone, Copy)]
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    /// Format a rendering, one line per entry, no trailing newline
    pub fn format(&self, rendered: &RenderedView) -> String {
        match rendered {
            RenderedView::Loading { message } => self.paint(message, |s| s.yellow()),
            RenderedView::Error { message } => self.paint(message, |s| s.red().bold()),
            RenderedView::NotFound { message } => self.paint(message, |s| s.yellow().bold()),
            RenderedView::Poll {
                title,
                description,
                questions,
                empty_message,
            } => {
                let mut lines = vec![
                    self.paint(title, |s| s.bold().cyan()),
                    description.clone(),
                ];

                if let Some(message) = empty_message {
                    lines.push(String::new());
                    lines.push(self.paint(message, |s| s.dimmed()));
                }

                for question in questions {
                    lines.push(String::new());
                    lines.push(self.paint(&question.text, |s| s.bold()));
                    for (index, choice) in question.choices.iter().enumerate() {
                        let text = if choice.placeholder {
                            self.paint(&choice.text, |s| s.dimmed().italic())
                        } else {
                            choice.text.clone()
                        };
                        lines.push(format!("  {}. {}", index + 1, text));
                    }
                }

                lines.join("\n")
            }
        }
    }
}

/// JSON document printed by `--format json`
#[derive(Debug, Serialize)]
struct ViewSnapshot<'a> {
    poll_id: &'a str,
    #[serde(flatten)]
    state: &'a pollview_core::ViewState,
    rendered: RenderedView,
}

/// Formats a view as pretty JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, view: &PollDetailView) -> serde_json::Result<String> {
        let snapshot = ViewSnapshot {
            poll_id: view.poll_id().as_str(),
            state: view.state(),
            rendered: view.render(),
        };
        serde_json::to_string_pretty(&snapshot)
    }
}
