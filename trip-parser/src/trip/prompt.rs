//! Prompt template substitution
//!
//! The companion prompt template is opaque text: it is never parsed, only has its
//! placeholder start date swapped for a real one. Every occurrence of
//! `begins on <placeholder>`, optionally followed by ` (today's date)`, becomes
//! `begins on <Month D, YYYY> (today's date)`.

use chrono::NaiveDate;
use regex::{NoExpand, Regex};

/// Placeholder date the bundled template is written with.
pub const DEFAULT_PLACEHOLDER: &str = "July 17, 2025";

/// Long US style date, e.g. "October 19, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    text: String,
    placeholder: String,
}

impl PromptTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The template with its start date set to `date`.
    pub fn render(&self, date: NaiveDate) -> Result<String, regex::Error> {
        let pattern = format!(
            r"begins on {}( \(today's date\))?",
            regex::escape(&self.placeholder)
        );
        let replacement = format!("begins on {} (today's date)", format_long_date(date));
        let rendered = Regex::new(&pattern)?.replace_all(&self.text, NoExpand(&replacement));
        Ok(rendered.into_owned())
    }
}
