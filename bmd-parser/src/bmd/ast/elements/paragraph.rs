//! Paragraph element
//!
//!     A paragraph is the catch-all block: consecutive lines that do not start with a space, a
//!     tab or a newline. The lines are joined and inline-transformed as one text, so a span may
//!     open on one line and close on the next only if no newline lies between its delimiters
//!     (inline spans never cross lines).
//!
//!     Renders as `<p>{text}</p>`, the text keeping its inner newlines.

use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    /// Inline-rendered text, without the final newline.
    pub content: String,
    pub line: usize,
}

impl Paragraph {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            line: 1,
        }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn line_count(&self) -> usize {
        self.content.lines().count().max(1)
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        let first = self.content.lines().next().unwrap_or_default();
        if first.chars().count() > 50 {
            format!("{}…", first.chars().take(50).collect::<String>())
        } else {
            first.to_string()
        }
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for Paragraph {
    fn write_html(&self, out: &mut HtmlWriter) {
        out.write_lines(&format!("<p>{}</p>\n", self.content), self.line);
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} line(s))", self.line_count())
    }
}
