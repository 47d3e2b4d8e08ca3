//! Code element
//!
//!     A fenced block: an opening fence of three or more backticks with an optional language
//!     tag and an optional `{attrs}`, raw body lines, and a closing fence. The body is kept
//!     verbatim (no inline transform) and HTML-escaped on output so it displays literally.
//!     The language tag becomes the first class of the attribute list.
//!
//!     An unterminated fence runs to the end of its input.

use super::super::super::attributes::AttrList;
use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Code {
    pub code: String,
    pub attrs: AttrList,
    pub line: usize,
}

impl Code {
    pub fn new(code: impl Into<String>, attrs: AttrList) -> Self {
        Self {
            code: code.into(),
            attrs,
            line: 1,
        }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    /// The language tag, when the fence carried one.
    pub fn language(&self) -> Option<&str> {
        self.attrs.classes.first().map(String::as_str)
    }

    fn body_lines(&self) -> usize {
        self.code.matches('\n').count()
    }
}

impl AstNode for Code {
    fn node_type(&self) -> &'static str {
        "Code"
    }

    fn display_label(&self) -> String {
        match self.language() {
            Some(lang) => format!("{} ({} lines)", lang, self.body_lines()),
            None => format!("{} lines", self.body_lines()),
        }
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for Code {
    fn write_html(&self, out: &mut HtmlWriter) {
        out.at_line(self.line)
            .write(&format!("<pre><code{}>", self.attrs.to_html_attrs()));
        out.write_lines(&html_escape::encode_text(&self.code), self.line + 1);
        out.at_line(self.line + self.body_lines() + 1)
            .write("</code></pre>\n");
    }
}
