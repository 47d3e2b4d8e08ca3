//! Section title element
//!
//!     `#` characters, whitespace, the title text and an optional `{attrs}`. The level is the
//!     number of `#`. Without an explicit `#id` attribute the id is the slug of the raw title
//!     (see [slugify](crate::bmd::attributes::slugify)), so every heading can be linked to.

use super::super::super::attributes::AttrList;
use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTitle {
    pub level: usize,
    /// Inline-rendered title.
    pub title: String,
    pub attrs: AttrList,
    pub line: usize,
}

impl SectionTitle {
    pub fn new(level: usize, title: impl Into<String>, attrs: AttrList) -> Self {
        Self {
            level,
            title: title.into(),
            attrs,
            line: 1,
        }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.attrs.id.as_deref()
    }
}

impl AstNode for SectionTitle {
    fn node_type(&self) -> &'static str {
        "SectionTitle"
    }

    fn display_label(&self) -> String {
        format!("{} {}", "#".repeat(self.level), self.title)
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for SectionTitle {
    fn write_html(&self, out: &mut HtmlWriter) {
        out.at_line(self.line).write(&format!(
            "<H{level}{attrs}>{title}</H{level}>\n",
            level = self.level,
            attrs = self.attrs.to_html_attrs(),
            title = self.title,
        ));
    }
}

impl fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionTitle(H{}, '{}')", self.level, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_heading_with_id() {
        let mut attrs = AttrList::default();
        attrs.set_default_id("title");
        let title = SectionTitle::new(1, "Title", attrs);
        assert_eq!(title.to_html(), "<H1 id=\"title\">Title</H1>\n");
    }

    #[test]
    fn test_renders_classes_after_id() {
        let title = SectionTitle::new(3, "Deep", AttrList::parse("#d, .x,"));
        assert_eq!(
            title.to_html(),
            "<H3 id=\"d\" class=\"x\">Deep</H3>\n"
        );
    }
}
