//! List element
//!
//!     A list is one or more consecutive items sharing a marker family:
//!
//!         Numbered:   digits or one or two letters, then one of `. - / )`     1. a)  iv/
//!         Bulleted:   one of `. - + *`
//!
//!     Nothing has to follow the marker. The text after it, when it starts with a blank, and
//!     every following line that is indented or blank form the item body, dedented
//!     by one level and parsed again with the full block chain. Items therefore nest any block:
//!     paragraphs, code, typed blocks, further lists.
//!
//!     An item renders as `<li mark="{marker}">` followed by its body. For numbered items the
//!     marker is the number or letters without the punctuation.

use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use super::tree::Tree;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Numbered,
    Bulleted,
}

impl ListKind {
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Numbered => "ol",
            ListKind::Bulleted => "ul",
        }
    }
}

/// A list item: its marker and nested content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub marker: String,
    pub body: Tree,
    pub line: usize,
}

impl Item {
    pub fn new(marker: impl Into<String>, body: Tree) -> Self {
        Self {
            marker: marker.into(),
            body,
            line: 1,
        }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

impl AstNode for Item {
    fn node_type(&self) -> &'static str {
        "Item"
    }

    fn display_label(&self) -> String {
        format!("{} ({} node(s))", self.marker, self.body.len())
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for Item {
    fn write_html(&self, out: &mut HtmlWriter) {
        out.at_line(self.line).write("<li mark=\"");
        out.write(&html_escape::encode_double_quoted_attribute(&self.marker));
        out.write("\">");
        self.body.write_html(out);
        out.write("</li>\n");
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<Item>,
    pub line: usize,
}

impl List {
    pub fn new(kind: ListKind, items: Vec<Item>) -> Self {
        let line = items.first().map(|item| item.line).unwrap_or(1);
        Self { kind, items, line }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl AstNode for List {
    fn node_type(&self) -> &'static str {
        "List"
    }

    fn display_label(&self) -> String {
        let kind = match self.kind {
            ListKind::Numbered => "numbered",
            ListKind::Bulleted => "bulleted",
        };
        format!("{} list ({} items)", kind, self.items.len())
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for List {
    fn write_html(&self, out: &mut HtmlWriter) {
        out.at_line(self.line)
            .write(&format!("<{}>\n", self.kind.tag()));
        for item in &self.items {
            item.write_html(out);
        }
        out.write(&format!("</{}>\n", self.kind.tag()));
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({:?}, {} items)", self.kind, self.items.len())
    }
}
