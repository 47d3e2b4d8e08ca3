//! The node union
//!
//!     Every block recognizer produces exactly one [`Node`]. Rendering dispatches on the
//!     variant; the set of variants is closed.

use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use super::{Code, List, Paragraph, SectionTitle, Table, TypedBlock};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Consumed source with no output: blank line runs and debug markers.
    Empty { line: usize },
    Code(Code),
    SectionTitle(SectionTitle),
    List(List),
    TypedBlock(TypedBlock),
    Table(Table),
    Paragraph(Paragraph),
}

impl Node {
    pub fn is_empty_node(&self) -> bool {
        matches!(self, Node::Empty { .. })
    }

    fn as_ast_node(&self) -> Option<&dyn AstNode> {
        match self {
            Node::Empty { .. } => None,
            Node::Code(node) => Some(node),
            Node::SectionTitle(node) => Some(node),
            Node::List(node) => Some(node),
            Node::TypedBlock(node) => Some(node),
            Node::Table(node) => Some(node),
            Node::Paragraph(node) => Some(node),
        }
    }
}

impl AstNode for Node {
    fn node_type(&self) -> &'static str {
        self.as_ast_node().map_or("Empty", |node| node.node_type())
    }

    fn display_label(&self) -> String {
        self.as_ast_node()
            .map(|node| node.display_label())
            .unwrap_or_default()
    }

    fn line(&self) -> usize {
        match self {
            Node::Empty { line } => *line,
            other => other.as_ast_node().map_or(0, |node| node.line()),
        }
    }
}

impl ToHtml for Node {
    fn write_html(&self, out: &mut HtmlWriter) {
        match self {
            Node::Empty { .. } => {}
            Node::Code(node) => node.write_html(out),
            Node::SectionTitle(node) => node.write_html(out),
            Node::List(node) => node.write_html(out),
            Node::TypedBlock(node) => node.write_html(out),
            Node::Table(node) => node.write_html(out),
            Node::Paragraph(node) => node.write_html(out),
        }
    }
}

impl From<Code> for Node {
    fn from(node: Code) -> Self {
        Node::Code(node)
    }
}

impl From<SectionTitle> for Node {
    fn from(node: SectionTitle) -> Self {
        Node::SectionTitle(node)
    }
}

impl From<List> for Node {
    fn from(node: List) -> Self {
        Node::List(node)
    }
}

impl From<TypedBlock> for Node {
    fn from(node: TypedBlock) -> Self {
        Node::TypedBlock(node)
    }
}

impl From<Table> for Node {
    fn from(node: Table) -> Self {
        Node::Table(node)
    }
}

impl From<Paragraph> for Node {
    fn from(node: Paragraph) -> Self {
        Node::Paragraph(node)
    }
}
