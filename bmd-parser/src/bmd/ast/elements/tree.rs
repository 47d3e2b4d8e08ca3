//! Document tree
//!
//!     An ordered sequence of nodes, in source order. The whole document is a tree, and so is
//!     the body of every list item and typed block. A tree renders as the concatenation of its
//!     children.

use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::node::Node;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Children that produce output, skipping blank line and marker nodes.
    pub fn visible(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| !node.is_empty_node())
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}

impl From<Vec<Node>> for Tree {
    fn from(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl ToHtml for Tree {
    fn write_html(&self, out: &mut HtmlWriter) {
        for node in &self.nodes {
            node.write_html(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::paragraph::Paragraph;
    use super::*;

    #[test]
    fn test_tree_concatenates_children() {
        let tree = Tree::from(vec![
            Node::Paragraph(Paragraph::new("a")),
            Node::Empty { line: 2 },
            Node::Paragraph(Paragraph::new("b")),
        ]);
        assert_eq!(tree.to_html(), "<p>a</p>\n<p>b</p>\n");
        assert_eq!(tree.visible().count(), 2);
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        assert_eq!(Tree::new().to_html(), "");
    }
}
