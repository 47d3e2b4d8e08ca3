//! AST snapshot, a normalized view of the document tree
//!
//!     Tree formatters (treeviz, tests) consume an [`AstSnapshot`] instead of walking the
//!     node types themselves. The snapshot has one entry per node with its type name, a short
//!     label, its source line, the node's attributes flattened into a map, and its children.
//!
//!     Tables expand into sections, rows and cells; lists into items; items and typed blocks
//!     into their body nodes. Empty nodes (blank lines, markers) are left out unless asked for.

use super::elements::{Item, Node, Table, Tree};
use super::traits::AstNode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of one node and its subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstSnapshot {
    pub node_type: String,
    pub label: String,
    /// 1-based source line, 0 for nodes without one (the document, table cells).
    pub line: usize,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<AstSnapshot>,
}

impl AstSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>, line: usize) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            line,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    pub fn with_child(mut self, child: AstSnapshot) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<AstSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Snapshot of a whole document, rooted at a synthetic "Document" entry.
pub fn snapshot_from_tree(tree: &Tree) -> AstSnapshot {
    snapshot_from_tree_with_options(tree, false)
}

/// Like [`snapshot_from_tree`]; `include_empty` keeps blank line and marker nodes.
pub fn snapshot_from_tree_with_options(tree: &Tree, include_empty: bool) -> AstSnapshot {
    let children = children_of(tree, include_empty);
    AstSnapshot::new(
        "Document",
        format!("Document ({} blocks)", children.len()),
        0,
    )
    .with_children(children)
}

pub fn snapshot_from_node(node: &Node, include_empty: bool) -> AstSnapshot {
    let base = AstSnapshot::new(node.node_type(), node.display_label(), node.line());
    match node {
        Node::Empty { .. } | Node::Paragraph(_) => base,
        Node::Code(code) => base.with_attributes(code.attrs.to_map()),
        Node::SectionTitle(title) => base.with_attributes(title.attrs.to_map()),
        Node::List(list) => base.with_children(
            list.items
                .iter()
                .map(|item| snapshot_item(item, include_empty))
                .collect(),
        ),
        Node::TypedBlock(block) => base
            .with_attributes(block.attrs.to_map())
            .with_children(children_of(&block.body, include_empty)),
        Node::Table(table) => base.with_children(table_children(table)),
    }
}

fn snapshot_item(item: &Item, include_empty: bool) -> AstSnapshot {
    AstSnapshot::new(item.node_type(), item.display_label(), item.line())
        .with_children(children_of(&item.body, include_empty))
}

fn table_children(table: &Table) -> Vec<AstSnapshot> {
    table
        .sections
        .iter()
        .map(|section| {
            let kind = format!("{:?}", section.kind).to_lowercase();
            let line = section.rows.first().map_or(table.line, |row| row.line);
            let rows = section
                .rows
                .iter()
                .map(|row| {
                    let cells = row
                        .cells
                        .iter()
                        .map(|cell| AstSnapshot::new("TableCell", cell.content.trim(), row.line))
                        .collect();
                    AstSnapshot::new("TableRow", format!("{} cells", row.cells.len()), row.line)
                        .with_children(cells)
                })
                .collect();
            AstSnapshot::new("TableSection", kind, line).with_children(rows)
        })
        .collect()
}

fn children_of(tree: &Tree, include_empty: bool) -> Vec<AstSnapshot> {
    tree.iter()
        .filter(|node| include_empty || !node.is_empty_node())
        .map(|node| snapshot_from_node(node, include_empty))
        .collect()
}
