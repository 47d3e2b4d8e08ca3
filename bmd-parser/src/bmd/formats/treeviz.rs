//! Treeviz formatter for the document tree
//!
//! Treeviz prints one line per node, which makes the structure of a document quick to scan.
//! Nesting is drawn with box connectors, each node shows an icon and its label truncated to
//! 30 characters:
//!
//!     ⧉ Document (3 blocks)
//!     ├─ § # Loi binomiale
//!     ├─ ≔ Exemple
//!     │ └─ ¶ On lance 10 fois une pièce…
//!     └─ ▦ 3 rows x 2 columns
//!
//! With line numbers on, each node line starts with its source line.
//!
//! Icons
//!     Document: ⧉
//!     SectionTitle: §
//!     Paragraph: ¶
//!     List: ☰
//!     Item: •
//!     Code: 𝒱
//!     TypedBlock: ≔
//!     Table: ▦
//!     TableSection: ⊤
//!     TableRow: ↵
//!     TableCell: ◦
//!     Empty: ∅

use crate::bmd::ast::{snapshot_from_tree, AstSnapshot, Tree};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "SectionTitle" => "§",
        "Paragraph" => "¶",
        "List" => "☰",
        "Item" => "•",
        "Code" => "𝒱",
        "TypedBlock" => "≔",
        "Table" => "▦",
        "TableSection" => "⊤",
        "TableRow" => "↵",
        "TableCell" => "◦",
        "Empty" => "∅",
        _ => "○",
    }
}

fn format_snapshot(
    snapshot: &AstSnapshot,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    output: &mut String,
) {
    let connector = if is_last { "└─" } else { "├─" };
    let linum = if show_linum {
        format!("{:02} ", snapshot.line)
    } else {
        String::new()
    };

    output.push_str(&format!(
        "{}{}{} {} {}\n",
        linum,
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, &child_prefix, i + 1 == child_count, show_linum, output);
    }
}

fn format_document_snapshot(snapshot: &AstSnapshot, show_linum: bool) -> String {
    let mut output = format!(
        "{} {}\n",
        get_icon(&snapshot.node_type),
        truncate(&snapshot.label, 30)
    );
    let child_count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, "", i + 1 == child_count, show_linum, &mut output);
    }
    output
}

pub fn to_treeviz_str(tree: &Tree) -> String {
    format_document_snapshot(&snapshot_from_tree(tree), false)
}

/// Like [`to_treeviz_str`], each node line prefixed with its source line.
pub fn to_treeviz_str_with_linum(tree: &Tree) -> String {
    format_document_snapshot(&snapshot_from_tree(tree), true)
}
