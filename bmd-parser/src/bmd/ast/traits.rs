//! Shared interface of the tree nodes

/// Common accessors used by the tree formatters.
pub trait AstNode {
    /// The node type name, e.g. "Paragraph".
    fn node_type(&self) -> &'static str;

    /// A short human readable label for the node.
    fn display_label(&self) -> String;

    /// The 1-based source line the node starts on.
    fn line(&self) -> usize;
}
