//! Document tree for the bmd format
//!
//!     A parsed document is a [`Tree`]: an ordered sequence of [`Node`]s in source order. A tree
//!     renders as the concatenation of its children, which is what makes it usable as a node
//!     body: list items and typed blocks own a nested tree built by re-running the block
//!     recognizer chain on their dedented content.
//!
//!     Nodes are built once, by the recognizer that matched them, and never change afterwards.
//!     Rendering never writes to a node; state needed while rendering (table row striping)
//!     lives in the render call, see [table](elements::table).
//!
//!     Every block node records the 1-based source line it starts on. These feed the line
//!     numbered HTML output and the treeviz line column.
//!
//!     See [elements] for the node types, [traits] for the shared node interface and
//!     [snapshot] for the normalized view used by the tree formatters.

pub mod elements;
pub mod snapshot;
pub mod traits;

pub use elements::{
    Behaviour, BlockKind, Code, Item, List, ListKind, Node, Paragraph, RowContext, SectionKind,
    SectionTitle, Table, TableCell, TableRow, TableSection, Tree, TypedBlock,
};
pub use snapshot::{
    snapshot_from_node, snapshot_from_tree, snapshot_from_tree_with_options, AstSnapshot,
};
pub use traits::AstNode;
