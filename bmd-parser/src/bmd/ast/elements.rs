//! Element definitions for the bmd document tree
//!
//!     Blocks are line based: each takes at least one full line of source.
//!
//!         - Code: a fenced block, kept verbatim. See [code].
//!         - Section titles: `#` headings. See [section_title].
//!         - Lists: numbered or bulleted, made of items with nested content. See [list].
//!         - Typed blocks: labelled admonitions ("Exemple:", ...). See [typed_block].
//!         - Tables: pipe tables with header and body sections. See [table].
//!         - Paragraphs: the catch-all. See [paragraph].
//!
//!     [`Node::Empty`] stands for consumed source that produces no output (blank lines and
//!     debug markers).
//!
//!     Each element file implements the HTML rendering of its element.

pub mod code;
pub mod list;
pub mod node;
pub mod paragraph;
pub mod section_title;
pub mod table;
pub mod tree;
pub mod typed_block;

pub use code::Code;
pub use list::{Item, List, ListKind};
pub use node::Node;
pub use paragraph::Paragraph;
pub use section_title::SectionTitle;
pub use table::{RowContext, SectionKind, Table, TableCell, TableRow, TableSection};
pub use tree::Tree;
pub use typed_block::{Behaviour, BlockKind, TypedBlock};
