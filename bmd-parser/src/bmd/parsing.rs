//! Parsing module for the bmd format
//!
//!     Parsing turns normalized source text into a [`Tree`]. There is no tokenizer: the
//!     grammar is a fixed, ordered chain of block recognizers, each a function that looks at
//!     the front of the remaining text and either consumes a prefix, yielding one node, or
//!     reports no match. See [chain] for the driving loop and the priority order.
//!
//! Sub-parsers
//!
//!     - [blocks]: single shot recognizers (markers, blank lines, code, titles, paragraphs).
//!     - [lists]: numbered and bulleted lists, built from repeated item matches.
//!     - [typed_blocks]: the labelled admonition blocks.
//!     - [tables]: pipe tables, with nested row and cell recognizers.
//!     - [body]: the indented body collector shared by items and typed blocks.
//!
//!     Items and typed blocks parse their dedented body by calling [`parse_tree`] again, so
//!     nesting depth is only limited by indentation.
//!
//! Failure
//!
//!     Parsing never fails. Malformed input degrades to a best-effort tree: unterminated
//!     fences and blocks run to the end of their input, unparseable attribute text is
//!     ignored, and text no recognizer accepts ends the current tree (logged as a warning).
//!
//!     The input is expected to be normalized, see
//!     [normalization](crate::bmd::normalization).

pub mod blocks;
pub mod body;
pub mod chain;
pub mod lists;
pub mod tables;
pub mod typed_blocks;

pub use chain::{parse_tree, Recognizer, CHAIN};

use crate::bmd::ast::Tree;

/// Parse a normalized document, numbering lines from 1.
pub fn parse_document(source: &str) -> Tree {
    parse_tree(source, 1)
}
