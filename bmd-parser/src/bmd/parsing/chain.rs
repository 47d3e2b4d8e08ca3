//! The block recognizer chain
//!
//!     Recognizers, in priority order:
//!
//!         breakpoint, blank lines, code, section title, numbered list, bulleted list,
//!         the ten typed block kinds, table, paragraph
//!
//!     The driver scans the chain from the top against the remaining text. The first
//!     recognizer that matches consumes its prefix and emits one node, appended to the tree,
//!     and the scan restarts from the top on the new remainder. Restarting means blank lines
//!     are always consumed between blocks, which several recognizers rely on since none of
//!     them accepts a leading blank line.
//!
//!     Parsing of a level stops when a full scan finds no match: either the text is exhausted
//!     or what is left is unparseable (for instance a line starting with spaces at the top
//!     level). Every successful recognizer consumes at least one character, so the loop
//!     always terminates.
//!
//!     Line numbers: the driver knows the source line the remaining text starts on and
//!     advances it by the number of newlines each match consumed. Recognizers receive it to
//!     stamp their nodes.

use super::{blocks, lists, tables, typed_blocks};
use crate::bmd::ast::{BlockKind, Node, Tree};
use log::{debug, trace, warn};

/// One entry of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recognizer {
    Breakpoint,
    BlankLines,
    Code,
    SectionTitle,
    NumberedList,
    BulletedList,
    TypedBlock(BlockKind),
    Table,
    Paragraph,
}

/// The chain, highest priority first.
pub const CHAIN: [Recognizer; 18] = [
    Recognizer::Breakpoint,
    Recognizer::BlankLines,
    Recognizer::Code,
    Recognizer::SectionTitle,
    Recognizer::NumberedList,
    Recognizer::BulletedList,
    Recognizer::TypedBlock(BlockKind::Objectives),
    Recognizer::TypedBlock(BlockKind::Example),
    Recognizer::TypedBlock(BlockKind::Exercise),
    Recognizer::TypedBlock(BlockKind::Answer),
    Recognizer::TypedBlock(BlockKind::Summary),
    Recognizer::TypedBlock(BlockKind::Help),
    Recognizer::TypedBlock(BlockKind::Reminder),
    Recognizer::TypedBlock(BlockKind::Note),
    Recognizer::TypedBlock(BlockKind::Standfirst),
    Recognizer::TypedBlock(BlockKind::Additional),
    Recognizer::Table,
    Recognizer::Paragraph,
];

impl Recognizer {
    /// Try to match at the front of `src`, which starts on source line `line`.
    ///
    /// Returns the node and the unconsumed remainder, or `None` leaving `src` untouched.
    pub fn recognize(self, src: &str, line: usize) -> Option<(Node, &str)> {
        match self {
            Recognizer::Breakpoint => blocks::breakpoint(src, line),
            Recognizer::BlankLines => blocks::blank_lines(src, line),
            Recognizer::Code => blocks::code(src, line),
            Recognizer::SectionTitle => blocks::section_title(src, line),
            Recognizer::NumberedList => lists::numbered_list(src, line),
            Recognizer::BulletedList => lists::bulleted_list(src, line),
            Recognizer::TypedBlock(kind) => typed_blocks::typed_block(kind, src, line),
            Recognizer::Table => tables::table(src, line),
            Recognizer::Paragraph => blocks::paragraph(src, line),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Recognizer::Breakpoint => "breakpoint",
            Recognizer::BlankLines => "blank-lines",
            Recognizer::Code => "code",
            Recognizer::SectionTitle => "section-title",
            Recognizer::NumberedList => "numbered-list",
            Recognizer::BulletedList => "bulleted-list",
            Recognizer::TypedBlock(kind) => kind.class(),
            Recognizer::Table => "table",
            Recognizer::Paragraph => "paragraph",
        }
    }
}

/// Run the chain over `source` until no recognizer matches.
///
/// `first_line` is the source line `source` starts on: 1 for a document, the line of the
/// owning item or typed block for nested bodies.
pub fn parse_tree(source: &str, first_line: usize) -> Tree {
    let mut tree = Tree::new();
    let mut rest = source;
    let mut line = first_line;

    'scan: while !rest.is_empty() {
        for recognizer in CHAIN {
            if let Some((node, remaining)) = recognizer.recognize(rest, line) {
                debug_assert!(remaining.len() < rest.len(), "recognizer consumed nothing");
                let consumed = &rest[..rest.len() - remaining.len()];
                debug!("{} matched at line {}", recognizer.name(), line);
                line += consumed.matches('\n').count();
                tree.push(node);
                rest = remaining;
                continue 'scan;
            }
        }
        warn!(
            "no block matched at line {}, dropping {} unparsed byte(s)",
            line,
            rest.len()
        );
        break;
    }

    trace!("parsed {} node(s) from line {}", tree.len(), first_line);
    tree
}
