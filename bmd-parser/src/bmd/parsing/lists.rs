//! List recognizers
//!
//!     A list recognizer matches items of its family until one fails, and fails itself when
//!     the first one does. Item markers:
//!
//!         numbered    `\d+` or one or two letters, then one of `. - / )`
//!         bulleted    one of `. - + *`
//!
//!     The rest of the marker line is the first body line when it starts with a blank; see
//!     [body](super::body) for the continuation lines. Text glued to the marker (`-a`, `1.5`)
//!     is not part of the item: the item body is empty and that text is parsed again by the
//!     chain, on the same line.

use super::body::collect_indented;
use super::chain::parse_tree;
use crate::bmd::ast::{Item, List, ListKind, Node};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+|[a-zA-Z]{1,2})[.\-/)]").unwrap());

static BULLETED_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([.\-+*])").unwrap());

impl ListKind {
    fn marker_regex(self) -> &'static Regex {
        match self {
            ListKind::Numbered => &NUMBERED_MARKER,
            ListKind::Bulleted => &BULLETED_MARKER,
        }
    }
}

pub fn numbered_list(src: &str, line: usize) -> Option<(Node, &str)> {
    list(ListKind::Numbered, src, line)
}

pub fn bulleted_list(src: &str, line: usize) -> Option<(Node, &str)> {
    list(ListKind::Bulleted, src, line)
}

fn list(kind: ListKind, src: &str, line: usize) -> Option<(Node, &str)> {
    let mut items = Vec::new();
    let mut rest = src;
    let mut line = line;

    while let Some((parsed, remaining)) = item(kind, rest, line) {
        line += rest[..rest.len() - remaining.len()].matches('\n').count();
        items.push(parsed);
        rest = remaining;
    }

    if items.is_empty() {
        return None;
    }
    Some((Node::List(List::new(kind, items)), rest))
}

/// One item: the marker, then the dedented body parsed as a nested tree.
pub fn item(kind: ListKind, src: &str, line: usize) -> Option<(Item, &str)> {
    let caps = kind.marker_regex().captures(src)?;
    let marker = caps[1].to_string();
    let after_marker = &src[caps[0].len()..];

    let (body, rest) = collect_indented(after_marker);
    let tree = parse_tree(&body, line);
    Some((Item::new(marker, tree).at(line), rest))
}
