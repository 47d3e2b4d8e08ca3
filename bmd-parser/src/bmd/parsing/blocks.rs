//! Single shot block recognizers
//!
//!     Each function takes the remaining text and the source line it starts on, and returns
//!     the recognized node with the unconsumed remainder, or `None`.

use crate::bmd::ast::{Code, Node, Paragraph, SectionTitle};
use crate::bmd::attributes::{parse_attr_list, slugify};
use crate::bmd::inlines::transform_inlines;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static BREAKPOINT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@@\n").unwrap());

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n+").unwrap());

static CODE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^`{3,}[ \t]*(?:(\w+)[ \t]*)?(?:\{(.*)\})?\n").unwrap());

static CODE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`{3,}\n+").unwrap());

static SECTION_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#+)[ \t]+(.+?)[ \t]*(?:\{(.*)\})?\n").unwrap());

static PARAGRAPH_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\t\n ][^\n]*\n").unwrap());

/// `@@` on a line of its own: a development marker, logged and otherwise ignored.
pub fn breakpoint(src: &str, line: usize) -> Option<(Node, &str)> {
    let m = BREAKPOINT.find(src)?;
    debug!("breakpoint marker at line {}", line);
    Some((Node::Empty { line }, &src[m.end()..]))
}

/// One or more newlines.
pub fn blank_lines(src: &str, line: usize) -> Option<(Node, &str)> {
    let m = BLANK_LINES.find(src)?;
    Some((Node::Empty { line }, &src[m.end()..]))
}

/// A fenced code block. Without a closing fence the body runs to the end of `src`.
pub fn code(src: &str, line: usize) -> Option<(Node, &str)> {
    let caps = CODE_START.captures(src)?;

    let mut attr_src = String::new();
    if let Some(lang) = caps.get(1) {
        attr_src.push_str(&format!(".{}, ", lang.as_str()));
    }
    if let Some(attrs) = caps.get(2) {
        attr_src.push_str(&format!("{}, ", attrs.as_str()));
    }

    let mut rest = &src[caps[0].len()..];
    let mut body = String::new();
    loop {
        if let Some(end) = CODE_END.find(rest) {
            rest = &rest[end.end()..];
            break;
        }
        match rest.find('\n') {
            Some(newline) => {
                body.push_str(&rest[..=newline]);
                rest = &rest[newline + 1..];
            }
            None => break,
        }
    }

    let (attrs, _) = parse_attr_list(&attr_src);
    Some((Node::Code(Code::new(body, attrs).at(line)), rest))
}

/// A `#` heading. The id defaults to the slug of the raw title.
pub fn section_title(src: &str, line: usize) -> Option<(Node, &str)> {
    let caps = SECTION_TITLE.captures(src)?;
    let level = caps[1].len();
    let raw_title = &caps[2];

    let attr_src = caps
        .get(3)
        .map(|attrs| format!("{}, ", attrs.as_str()))
        .unwrap_or_default();
    let (mut attrs, _) = parse_attr_list(&attr_src);
    attrs.set_default_id(slugify(raw_title));

    let title = SectionTitle::new(level, transform_inlines(raw_title), attrs).at(line);
    Some((Node::SectionTitle(title), &src[caps[0].len()..]))
}

/// Consecutive lines not starting with a space, a tab or a newline, inline-transformed as
/// one text.
pub fn paragraph(src: &str, line: usize) -> Option<(Node, &str)> {
    let mut rest = src;
    while let Some(m) = PARAGRAPH_LINE.find(rest) {
        rest = &rest[m.end()..];
    }
    let consumed = &src[..src.len() - rest.len()];
    if consumed.is_empty() {
        return None;
    }
    let text = consumed.strip_suffix('\n').unwrap_or(consumed);
    Some((
        Node::Paragraph(Paragraph::new(transform_inlines(text)).at(line)),
        rest,
    ))
}
