//! Indented body collection
//!
//!     List items and typed blocks own the lines that follow their head line when those lines
//!     are indented or blank. The collector strips one level of indentation from each
//!     indented line (a tab, or the whole run of leading spaces), keeps blank lines as they
//!     are, and stops at the first line that is neither. The result has exactly one line per
//!     consumed source line, so it can be parsed again with line numbers continuing from the
//!     head line.

use once_cell::sync::Lazy;
use regex::Regex;

static INDENTED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?: +|\t)([^\n]+\n)").unwrap());

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\n+)").unwrap());

/// Collect the dedented body at the front of `src`, returning it and the remainder.
pub fn collect_indented(src: &str) -> (String, &str) {
    let mut body = String::new();
    let mut rest = src;

    while let Some(caps) = INDENTED_LINE
        .captures(rest)
        .or_else(|| BLANK_LINES.captures(rest))
    {
        body.push_str(&caps[1]);
        rest = &rest[caps[0].len()..];
    }

    (body, rest)
}
