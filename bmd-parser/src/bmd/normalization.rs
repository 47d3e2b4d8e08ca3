//! Whitespace normalization
//!
//!     Every recognizer in the block chain assumes a canonical source: `\n` newlines, no
//!     trailing blanks and one tab per indentation level. This module rewrites raw text into
//!     that form before any parsing happens, in four steps:
//!
//!         1. `\r\n` and lone `\r` become `\n`.
//!         2. Trailing spaces and tabs are stripped from every line.
//!         3. Leading whitespace is rewritten: each run of exactly `tab_width` spaces, each run
//!            of fewer spaces followed by a tab, and each lone tab becomes a single tab. Spaces
//!            left over (fewer than `tab_width`, not followed by a tab) are kept as they are.
//!         4. A non empty source always ends with a newline, so that the last line is a full
//!            line for the line based recognizers.
//!
//!     None of the steps adds or removes a line, so line `n` of the normalized text is line `n`
//!     of the source. Line numbered output relies on this.
//!
//!     Normalization is idempotent: `normalize(normalize(s, w), w) == normalize(s, w)`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Spaces per indentation level when nothing else is configured.
pub const DEFAULT_TAB_WIDTH: usize = 4;

static TRAILING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

static LEADING_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]+").unwrap());

/// Normalize newlines, trailing whitespace and indentation.
///
/// A `tab_width` of 0 is treated as 1.
pub fn normalize(source: &str, tab_width: usize) -> String {
    let tab_width = tab_width.max(1);

    let text = normalize_newlines(source);
    let text = TRAILING_WHITESPACE.replace_all(&text, "");
    let text = LEADING_WHITESPACE.replace_all(&text, |caps: &Captures| {
        canonical_indent(&caps[0], tab_width)
    });

    ensure_source_ends_with_newline(&text)
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(source: &str) -> String {
    source.replace("\r\n", "\n").replace('\r', "\n")
}

/// Rewrite one run of leading whitespace into tabs.
///
/// Scans the run left to right: a tab absorbs the spaces pending before it, and `tab_width`
/// pending spaces become a tab on their own. Spaces still pending at the end are kept.
pub fn canonical_indent(run: &str, tab_width: usize) -> String {
    let mut out = String::with_capacity(run.len());
    let mut pending_spaces = 0;

    for ch in run.chars() {
        match ch {
            '\t' => {
                out.push('\t');
                pending_spaces = 0;
            }
            ' ' => {
                pending_spaces += 1;
                if pending_spaces == tab_width {
                    out.push('\t');
                    pending_spaces = 0;
                }
            }
            other => out.push(other),
        }
    }

    out.extend(std::iter::repeat(' ').take(pending_spaces));
    out
}

/// Appends a newline to a non empty source that lacks one.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}
