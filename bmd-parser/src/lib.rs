//! # bmd
//!
//! A parser and HTML renderer for Block-Markdown (bmd), a lightweight, line oriented markup
//! used to author course material: headings, lists, fenced code, pipe tables, paragraphs and
//! a fixed set of typed admonition blocks ("Exemple:", "Exercice:", ...).
//!
//! File Layout
//!
//!     src/bmd
//!       ├── normalization   Canonical newlines and tab based indentation
//!       ├── inlines         Inline span substitutions (code, math, links, emphasis)
//!       ├── attributes      The `{#id, .class, key=value}` micro syntax
//!       ├── ast             Document tree, one file per element
//!       ├── parsing         The ordered block recognizer chain
//!       ├── formats         HTML writer, treeviz and json output
//!       ├── transforms      Composable pipeline stages
//!       └── loader          File / string loading helpers
//!
//! The crate root exposes the one-call entry points, [`render`], [`render_with`] and
//! [`render_with_line_numbers`]. Everything else lives under [`bmd`].

#![allow(rustdoc::invalid_html_tags)]

pub mod bmd;

pub use bmd::ast::Tree;
pub use bmd::options::RenderOptions;

use bmd::formats::html::{HtmlWriter, ToHtml};

/// Parse a bmd source and return the HTML fragment, using the default tab width.
pub fn render(source: &str) -> String {
    render_with(source, &RenderOptions::default())
}

/// Parse a bmd source and return the HTML fragment.
///
/// With `options.line_numbers` set, every output line is prefixed by the zero padded source
/// line it came from and a tab, see [`HtmlWriter::with_line_numbers`].
pub fn render_with(source: &str, options: &RenderOptions) -> String {
    let tree = parse(source, options.tab_width);
    let mut out = if options.line_numbers {
        HtmlWriter::with_line_numbers()
    } else {
        HtmlWriter::new()
    };
    tree.write_html(&mut out);
    out.finish()
}

/// Debug variant of [`render`] with source line numbers on every output line.
pub fn render_with_line_numbers(source: &str) -> String {
    render_with(
        source,
        &RenderOptions {
            line_numbers: true,
            ..RenderOptions::default()
        },
    )
}

/// Normalize and parse a source into its document tree.
pub fn parse(source: &str, tab_width: usize) -> Tree {
    let normalized = bmd::normalization::normalize(source, tab_width);
    bmd::parsing::parse_document(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_minimal_document() {
        let html = render("# Title\n\nSome text.\n");
        assert_eq!(html, "<H1 id=\"title\">Title</H1>\n<p>Some text.</p>\n");
    }

    #[test]
    fn test_render_empty_source() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_render_with_line_numbers_prefixes_every_line() {
        let html = render_with_line_numbers("# Title\n\nSome text.\n");
        assert_eq!(
            html,
            "0001\t<H1 id=\"title\">Title</H1>\n0003\t<p>Some text.</p>\n"
        );
    }
}
