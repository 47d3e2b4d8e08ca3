//! Inline span substitutions
//!
//!     Inline markup in titles, paragraphs and table cells is rewritten to HTML by a fixed
//!     sequence of textual substitutions. Each rule is a non greedy regex applied to the whole
//!     text before the next rule runs, in this order:
//!
//!         1. `` `code` ``        <code>code</code>
//!         2. `$$tex$$`           display math span
//!         3. `$tex$`             inline math span
//!         4. `![alt](url)`       <img>
//!         5. `[text](url)`       in-page block navigation through `showBlock(url)`
//!         6. `**text**`          <strong>
//!         7. `*text*`            <em>
//!
//!     The order matters: `$$` must be consumed before `$`, images before links and `**`
//!     before `*`. The output of a rule uses none of the delimiters of the later ones (links
//!     render their brackets as `&#91;`/`&#93;`), so a rewritten span is never matched twice.
//!
//!     Substitutions never cross a newline, so a multi line paragraph keeps its line count.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// The inline spans, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineSpan {
    Code,
    DisplayMath,
    InlineMath,
    Image,
    Link,
    Strong,
    Emphasis,
}

impl InlineSpan {
    pub const ORDER: [InlineSpan; 7] = [
        InlineSpan::Code,
        InlineSpan::DisplayMath,
        InlineSpan::InlineMath,
        InlineSpan::Image,
        InlineSpan::Link,
        InlineSpan::Strong,
        InlineSpan::Emphasis,
    ];

    fn pattern(self) -> &'static str {
        match self {
            InlineSpan::Code => r"`(.*?)`",
            InlineSpan::DisplayMath => r"\$\$(.*?)\$\$",
            InlineSpan::InlineMath => r"\$(.*?)\$",
            InlineSpan::Image => r"!\[(.*?)\]\((.*?)\)",
            InlineSpan::Link => r"\[(.*?)\]\((.*?)\)",
            InlineSpan::Strong => r"\*\*(.+?)\*\*",
            InlineSpan::Emphasis => r"\*(.+?)\*",
        }
    }

    /// Replacement template, `${n}` refers to the n-th capture.
    fn template(self) -> &'static str {
        match self {
            InlineSpan::Code => "<code>${1}</code>",
            InlineSpan::DisplayMath => r#"<span class="math">\[${1}\]</span>"#,
            InlineSpan::InlineMath => r#"<span class="math">\(${1}\)</span>"#,
            InlineSpan::Image => r#"<img src="${2}" alt="${1}" />"#,
            InlineSpan::Link => r#"<a onclick="showBlock('${2}')">&#91;${1}&#93;</a>"#,
            InlineSpan::Strong => "<strong>${1}</strong>",
            InlineSpan::Emphasis => "<em>${1}</em>",
        }
    }
}

static RULES: Lazy<Vec<(InlineSpan, Regex)>> = Lazy::new(|| {
    InlineSpan::ORDER
        .iter()
        .map(|span| (*span, Regex::new(span.pattern()).unwrap()))
        .collect()
});

/// Apply every inline substitution, in order, to `text`.
pub fn transform_inlines(text: &str) -> String {
    let mut out = text.to_string();
    for (span, regex) in RULES.iter() {
        out = regex.replace_all(&out, span.template()).into_owned();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_span() {
        assert_eq!(transform_inlines("use `ls -l` here"), "use <code>ls -l</code> here");
    }

    #[test]
    fn test_display_math_before_inline_math() {
        assert_eq!(
            transform_inlines("$$x^2$$ and $y$"),
            r#"<span class="math">\[x^2\]</span> and <span class="math">\(y\)</span>"#
        );
    }

    #[test]
    fn test_image() {
        assert_eq!(
            transform_inlines("![a cat](cat.png)"),
            r#"<img src="cat.png" alt="a cat" />"#
        );
    }

    #[test]
    fn test_link_shows_block() {
        assert_eq!(
            transform_inlines("see [here](#exempleGeo)"),
            r#"see <a onclick="showBlock('#exempleGeo')">&#91;here&#93;</a>"#
        );
    }

    #[test]
    fn test_strong_before_emphasis() {
        assert_eq!(
            transform_inlines("**bold** and *it*"),
            "<strong>bold</strong> and <em>it</em>"
        );
    }

    #[test]
    fn test_non_greedy_spans() {
        assert_eq!(
            transform_inlines("*a* b *c*"),
            "<em>a</em> b <em>c</em>"
        );
    }

    #[test]
    fn test_spans_do_not_cross_lines() {
        assert_eq!(transform_inlines("*a\nb*\n"), "*a\nb*\n");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        assert_eq!(transform_inlines("nothing to see"), "nothing to see");
    }
}
