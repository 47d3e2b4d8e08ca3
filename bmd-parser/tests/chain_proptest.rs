//! Property-based tests for normalization and the block chain
//!
//! The parser must terminate and produce a best-effort tree for any input, and the
//! normalizer must be idempotent.

use bmd_parser::bmd::normalization::normalize;
use bmd_parser::{parse, render, render_with_line_numbers};
use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;
use rstest::rstest;

static LINE_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d{4}\t").unwrap());

/// Text built from the characters the recognizers care about.
fn markup_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("\t".to_string()),
            Just("    ".to_string()),
            Just("  ".to_string()),
            Just("```".to_string()),
            Just("# ".to_string()),
            Just("- ".to_string()),
            Just("1. ".to_string()),
            Just("| ".to_string()),
            Just("|---".to_string()),
            Just("Exemple:".to_string()),
            Just("{#id, .c, behav=toggle}".to_string()),
            Just("@@".to_string()),
            "[a-z*$`\\[\\]()!]{1,6}",
        ],
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(source in markup_strategy(), tab_width in 1usize..8) {
        let once = normalize(&source, tab_width);
        prop_assert_eq!(normalize(&once, tab_width), once);
    }

    #[test]
    fn parsing_terminates_on_markup(source in markup_strategy()) {
        let _ = parse(&source, 4);
        let _ = render(&source);
    }

    #[test]
    fn parsing_terminates_on_any_text(source in "\\PC{0,200}") {
        let _ = render(&source);
    }

    #[test]
    fn rendering_is_deterministic(source in markup_strategy()) {
        prop_assert_eq!(render(&source), render(&source));
    }

    #[test]
    fn line_numbers_only_add_prefixes(source in markup_strategy()) {
        let numbered = render_with_line_numbers(&source);
        prop_assert_eq!(LINE_PREFIX.replace_all(&numbered, "").into_owned(), render(&source));
    }
}

#[rstest]
#[case::empty("")]
#[case::only_blank_lines("\n\n\n\n\n")]
#[case::only_backticks("``````````````")]
#[case::backtick_lines("```\n```\n```\n")]
#[case::unterminated_fence("```rust\nfn main() {\n")]
#[case::unterminated_fence_no_newline("```\nabc")]
#[case::only_pipes("||||||\n")]
#[case::separator_only("|---|\n|---|\n")]
#[case::bare_markers("-\n-\n1.\n")]
#[case::markers_without_body("- \n* \n")]
#[case::typed_block_without_body("Exemple:\nRemarque:\n")]
#[case::breakpoints("@@\n@@\n@@")]
#[case::indented_only("    \tx\n  y\n")]
#[case::unclosed_attrs("# T {#a, .b\n")]
#[case::deep_nesting("- - - - - - - - x\n")]
fn test_pathological_inputs_terminate(#[case] source: &str) {
    let html = render(source);
    let numbered = render_with_line_numbers(source);
    assert_eq!(LINE_PREFIX.replace_all(&numbered, ""), html);
}

#[test]
fn test_unterminated_fence_swallows_rest() {
    assert_eq!(
        render("```\n# not a title\n\ntext\n"),
        "<pre><code># not a title\n\ntext\n</code></pre>\n"
    );
}

#[test]
fn test_blank_lines_only_render_nothing() {
    assert_eq!(render("\n\n\n"), "");
    assert_eq!(parse("\n\n\n", 4).visible().count(), 0);
}
