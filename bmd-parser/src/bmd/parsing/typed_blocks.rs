//! Typed block recognizer
//!
//!     One recognizer per [`BlockKind`], all sharing this code. A head line is the kind's
//!     label, optionally followed by a space and more words, then a colon, optional blanks and
//!     an optional `{attrs}`:
//!
//!         Exemple:
//!         Exercice 3 (difficile): {#ex3, behav=toggle}
//!
//!     Nothing else may follow the colon. The body is collected like a list item body: the
//!     indented and blank lines below, dedented and parsed with the block chain.

use super::body::collect_indented;
use super::chain::parse_tree;
use crate::bmd::ast::{BlockKind, Node, TypedBlock};
use crate::bmd::attributes::{parse_attr_list, slugify};
use crate::bmd::inlines::transform_inlines;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static HEAD_LINES: Lazy<HashMap<BlockKind, Regex>> = Lazy::new(|| {
    BlockKind::ALL
        .iter()
        .map(|kind| {
            let pattern = format!(
                r"^({}(?: .*)?):[ \t]*(?:\{{(.*)\}})?\n",
                regex::escape(kind.label())
            );
            (*kind, Regex::new(&pattern).unwrap())
        })
        .collect()
});

pub fn typed_block(kind: BlockKind, src: &str, line: usize) -> Option<(Node, &str)> {
    let caps = HEAD_LINES.get(&kind)?.captures(src)?;
    let raw_title = &caps[1];

    let mut attr_src = format!(".{}, ", kind.class());
    if let Some(attrs) = caps.get(2) {
        attr_src.push_str(&format!("{}, ", attrs.as_str()));
    }
    let (attrs, _) = parse_attr_list(&attr_src);

    let (body, rest) = collect_indented(&src[caps[0].len()..]);
    let block = TypedBlock::new(
        kind,
        transform_inlines(raw_title),
        slugify(raw_title),
        parse_tree(&body, line + 1),
        attrs,
    )
    .at(line);
    Some((Node::TypedBlock(block), rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmd::ast::{AstNode, Behaviour};
    use rstest::rstest;

    fn expect_block(node: Node) -> TypedBlock {
        match node {
            Node::TypedBlock(block) => block,
            other => panic!("expected typed block, got {:?}", other),
        }
    }

    #[rstest]
    #[case(BlockKind::Objectives, "Objectifs:\n\tx\n")]
    #[case(BlockKind::Example, "Exemple:\n\tx\n")]
    #[case(BlockKind::Answer, "Corrigé:\n\tx\n")]
    #[case(BlockKind::Summary, "Résumé:\n\tx\n")]
    #[case(BlockKind::Standfirst, "Chapô:\n\tx\n")]
    #[case(BlockKind::Additional, "Compléments:\n\tx\n")]
    fn test_kind_matches_its_label(#[case] kind: BlockKind, #[case] src: &str) {
        let (node, rest) = typed_block(kind, src, 1).unwrap();
        let block = expect_block(node);
        assert_eq!(block.kind, kind);
        assert_eq!(block.attrs.classes, vec![kind.class()]);
        assert_eq!(rest, "");
    }

    #[test]
    fn test_other_labels_do_not_match() {
        assert!(typed_block(BlockKind::Note, "Exemple:\n", 1).is_none());
        assert!(typed_block(BlockKind::Example, "Exemples:\n", 1).is_none());
    }

    #[test]
    fn test_title_words_and_attrs() {
        let (node, _) =
            typed_block(BlockKind::Exercise, "Exercice 3 *dur*: {#ex3, behav=toggle}\n\tq\n", 4)
                .unwrap();
        let block = expect_block(node);
        assert_eq!(block.title, "Exercice 3 <em>dur</em>");
        assert_eq!(block.attrs.id.as_deref(), Some("ex3"));
        assert_eq!(block.attrs.classes, vec!["exercise"]);
        assert_eq!(block.behaviour(), Behaviour::Toggle);
        assert_eq!(block.line, 4);
        assert_eq!(block.body.visible().next().map(|n| n.line()), Some(5));
    }

    #[test]
    fn test_text_after_colon_is_not_a_head_line() {
        assert!(typed_block(BlockKind::Note, "Remarque: inline text\n", 1).is_none());
    }

    #[test]
    fn test_anchor_is_slug_of_title() {
        let (node, _) = typed_block(BlockKind::Example, "Exemple Loi de Poisson:\n", 1).unwrap();
        assert_eq!(expect_block(node).anchor, "exemple-loi-de-poisson");
    }

    #[test]
    fn test_body_stops_at_unindented_line() {
        let (node, rest) = typed_block(BlockKind::Example, "Exemple:\n\tfoo\n\n\tbar\nout\n", 1).unwrap();
        let block = expect_block(node);
        assert_eq!(block.body.visible().count(), 2);
        assert_eq!(rest, "out\n");
    }

    #[test]
    fn test_space_indented_body() {
        let (node, rest) = typed_block(BlockKind::Example, "Exemple:\n  body\n\n# Next\n", 1).unwrap();
        let block = expect_block(node);
        let body: Vec<_> = block.body.visible().map(|n| (n.node_type(), n.line())).collect();
        assert_eq!(body, vec![("Paragraph", 2)]);
        assert_eq!(rest, "# Next\n");
    }
}
