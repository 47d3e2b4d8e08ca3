//! Standard transforms
//!
//! Pre-built pipelines, as `once_cell` statics, for the usual paths from source text. All
//! of them normalize with the default tab width; [`pipeline_for`] builds the same shapes
//! for other options.

use super::stages::{Normalize, ParseBlocks, RenderHtml, ToJson, Treeviz};
use super::Transform;
use crate::bmd::ast::Tree;
use crate::bmd::options::RenderOptions;
use once_cell::sync::Lazy;

pub type TextTransform = Transform<String, String>;

pub type TreeTransform = Transform<String, Tree>;

/// String → String: normalization only.
pub static NORMALIZE: Lazy<TextTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Normalize::default()));

/// String → Tree: normalize, then run the block chain.
pub static STRING_TO_TREE: Lazy<TreeTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&NORMALIZE).then(ParseBlocks::new()));

/// String → String: the HTML fragment.
pub static STRING_TO_HTML: Lazy<TextTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&STRING_TO_TREE).then(RenderHtml::plain()));

/// String → String: HTML with source line numbers.
pub static STRING_TO_NUMBERED_HTML: Lazy<TextTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&STRING_TO_TREE)
        .then(RenderHtml::with_line_numbers())
});

/// String → String: the tree as JSON.
pub static STRING_TO_JSON: Lazy<TextTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&STRING_TO_TREE).then(ToJson));

/// String → String: the tree as treeviz.
pub static STRING_TO_TREEVIZ: Lazy<TextTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&STRING_TO_TREE).then(Treeviz::new(false)));

/// Output shape of a pipeline built by [`pipeline_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Html,
    Json,
    Treeviz,
}

/// Source → output pipeline honoring the tab width and line number options.
///
/// Line numbers apply to HTML and treeviz.
pub fn pipeline_for(target: Target, options: &RenderOptions) -> TextTransform {
    let parse = Transform::from_fn(Ok)
        .then(Normalize::new(options.tab_width))
        .then(ParseBlocks::new());
    match target {
        Target::Html if options.line_numbers => parse.then(RenderHtml::with_line_numbers()),
        Target::Html => parse.then(RenderHtml::plain()),
        Target::Json => parse.then(ToJson),
        Target::Treeviz => parse.then(Treeviz::new(options.line_numbers)),
    }
}
