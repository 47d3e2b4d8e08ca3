//! Individual pipeline stages

use super::{Runnable, TransformError};
use crate::bmd::ast::Tree;
use crate::bmd::formats::html::{HtmlWriter, ToHtml};
use crate::bmd::formats::{json, treeviz};
use crate::bmd::normalization::{normalize, DEFAULT_TAB_WIDTH};
use crate::bmd::parsing::parse_document;

/// String → String: canonical newlines and tab indentation.
#[derive(Debug, Clone, Copy)]
pub struct Normalize {
    tab_width: usize,
}

impl Normalize {
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }
}

impl Default for Normalize {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_WIDTH)
    }
}

impl Runnable<String, String> for Normalize {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(normalize(&input, self.tab_width))
    }
}

/// String → Tree: the block recognizer chain over normalized text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseBlocks;

impl ParseBlocks {
    pub fn new() -> Self {
        ParseBlocks
    }
}

impl Runnable<String, Tree> for ParseBlocks {
    fn run(&self, input: String) -> Result<Tree, TransformError> {
        Ok(parse_document(&input))
    }
}

/// Tree → String: the HTML fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderHtml {
    line_numbers: bool,
}

impl RenderHtml {
    pub fn plain() -> Self {
        Self {
            line_numbers: false,
        }
    }

    pub fn with_line_numbers() -> Self {
        Self { line_numbers: true }
    }
}

impl Runnable<Tree, String> for RenderHtml {
    fn run(&self, input: Tree) -> Result<String, TransformError> {
        let mut out = if self.line_numbers {
            HtmlWriter::with_line_numbers()
        } else {
            HtmlWriter::new()
        };
        input.write_html(&mut out);
        Ok(out.finish())
    }
}

/// Tree → String: pretty printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToJson;

impl Runnable<Tree, String> for ToJson {
    fn run(&self, input: Tree) -> Result<String, TransformError> {
        json::to_json(&input).map_err(|err| TransformError::stage("json", err))
    }
}

/// Tree → String: treeviz, optionally with a line number column.
#[derive(Debug, Clone, Copy, Default)]
pub struct Treeviz {
    show_linum: bool,
}

impl Treeviz {
    pub fn new(show_linum: bool) -> Self {
        Self { show_linum }
    }
}

impl Runnable<Tree, String> for Treeviz {
    fn run(&self, input: Tree) -> Result<String, TransformError> {
        Ok(if self.show_linum {
            treeviz::to_treeviz_str_with_linum(&input)
        } else {
            treeviz::to_treeviz_str(&input)
        })
    }
}
