//! Typed block element
//!
//!     A typed block is a labelled admonition. Its head line starts with one of a fixed set of
//!     labels, optionally followed by more words, then a colon and an optional `{attrs}`:
//!
//!         Exemple: loi de Poisson {#exPois, behav=popup}
//!             body lines, indented one tab
//!
//!     The kinds and the CSS class each one adds (first in the class list):
//!
//!         Objectifs    objectifs          Aide          help
//!         Exemple      example            Rappel        reminder
//!         Exercice     exercise           Remarque      note
//!         Corrigé      answer             Chapô         sandfirst
//!         Résumé       summary            Compléments   additional
//!
//!     The title is the whole head line up to the colon, inline-transformed. The body is every
//!     following indented or blank line, dedented and parsed again with the block chain.
//!
//! Presentation
//!
//!     A `behav` attribute (the last one wins) selects the HTML template:
//!
//!         (absent/other)   a titled box
//!         toggle           a hidden block with a close control, shown by `showBlock(id)`
//!         popup            the same, wrapped in an overlay background
//!
//!     Toggle and popup blocks need an id for the page scripts; when none is given the slug of
//!     the title is used. The inner element carries the remaining attributes without the id,
//!     which the outer element already holds.

use super::super::super::attributes::AttrList;
use super::super::super::formats::html::{HtmlWriter, ToHtml};
use super::super::traits::AstNode;
use super::tree::Tree;
use serde::Serialize;
use std::fmt;

/// The fixed set of typed block kinds, in recognition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Objectives,
    Example,
    Exercise,
    Answer,
    Summary,
    Help,
    Reminder,
    Note,
    Standfirst,
    Additional,
}

impl BlockKind {
    pub const ALL: [BlockKind; 10] = [
        BlockKind::Objectives,
        BlockKind::Example,
        BlockKind::Exercise,
        BlockKind::Answer,
        BlockKind::Summary,
        BlockKind::Help,
        BlockKind::Reminder,
        BlockKind::Note,
        BlockKind::Standfirst,
        BlockKind::Additional,
    ];

    /// The label that opens a block of this kind.
    pub fn label(self) -> &'static str {
        match self {
            BlockKind::Objectives => "Objectifs",
            BlockKind::Example => "Exemple",
            BlockKind::Exercise => "Exercice",
            BlockKind::Answer => "Corrigé",
            BlockKind::Summary => "Résumé",
            BlockKind::Help => "Aide",
            BlockKind::Reminder => "Rappel",
            BlockKind::Note => "Remarque",
            BlockKind::Standfirst => "Chapô",
            BlockKind::Additional => "Compléments",
        }
    }

    /// The CSS class added to blocks of this kind.
    pub fn class(self) -> &'static str {
        match self {
            BlockKind::Objectives => "objectifs",
            BlockKind::Example => "example",
            BlockKind::Exercise => "exercise",
            BlockKind::Answer => "answer",
            BlockKind::Summary => "summary",
            BlockKind::Help => "help",
            BlockKind::Reminder => "reminder",
            BlockKind::Note => "note",
            BlockKind::Standfirst => "sandfirst",
            BlockKind::Additional => "additional",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// HTML template selected by the `behav` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behaviour {
    Boxed,
    Toggle,
    Popup,
}

impl Behaviour {
    pub fn from_attrs(attrs: &AttrList) -> Self {
        match attrs.get("behav") {
            Some("toggle") => Behaviour::Toggle,
            Some("popup") => Behaviour::Popup,
            _ => Behaviour::Boxed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedBlock {
    pub kind: BlockKind,
    /// Inline-rendered head line.
    pub title: String,
    /// Slug of the raw head line, the id of toggle and popup blocks without an explicit one.
    pub anchor: String,
    pub body: Tree,
    pub attrs: AttrList,
    pub line: usize,
}

impl TypedBlock {
    pub fn new(
        kind: BlockKind,
        title: impl Into<String>,
        anchor: impl Into<String>,
        body: Tree,
        attrs: AttrList,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            anchor: anchor.into(),
            body,
            attrs,
            line: 1,
        }
    }

    pub fn at(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn behaviour(&self) -> Behaviour {
        Behaviour::from_attrs(&self.attrs)
    }

    /// The id used by the toggle and popup templates.
    pub fn block_id(&self) -> &str {
        self.attrs.id.as_deref().unwrap_or(&self.anchor)
    }

    fn write_boxed(&self, out: &mut HtmlWriter) {
        out.at_line(self.line).write(&format!(
            "<div{}>\n<div class=\"block-header\">{}</div>\n<div class=\"block-body\">\n",
            self.attrs.to_html_attrs(),
            self.title
        ));
        self.body.write_html(out);
        out.write("</div>\n</div>\n");
    }

    fn write_toggle(&self, out: &mut HtmlWriter) {
        let id = html_escape::encode_double_quoted_attribute(self.block_id());
        let attrs = self.attrs.to_html_attrs_without_id();
        out.at_line(self.line).write(&format!(
            "<div class=\"toggle_block\" id=\"{id}\" style=\"display: none;\">\n\
             \x20   <div id=\"{id}_toggle_block\"{attrs}>\n\
             \x20       <div class=\"block-header\">{title}</div>\n\
             \x20       <div class=\"block-body\" id=\"{id}_content\">\n",
            title = self.title,
        ));
        self.body.write_html(out);
        out.write(&format!(
            "        </div>\n\
             \x20       <div class=\"popup_close ref\" id=\"{id}_popup_close\" onclick=\"hideBlock('#{id}')\">[X]</div>\n\
             \x20   </div>\n\
             </div>\n"
        ));
    }

    fn write_popup(&self, out: &mut HtmlWriter) {
        let id = html_escape::encode_double_quoted_attribute(self.block_id());
        let attrs = self.attrs.to_html_attrs_without_id();
        out.at_line(self.line).write(&format!(
            "<div>\n\
             \x20   <div class=\"popup_background\" id=\"{id}\" style=\"display: none;\">\n\
             \x20       <div class=\"popup_block\" id=\"{id}_popup_block\">\n\
             \x20           <div id=\"{id}_content\"{attrs}>\n\
             \x20               <div class=\"block-header\">{title}</div>\n\
             \x20               <div class=\"block-body\">\n",
            title = self.title,
        ));
        self.body.write_html(out);
        out.write(&format!(
            "                </div>\n\
             \x20           </div>\n\
             \x20           <div class=\"popup_close ref\" id=\"{id}_popup_close\" onclick=\"hideBlock('#{id}')\">[X]</div>\n\
             \x20       </div>\n\
             \x20   </div>\n\
             </div>\n"
        ));
    }
}

impl AstNode for TypedBlock {
    fn node_type(&self) -> &'static str {
        "TypedBlock"
    }

    fn display_label(&self) -> String {
        self.title.clone()
    }

    fn line(&self) -> usize {
        self.line
    }
}

impl ToHtml for TypedBlock {
    fn write_html(&self, out: &mut HtmlWriter) {
        match self.behaviour() {
            Behaviour::Boxed => self.write_boxed(out),
            Behaviour::Toggle => self.write_toggle(out),
            Behaviour::Popup => self.write_popup(out),
        }
    }
}
