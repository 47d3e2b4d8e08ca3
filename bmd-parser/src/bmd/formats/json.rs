//! JSON output
//!
//!     The tree serialized with serde: an array of nodes, each an object with a `type` tag
//!     (`section_title`, `paragraph`, ...) and the node's fields. Item and typed block bodies
//!     nest as arrays.

use crate::bmd::ast::Tree;

pub fn to_json(tree: &Tree) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tree)
}

pub fn to_json_value(tree: &Tree) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(tree)
}
