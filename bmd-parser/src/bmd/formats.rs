//! Output formats for a parsed document tree
//!
//!     - [html]: the HTML fragment, plain or with source line numbers.
//!     - [treeviz]: one line per node, for eyeballing the structure.
//!     - [json]: the tree serialized with serde.

pub mod html;
pub mod json;
pub mod treeviz;

pub use html::{HtmlWriter, ToHtml};
pub use json::to_json;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_linum};
