//! Rendering options shared by the library entry points, the pipeline stages and the CLI.

use crate::bmd::normalization::DEFAULT_TAB_WIDTH;
use serde::{Deserialize, Serialize};

/// Knobs for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Number of spaces that make one indentation level.
    pub tab_width: usize,
    /// Prefix each output line with its source line number.
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            line_numbers: false,
        }
    }
}
