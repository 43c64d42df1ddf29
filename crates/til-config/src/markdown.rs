//! HTML to Markdown conversion settings.

use serde::{Deserialize, Serialize};

const fn default_wrap_width() -> usize {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MarkdownConfig {
    /// Column at which the converter wraps text. Large values keep
    /// paragraphs on one line.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
        }
    }
}
