//! HTML body cleanup and Markdown conversion.

use std::sync::LazyLock;

use regex::Regex;

/// Adjacent `</div><div>` pairs are one line boundary, not two.
static DIV_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</div>\s*<div>").expect("div boundary pattern is valid")
});

static DIV_OR_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?div>|<br\s*/?>").expect("div/br pattern is valid")
});

static NEWLINES_AFTER_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(</?(?:{BLOCK_TAGS})\b[^>]*>)[ \t]*\n\s*"))
        .expect("block tag pattern is valid")
});

static NEWLINES_BEFORE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\s*\n[ \t]*(</?(?:{BLOCK_TAGS})\b)"))
        .expect("block tag pattern is valid")
});

const BLOCK_TAGS: &str = "ul|ol|li|p|h[1-6]|pre|blockquote|table|thead|tbody|tr|td|th|hr";

/// Converts an HTML fragment to Markdown.
///
/// Implementations must be pure: the same input yields the same output.
pub trait MarkdownConverter {
    fn convert(&self, html: &str) -> String;
}

/// [`MarkdownConverter`] backed by the `html2text` crate.
#[derive(Debug, Clone, Copy)]
pub struct Html2TextConverter {
    width: usize,
}

impl Html2TextConverter {
    #[must_use]
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Default for Html2TextConverter {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl MarkdownConverter for Html2TextConverter {
    fn convert(&self, html: &str) -> String {
        html2text::from_read(html.as_bytes(), self.width)
    }
}

/// Rewrite the Notes block markup (`<div>`, `</div>`, `<br>`) into plain
/// newlines and trim the result.
#[must_use]
pub fn clean_markup(html: &str) -> String {
    let joined = DIV_BOUNDARY.replace_all(html, "\n");
    DIV_OR_BREAK.replace_all(&joined, "\n").trim().to_string()
}

/// Full body conversion: cleanup, then one pass through `converter`.
///
/// The whole fragment is converted at once so link references are numbered
/// across the note and list items keep their enclosing list. Line breaks
/// from the cleanup are carried as `<br>`.
pub fn html_to_markdown<C: MarkdownConverter + ?Sized>(html: &str, converter: &C) -> String {
    let fragment = breaks_to_html(&clean_markup(html));
    converter.convert(&fragment).trim().to_string()
}

/// Turn cleaned newlines into `<br>`. Newlines next to a block tag are layout
/// whitespace and are dropped instead, so `<ul>\n<li>` stays a list.
fn breaks_to_html(cleaned: &str) -> String {
    let after = NEWLINES_AFTER_BLOCK.replace_all(cleaned, "${1}");
    let before = NEWLINES_BEFORE_BLOCK.replace_all(&after, "${1}");
    before.replace('\n', "<br>")
}
