/// Maximum excerpt length in characters, ellipsis included.
pub const EXCERPT_MAX_CHARS: usize = 150;

const ELLIPSIS: &str = "...";

/// First non-blank paragraph of `markdown`, truncated to
/// [`EXCERPT_MAX_CHARS`].
///
/// Paragraphs are separated by a blank line (`"\n\n"`). A paragraph longer
/// than the limit keeps its first 147 characters followed by `...`.
#[must_use]
pub fn excerpt(markdown: &str) -> String {
    let first = markdown
        .split("\n\n")
        .find(|paragraph| !paragraph.trim().is_empty())
        .unwrap_or("");

    if first.chars().count() > EXCERPT_MAX_CHARS {
        let keep = EXCERPT_MAX_CHARS - ELLIPSIS.len();
        let mut truncated = first.chars().take(keep).collect::<String>();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        first.to_string()
    }
}
