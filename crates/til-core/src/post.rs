//! Post file rendering.
//!
//! A post is a front matter block followed by the Markdown body:
//!
//! ```text
//! ---
//! layout: post.njk
//! title: {title}
//! date: {iso timestamp}
//! excerpt: {excerpt}
//! ---
//!
//! {body}
//! ```

use chrono::SecondsFormat;

use crate::note::NormalizedNote;

/// Template the site generator renders posts with.
pub const POST_LAYOUT: &str = "post.njk";

/// ISO-8601 UTC timestamp with millisecond precision, e.g.
/// `2025-10-22T19:40:00.000Z`.
#[must_use]
pub fn iso_timestamp(note: &NormalizedNote) -> String {
    note.date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Full file contents for `note`.
#[must_use]
pub fn render_post(note: &NormalizedNote) -> String {
    format!(
        "---\nlayout: {POST_LAYOUT}\ntitle: {}\ndate: {}\nexcerpt: {}\n---\n\n{}\n",
        note.title,
        iso_timestamp(note),
        note.excerpt,
        note.body
    )
}
