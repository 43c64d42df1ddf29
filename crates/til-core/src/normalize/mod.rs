//! Content normalization: `RawRecord` → `NormalizedNote`.
//!
//! Steps, per record:
//! 1. Body: Notes markup cleanup, then HTML → Markdown, trimmed.
//! 2. Date: modification timestamp, or `now` when it does not parse.
//! 3. Excerpt: first non-blank paragraph, capped at 150 characters.
//! 4. Slug: from the trimmed title, with a content-hash fallback.
//! 5. Date key: `yyyy-MM-dd` in local time.

pub mod date;
pub mod excerpt;
pub mod markup;
pub mod slug;

use chrono::{DateTime, Utc};

pub use date::{date_key, parse_timestamp, resolve_date};
pub use excerpt::{EXCERPT_MAX_CHARS, excerpt};
pub use markup::{Html2TextConverter, MarkdownConverter, clean_markup, html_to_markdown};
pub use slug::{note_slug, slugify};

use crate::note::{NormalizedNote, RawRecord};

/// Pure transform from raw adapter records to normalized notes.
#[derive(Debug, Clone)]
pub struct Normalizer<C = Html2TextConverter> {
    converter: C,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(Html2TextConverter::default())
    }
}

impl<C: MarkdownConverter> Normalizer<C> {
    pub const fn new(converter: C) -> Self {
        Self { converter }
    }

    /// Normalize one record. `now` is substituted for an unparseable
    /// modification timestamp.
    pub fn normalize(&self, record: &RawRecord, now: DateTime<Utc>) -> NormalizedNote {
        let title = record.title.trim().to_string();
        let body = html_to_markdown(&record.raw_body, &self.converter);
        let date = resolve_date(&record.modified_at, now);
        let excerpt = excerpt(&body);
        let slug = note_slug(&title, &body);

        tracing::debug!(%title, %slug, "normalized note");

        NormalizedNote {
            date_key: date_key(&date),
            created_at: parse_timestamp(&record.created_at),
            title,
            body,
            date,
            excerpt,
            slug,
        }
    }

    /// Normalize every record, preserving order.
    pub fn normalize_all(&self, records: &[RawRecord], now: DateTime<Utc>) -> Vec<NormalizedNote> {
        records
            .iter()
            .map(|record| self.normalize(record, now))
            .collect()
    }
}
