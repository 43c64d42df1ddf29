use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One note as it crosses the adapter boundary, before any cleanup.
///
/// Timestamps stay in the source's native text form; see
/// [`crate::normalize::date`] for how they are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    pub title: String,
    pub raw_body: String,
    pub created_at: String,
    pub modified_at: String,
}

impl RawRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        raw_body: impl Into<String>,
        created_at: impl Into<String>,
        modified_at: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            raw_body: raw_body.into(),
            created_at: created_at.into(),
            modified_at: modified_at.into(),
        }
    }
}

/// A note after normalization, ready to be written as a post or cached.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedNote {
    /// Trimmed title.
    pub title: String,
    /// Markdown body, trimmed.
    pub body: String,
    /// Resolved from the modification timestamp, or the fetch time when that
    /// could not be parsed.
    pub date: DateTime<Utc>,
    /// First paragraph preview, at most 150 characters.
    pub excerpt: String,
    /// `date` as `yyyy-MM-dd` in local time.
    #[serde(alias = "dateStr")]
    pub date_key: String,
    /// URL-safe form of the title. Never empty.
    pub slug: String,
    /// Creation timestamp when the source value parsed. Display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NormalizedNote {
    /// Post filename and deduplication key: `{date_key}-{slug}.md`.
    #[must_use]
    pub fn post_filename(&self) -> String {
        format!("{}-{}.md", self.date_key, self.slug)
    }
}
