//! Notes cache envelope.
//!
//! `til fetch-notes` stages normalized notes on disk and `til import-notes`
//! reads them back, possibly from a different build. The envelope carries a
//! schema version so the two sides never silently disagree about the shape.
//!
//! The first cache format was a bare JSON array of notes; it still reads as
//! version 1.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::note::NormalizedNote;

/// Version written by this build.
pub const CACHE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NotesCacheFile {
    /// Schema version of this envelope.
    pub v: u32,
    /// When the notes were fetched.
    pub fetched_at: DateTime<Utc>,
    pub notes: Vec<NormalizedNote>,
}

impl NotesCacheFile {
    #[must_use]
    pub const fn new(notes: Vec<NormalizedNote>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            v: CACHE_VERSION,
            fetched_at,
            notes,
        }
    }

    /// Parse cache JSON, accepting the legacy array form.
    ///
    /// The version is checked before the rest of the envelope, so a cache
    /// from a newer build is [`CoreError::UnsupportedCacheVersion`] even when
    /// its shape changed.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value = serde_json::from_str::<Value>(json)?;

        if value.is_array() {
            return Ok(Self {
                v: CACHE_VERSION,
                fetched_at: DateTime::<Utc>::UNIX_EPOCH,
                notes: serde_json::from_value(value)?,
            });
        }

        if let Some(found) = value.get("v").and_then(Value::as_u64)
            && found != u64::from(CACHE_VERSION)
        {
            return Err(CoreError::UnsupportedCacheVersion {
                found: u32::try_from(found).unwrap_or(u32::MAX),
                supported: CACHE_VERSION,
            });
        }

        Ok(serde_json::from_value(value)?)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
