//! Error types for til-core.
//!
//! Filesystem and process errors live in `til-store` and `til-source`; the
//! CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while encoding or decoding interchange records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A record did not split into the expected number of fields.
    #[error("expected {expected} fields separated by '|||', found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field value contains one of the reserved delimiters.
    #[error("field '{field}' contains the reserved delimiter '{delimiter}'")]
    DelimiterCollision {
        field: &'static str,
        delimiter: &'static str,
    },

    /// The adapter returned nothing to decode.
    #[error("no note data in adapter output")]
    Empty,
}

/// Errors that can be raised by any til crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The notes cache is not valid JSON or does not fit the envelope.
    #[error("notes cache is malformed: {0}")]
    MalformedCache(#[from] serde_json::Error),

    /// The notes cache was written by an incompatible version.
    #[error("unsupported notes cache version {found} (this build reads version {supported})")]
    UnsupportedCacheVersion { found: u32, supported: u32 },
}
