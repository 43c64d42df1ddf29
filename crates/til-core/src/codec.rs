//! Note interchange codec.
//!
//! The AppleScript adapter serializes each note as four fields joined by
//! [`FIELD_DELIMITER`], in the order `title, bodyHtml, creationTimestamp,
//! modificationTimestamp`. Multi-note responses join records with
//! [`RECORD_DELIMITER`].
//!
//! Invariants:
//! - A record decodes only if it splits into exactly [`FIELD_COUNT`] fields.
//! - No field may contain either delimiter. [`encode_record`] enforces this;
//!   the AppleScript side cannot, so a colliding note fails to decode.
//! - For delimiter-free fields, `decode_record(encode_record(r)) == r`.

use crate::errors::CodecError;
use crate::note::RawRecord;

pub const FIELD_DELIMITER: &str = "|||";
pub const RECORD_DELIMITER: &str = "###NOTESEPARATOR###";
pub const FIELD_COUNT: usize = 4;

/// Result of decoding a multi-note response.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchDecode {
    pub records: Vec<RawRecord>,
    /// Records that did not split into four fields.
    pub dropped: usize,
}

/// Serialize one record.
pub fn encode_record(record: &RawRecord) -> Result<String, CodecError> {
    let fields = [
        ("title", record.title.as_str()),
        ("body", record.raw_body.as_str()),
        ("created_at", record.created_at.as_str()),
        ("modified_at", record.modified_at.as_str()),
    ];

    for (field, value) in fields {
        for delimiter in [FIELD_DELIMITER, RECORD_DELIMITER] {
            if value.contains(delimiter) {
                return Err(CodecError::DelimiterCollision { field, delimiter });
            }
        }
    }

    Ok(fields
        .iter()
        .map(|(_, value)| *value)
        .collect::<Vec<_>>()
        .join(FIELD_DELIMITER))
}

/// Serialize many records into one multi-note response.
pub fn encode_batch(records: &[RawRecord]) -> Result<String, CodecError> {
    let encoded = records
        .iter()
        .map(encode_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(encoded.join(RECORD_DELIMITER))
}

/// Split one record into its four fields. Field values are returned as-is.
pub fn decode_record(raw: &str) -> Result<RawRecord, CodecError> {
    let parts = raw.split(FIELD_DELIMITER).collect::<Vec<_>>();
    let [title, body, created, modified] = parts.as_slice() else {
        return Err(CodecError::FieldCount {
            expected: FIELD_COUNT,
            found: parts.len(),
        });
    };

    Ok(RawRecord::new(*title, *body, *created, *modified))
}

/// Decode single-note output: the whole text is one record.
///
/// Blank output is [`CodecError::Empty`]; a field-count mismatch is fatal.
pub fn decode_single(raw: &str) -> Result<RawRecord, CodecError> {
    if raw.trim().is_empty() {
        return Err(CodecError::Empty);
    }
    decode_record(raw)
}

/// Decode multi-note output, dropping malformed records.
///
/// Blank output decodes to an empty batch.
#[must_use]
pub fn decode_batch(raw: &str) -> BatchDecode {
    let mut batch = BatchDecode::default();

    for chunk in raw.split(RECORD_DELIMITER) {
        if chunk.trim().is_empty() {
            continue;
        }
        match decode_record(chunk) {
            Ok(record) => batch.records.push(record),
            Err(error) => {
                tracing::warn!(%error, "dropping malformed note record");
                batch.dropped += 1;
            }
        }
    }

    batch
}
