//! JsonSchema validation for the notes cache envelope.

use chrono::{TimeZone, Utc};
use schemars::schema_for;
use til_core::cache::NotesCacheFile;
use til_core::note::NormalizedNote;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn sample_note(slug: &str, created: bool) -> NormalizedNote {
    NormalizedNote {
        title: format!("Note {slug}"),
        body: "Body paragraph.\n\nMore.".into(),
        date: Utc.with_ymd_and_hms(2025, 10, 22, 19, 40, 0).unwrap(),
        excerpt: "Body paragraph.".into(),
        date_key: "2025-10-22".into(),
        slug: slug.into(),
        created_at: created.then(|| Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap()),
    }
}

#[test]
fn cache_envelope_matches_its_schema() {
    let file = NotesCacheFile::new(
        vec![sample_note("a", true), sample_note("b", false)],
        Utc::now(),
    );

    let schema = serde_json::to_value(schema_for!(NotesCacheFile)).unwrap();
    let instance = serde_json::to_value(&file).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
}

#[test]
fn schema_rejects_note_without_slug() {
    let schema = serde_json::to_value(schema_for!(NotesCacheFile)).unwrap();
    let mut instance = serde_json::to_value(NotesCacheFile::new(
        vec![sample_note("a", false)],
        Utc::now(),
    ))
    .unwrap();
    instance["notes"][0]
        .as_object_mut()
        .expect("note is an object")
        .remove("slug");

    assert!(!validate_against_schema(&schema, &instance).is_empty());
}
