//! End-to-end normalization of adapter output, as the fetch commands see it.

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use til_core::codec::{self, RECORD_DELIMITER};
use til_core::normalize::{EXCERPT_MAX_CHARS, Normalizer, clean_markup, slugify};
use til_core::post::render_post;

#[test]
fn hello_world_scenario() {
    assert_eq!(slugify("Hello, World!"), "hello-world");
    assert_eq!(
        clean_markup("<div>Line one</div><div>Line two</div>"),
        "Line one\nLine two"
    );
}

#[test]
fn single_note_output_normalizes_and_renders() {
    let raw = "Rust tip|||<div>Use <b>iterators</b>.</div>|||Wednesday, October 22, 2025 at 7:40:00 PM|||Wednesday, October 22, 2025 at 8:00:00 PM\n";
    let record = codec::decode_single(raw).expect("single note should decode");
    let note = Normalizer::default().normalize(&record, Utc::now());

    assert_eq!(note.title, "Rust tip");
    assert_eq!(note.slug, "rust-tip");
    assert_eq!(note.date_key, "2025-10-22");
    assert!(note.body.contains("iterators"), "{:?}", note.body);

    let rendered = render_post(&note);
    assert!(rendered.starts_with("---\nlayout: post.njk\ntitle: Rust tip\n"));
    assert!(rendered.ends_with(&format!("\n\n{}\n", note.body)));
}

#[test]
fn multi_note_output_drops_broken_records() {
    let raw = format!(
        "A|||<div>a</div>|||x|||not a date{RECORD_DELIMITER}broken{RECORD_DELIMITER}B|||<div>b</div>|||x|||2025-10-22"
    );
    let batch = codec::decode_batch(&raw);
    let now = Utc::now();
    let notes = Normalizer::default().normalize_all(&batch.records, now);

    assert_eq!(batch.dropped, 1);
    assert_eq!(notes.len(), 2);
    assert!(now - notes[0].date < Duration::seconds(1));
    assert_eq!(notes[1].date_key, "2025-10-22");
}

#[test]
fn long_first_paragraph_excerpt_is_capped() {
    let long = "word ".repeat(60);
    let raw = format!("Long|||<div>{long}</div>|||x|||2025-10-22");
    let record = codec::decode_single(&raw).unwrap();
    let note = Normalizer::default().normalize(&record, Utc::now());

    assert!(note.excerpt.chars().count() <= EXCERPT_MAX_CHARS);
    assert!(note.excerpt.ends_with("..."));
}

#[test]
fn empty_multi_note_output_is_empty() {
    let batch = codec::decode_batch("");
    assert!(batch.records.is_empty());
    assert_eq!(batch.dropped, 0);
}
