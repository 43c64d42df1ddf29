use std::process::ExitCode;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use til_core::NormalizedNote;
use til_core::codec::decode_batch;
use til_core::normalize::Normalizer;
use til_source::{NoteSource, SourceError};

use super::{EXCERPT_PREVIEW_CHARS, report_source_error};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchNotesArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Debug, Serialize)]
struct FetchedNote {
    index: usize,
    title: String,
    date: String,
    excerpt: String,
}

#[derive(Debug, Serialize)]
struct FetchNotesResponse {
    count: usize,
    cache_file: Option<String>,
    notes: Vec<FetchedNote>,
}

/// Handle `til fetch-notes`. Source failures degrade to an empty list, so
/// this always exits 0 unless the cache can't be written.
pub fn handle(args: &FetchNotesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let limit = args.limit.unwrap_or(ctx.config.source.fetch_limit).max(1);
    let source = ctx.note_source(args.from_file.as_deref())?;

    ui::status("📝 Fetching notes from Apple Notes...");
    let progress = Progress::spinner("querying Notes");
    let collected = collect_notes(source.as_ref(), &ctx.normalizer(), limit, Utc::now());
    progress.finish_clear();

    let notes = match collected {
        Ok(notes) if notes.is_empty() => {
            ui::status("No notes found in Apple Notes.");
            notes
        }
        Ok(notes) => notes,
        Err(error) => {
            report_source_error(&error, "notes");
            Vec::new()
        }
    };

    if notes.is_empty() {
        ui::status("No notes to display.");
        output(
            &FetchNotesResponse {
                count: 0,
                cache_file: None,
                notes: Vec::new(),
            },
            flags.format,
        )?;
        return Ok(ExitCode::SUCCESS);
    }

    ui::status(format!("Found {} note(s).", notes.len()));

    let cache = ctx.notes_cache();
    cache
        .write(&notes, Utc::now())
        .with_context(|| format!("failed to write notes cache {}", cache.path().display()))?;

    ui::status("✅ Notes fetched successfully!");
    ui::status("Run \"til import-notes\" to import them to your blog.");

    output(
        &FetchNotesResponse {
            count: notes.len(),
            cache_file: Some(cache.path().display().to_string()),
            notes: notes
                .iter()
                .enumerate()
                .map(|(index, note)| FetchedNote {
                    index: index + 1,
                    title: note.title.clone(),
                    date: note.date_key.clone(),
                    excerpt: ui::preview(&note.excerpt, EXCERPT_PREVIEW_CHARS),
                })
                .collect(),
        },
        flags.format,
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Query, decode and normalize up to `limit` notes. Nothing is printed here;
/// the caller reports once the spinner is gone.
fn collect_notes(
    source: &dyn NoteSource,
    normalizer: &Normalizer,
    limit: u32,
    now: DateTime<Utc>,
) -> Result<Vec<NormalizedNote>, SourceError> {
    let raw = source.fetch_recent(limit)?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut batch = decode_batch(&raw);
    if batch.dropped > 0 {
        tracing::warn!(dropped = batch.dropped, "some note records were malformed");
    }
    batch.records.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
    Ok(normalizer.normalize_all(&batch.records, now))
}
