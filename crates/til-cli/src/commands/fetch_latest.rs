use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use til_core::{CodecError, NormalizedNote};
use til_core::codec::decode_single;
use til_core::post::iso_timestamp;
use til_store::{PostWriter, WriteMode, WriteOutcome};

use super::{EXCERPT_PREVIEW_CHARS, report_source_error};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::FetchLatestArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::ui;

#[derive(Debug, Serialize)]
struct FetchLatestResponse {
    title: String,
    date: String,
    excerpt: String,
    file: String,
    outcome: WriteOutcome,
}

/// Handle `til fetch-latest`.
pub fn handle(args: &FetchLatestArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let source = ctx.note_source(args.from_file.as_deref())?;

    ui::status("📝 Fetching latest note from Apple Notes...");
    let progress = Progress::spinner("querying Notes");
    let fetched = source.fetch_latest();
    progress.finish_clear();

    let raw = match fetched {
        Ok(raw) => raw,
        Err(error) => {
            report_source_error(&error, "note");
            return Ok(ExitCode::FAILURE);
        }
    };

    let record = match decode_single(&raw) {
        Ok(record) => record,
        Err(CodecError::Empty) => {
            eprintln!("❌ No notes found in Apple Notes.");
            return Ok(ExitCode::FAILURE);
        }
        Err(error) => {
            eprintln!("❌ Error parsing note data: {error}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let note = ctx.normalizer().normalize(&record, Utc::now());
    ui::status(format!("📄 Latest note: \"{}\"", note.title));
    ui::status(format!("📅 Date: {}", note.date_key));
    ui::status(format!(
        "📝 Excerpt: {}",
        ui::preview(&note.excerpt, EXCERPT_PREVIEW_CHARS)
    ));

    let outcome = write_latest(&ctx.post_writer(), &note, |message| ui::status(message))?;
    let file = note.post_filename();
    let date = iso_timestamp(&note);
    ui::status(format!("✅ Imported: {file}"));

    output(
        &FetchLatestResponse {
            date,
            title: note.title,
            excerpt: note.excerpt,
            file,
            outcome,
        },
        flags.format,
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Write the latest note, always replacing an existing post. `announce` hears
/// about the overwrite before the old file is touched.
fn write_latest(
    writer: &PostWriter,
    note: &NormalizedNote,
    mut announce: impl FnMut(&str),
) -> anyhow::Result<WriteOutcome> {
    let path = writer.path_for(note);
    if path.exists() {
        announce("⚠️  Note already exists. Overwriting...");
    }
    writer
        .write(note, WriteMode::Overwrite)
        .with_context(|| format!("failed to write post {}", path.display()))
}
