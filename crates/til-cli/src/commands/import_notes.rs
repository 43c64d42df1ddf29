use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use til_store::{ImportTally, NotesCache, PostWriter, StoreError, WriteMode, WriteOutcome};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportNotesArgs;
use crate::confirm::{AssumeYes, Confirm, LineConfirm};
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

const CONFIRM_PROMPT: &str = "Import all notes? (y/n): ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedPost {
    pub file: String,
    pub title: String,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub posts: Vec<ImportedPost>,
}

/// How an import run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportReport {
    CacheMissing,
    Empty,
    Cancelled,
    Completed(ImportSummary),
}

/// Handle `til import-notes`.
pub fn handle(args: &ImportNotesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    ui::status("📥 Importing notes to blog...");

    let cache = ctx.notes_cache();
    let writer = ctx.post_writer();
    let report = if args.yes {
        run_import(&cache, &writer, &mut AssumeYes)?
    } else {
        run_import(&cache, &writer, &mut LineConfirm::stdin())?
    };

    match report {
        ImportReport::CacheMissing => {
            eprintln!("❌ No notes found. Run \"til fetch-notes\" first.");
            Ok(ExitCode::FAILURE)
        }
        ImportReport::Empty => {
            ui::status("No notes to import.");
            Ok(ExitCode::SUCCESS)
        }
        ImportReport::Cancelled => {
            ui::status("Import cancelled.");
            Ok(ExitCode::SUCCESS)
        }
        ImportReport::Completed(summary) => {
            ui::status("📊 Import complete!");
            ui::status(format!("   Imported: {}", summary.imported));
            ui::status(format!("   Skipped: {}", summary.skipped));
            output(&summary, flags.format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Read the cache, list it, ask once, then write every note in skip mode.
/// Nothing is written unless `confirm` approves.
pub fn run_import(
    cache: &NotesCache,
    writer: &PostWriter,
    confirm: &mut dyn Confirm,
) -> anyhow::Result<ImportReport> {
    let cached = match cache.read() {
        Ok(cached) => cached,
        Err(StoreError::CacheMissing(path)) => {
            tracing::debug!(path = %path.display(), "notes cache missing");
            return Ok(ImportReport::CacheMissing);
        }
        Err(error) => {
            return Err(error).context("failed to read notes cache");
        }
    };

    if cached.notes.is_empty() {
        return Ok(ImportReport::Empty);
    }

    ui::status(format!("Found {} note(s) to import:", cached.notes.len()));
    for (index, note) in cached.notes.iter().enumerate() {
        ui::status(format!("{}. {} ({})", index + 1, note.title, note.date_key));
    }

    if !confirm
        .confirm(CONFIRM_PROMPT)
        .context("failed to read confirmation")?
    {
        return Ok(ImportReport::Cancelled);
    }

    let mut tally = ImportTally::default();
    let mut posts = Vec::with_capacity(cached.notes.len());
    for note in &cached.notes {
        let outcome = writer
            .write(note, WriteMode::Skip)
            .with_context(|| format!("failed to write post for \"{}\"", note.title))?;
        tally.record(outcome);

        let filename = note.post_filename();
        match outcome {
            WriteOutcome::Skipped => ui::status(format!("⏭️  Skipping \"{}\" - already exists", note.title)),
            WriteOutcome::Created | WriteOutcome::Overwritten => ui::status(format!("✅ Imported: {filename}")),
        }
        posts.push(ImportedPost {
            file: filename,
            title: note.title.clone(),
            outcome,
        });
    }

    Ok(ImportReport::Completed(ImportSummary {
        imported: tally.imported,
        skipped: tally.skipped,
        posts,
    }))
}
