//! Post materialization.
//!
//! The filename `{date_key}-{slug}.md` is the only identity a post has. Two
//! notes that normalize to the same date and slug are the same post.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use til_core::NormalizedNote;
use til_core::post::render_post;

use crate::error::StoreError;

/// Collision policy for an existing post file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the existing file (single-note `fetch-latest`).
    Overwrite,
    /// Leave the existing file untouched (bulk `import-notes`).
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Imported/skipped counters for a bulk import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportTally {
    pub imported: usize,
    pub skipped: usize,
}

impl ImportTally {
    pub const fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Created | WriteOutcome::Overwritten => self.imported += 1,
            WriteOutcome::Skipped => self.skipped += 1,
        }
    }
}

/// Writes posts into one directory. The directory must already exist.
#[derive(Debug, Clone)]
pub struct PostWriter {
    posts_dir: PathBuf,
}

impl PostWriter {
    #[must_use]
    pub fn new(posts_dir: impl Into<PathBuf>) -> Self {
        Self {
            posts_dir: posts_dir.into(),
        }
    }

    #[must_use]
    pub fn posts_dir(&self) -> &Path {
        &self.posts_dir
    }

    #[must_use]
    pub fn path_for(&self, note: &NormalizedNote) -> PathBuf {
        self.posts_dir.join(note.post_filename())
    }

    /// Materialize `note` under `mode`.
    pub fn write(&self, note: &NormalizedNote, mode: WriteMode) -> Result<WriteOutcome, StoreError> {
        let path = self.path_for(note);
        let exists = path.exists();

        let outcome = match (mode, exists) {
            (WriteMode::Skip, true) => {
                tracing::debug!(path = %path.display(), "post exists; skipping");
                return Ok(WriteOutcome::Skipped);
            }
            (WriteMode::Overwrite, true) => {
                tracing::warn!(path = %path.display(), "post exists; overwriting");
                WriteOutcome::Overwritten
            }
            (_, false) => WriteOutcome::Created,
        };

        fs::write(&path, render_post(note)).map_err(|error| StoreError::io(&path, error))?;
        Ok(outcome)
    }
}
