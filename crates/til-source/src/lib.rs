//! # til-source
//!
//! Note source adapter. Queries Apple Notes through `osascript` and returns
//! the raw interchange text decoded by `til_core::codec`.
//!
//! The adapter is read-only. Anything that goes wrong is reported as a
//! [`SourceError`]; callers decide whether that is fatal.

mod error;
pub mod script;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

pub use error::SourceError;
use til_config::SourceConfig;

/// Failure text that means the Notes automation surface is unreachable
/// rather than the query being wrong.
const UNAVAILABLE_MARKERS: &[&str] = &[
    "osascript: command not found",
    "osascript: not found",
    "Application isn’t running",
    "Application isn't running",
    "Not authorized to send Apple events",
    "(-600)",
    "(-1743)",
    "(-10814)",
];

/// Where raw note records come from.
pub trait NoteSource {
    /// The most recently modified note as a single record, or `""` when there
    /// are no notes.
    fn fetch_latest(&self) -> Result<String, SourceError>;

    /// Up to `limit` recent notes joined by the record delimiter, or `""`.
    fn fetch_recent(&self, limit: u32) -> Result<String, SourceError>;
}

/// [`NoteSource`] that runs AppleScript through `osascript`.
#[derive(Debug, Clone)]
pub struct OsaScriptSource {
    bin: String,
    folder: String,
    max_output_bytes: usize,
}

impl OsaScriptSource {
    #[must_use]
    pub fn from_config(config: &SourceConfig) -> Self {
        Self {
            bin: config.osascript_bin.clone(),
            folder: config.folder.clone(),
            max_output_bytes: config.max_output_bytes,
        }
    }

    fn run(&self, script: &str) -> Result<String, SourceError> {
        tracing::debug!(bin = %self.bin, folder = %self.folder, "running note query");

        let output = Command::new(&self.bin)
            .arg("-e")
            .arg(script)
            .output()
            .map_err(|error| match error.kind() {
                ErrorKind::NotFound => {
                    SourceError::Unavailable(format!("{} not found: {error}", self.bin))
                }
                _ => SourceError::Io(error),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(&self.bin, &stderr));
        }

        if output.stdout.len() > self.max_output_bytes {
            return Err(SourceError::OutputTooLarge {
                limit: self.max_output_bytes,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(strip_trailing_newline(&stdout).to_string())
    }
}

impl NoteSource for OsaScriptSource {
    fn fetch_latest(&self) -> Result<String, SourceError> {
        self.run(&script::latest_note(&self.folder))
    }

    fn fetch_recent(&self, limit: u32) -> Result<String, SourceError> {
        self.run(&script::recent_notes(&self.folder, limit))
    }
}

/// [`NoteSource`] serving previously captured adapter output.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    output: String,
}

impl StaticSource {
    #[must_use]
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, SourceError> {
        let output = fs::read_to_string(path)?;
        Ok(Self::new(strip_trailing_newline(&output)))
    }
}

impl NoteSource for StaticSource {
    fn fetch_latest(&self) -> Result<String, SourceError> {
        Ok(self.output.clone())
    }

    fn fetch_recent(&self, _limit: u32) -> Result<String, SourceError> {
        Ok(self.output.clone())
    }
}

fn classify_failure(bin: &str, stderr: &str) -> SourceError {
    if UNAVAILABLE_MARKERS
        .iter()
        .any(|marker| stderr.contains(marker))
    {
        SourceError::Unavailable(stderr.to_string())
    } else if stderr.is_empty() {
        SourceError::Failed(format!("{bin} exited unsuccessfully"))
    } else {
        SourceError::Failed(stderr.to_string())
    }
}

/// `osascript` terminates its result with a newline that is not note data.
fn strip_trailing_newline(text: &str) -> &str {
    text.strip_suffix('\n').unwrap_or(text)
}
