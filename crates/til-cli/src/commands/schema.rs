use std::process::ExitCode;

use schemars::schema_for;
use til_core::cache::NotesCacheFile;

use crate::cli::GlobalFlags;
use crate::cli::OutputFormat;

/// Handle `til schema`. Prints the JSON Schema of the notes cache envelope;
/// `--format raw` prints it on one line.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    let schema = schema_for!(NotesCacheFile);
    let rendered = match flags.format {
        OutputFormat::Raw => serde_json::to_string(&schema)?,
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string_pretty(&schema)?,
    };
    println!("{rendered}");
    Ok(ExitCode::SUCCESS)
}
