use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Fetch the most recent note and write it as a post, overwriting any
    /// post with the same name.
    #[command(name = "fetch-latest")]
    FetchLatest(FetchLatestArgs),
    /// Fetch recent notes into the notes cache for `import-notes`.
    #[command(name = "fetch-notes")]
    FetchNotes(FetchNotesArgs),
    /// Write cached notes as posts after confirmation. Existing posts are
    /// skipped.
    #[command(name = "import-notes")]
    ImportNotes(ImportNotesArgs),
    /// Build the site and check the output.
    #[command(name = "smoke-test")]
    SmokeTest(SmokeTestArgs),
    /// Dump the JSON schema of the notes cache.
    Schema,
}

/// Arguments for `til fetch-latest`.
#[derive(Clone, Debug, Args)]
pub struct FetchLatestArgs {
    /// Read captured adapter output from a file instead of running osascript.
    #[arg(long)]
    pub from_file: Option<String>,
}

/// Arguments for `til fetch-notes`.
#[derive(Clone, Debug, Args)]
pub struct FetchNotesArgs {
    /// Maximum notes to fetch (defaults to `source.fetch_limit`).
    #[arg(long)]
    pub limit: Option<u32>,
    /// Read captured adapter output from a file instead of running osascript.
    #[arg(long)]
    pub from_file: Option<String>,
}

/// Arguments for `til import-notes`.
#[derive(Clone, Debug, Args)]
pub struct ImportNotesArgs {
    /// Import without asking for confirmation.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `til smoke-test`.
#[derive(Clone, Debug, Args)]
pub struct SmokeTestArgs {
    /// Check the existing build output without running the build command.
    #[arg(long)]
    pub skip_build: bool,
}
