use std::process::ExitCode;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<ExitCode> {
    match command {
        Commands::FetchLatest(args) => commands::fetch_latest::handle(&args, ctx, flags),
        Commands::FetchNotes(args) => commands::fetch_notes::handle(&args, ctx, flags),
        Commands::ImportNotes(args) => commands::import_notes::handle(&args, ctx, flags),
        Commands::SmokeTest(args) => commands::smoke_test::handle(&args, ctx, flags),
        Commands::Schema => unreachable!("schema is pre-dispatched in main"),
    }
}
