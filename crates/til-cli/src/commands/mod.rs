pub mod dispatch;
pub mod fetch_latest;
pub mod fetch_notes;
pub mod import_notes;
pub mod schema;

use til_source::SourceError;

/// Characters of an excerpt shown in status lines.
const EXCERPT_PREVIEW_CHARS: usize = 80;

/// Print the user-facing message for a failed note query. The capability
/// failure gets its own wording so users know retrying won't help.
fn report_source_error(error: &SourceError, what: &str) {
    tracing::debug!(%error, "note source failed");
    if error.is_unavailable() {
        eprintln!("❌ Error: This script requires macOS with Apple Notes installed.");
        eprintln!("Make sure Apple Notes is accessible and you have notes in your library.");
    } else {
        eprintln!("❌ Error fetching {what}: {error}");
    }
}
