//! AppleScript programs sent to `osascript`.
//!
//! Both scripts resolve the preferred folder first and fall back to the
//! default account when it does not exist. Notes are listed most recently
//! modified first, so `item 1` is the latest note.

const FIELD_JOIN: &str = r#" & "|||" & "#;

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn record_expr(var: &str) -> String {
    format!(
        "name of {var}{FIELD_JOIN}body of {var}{FIELD_JOIN}((creation date of {var}) as string){FIELD_JOIN}((modification date of {var}) as string)"
    )
}

/// Script returning the most recently modified note as one record.
#[must_use]
pub fn latest_note(folder: &str) -> String {
    format!(
        r#"tell application "Notes"
  try
    set latestNote to item 1 of (notes of folder {folder})
  on error
    set latestNote to item 1 of (notes of default account)
  end try
  return {record}
end tell
"#,
        folder = quote(folder),
        record = record_expr("latestNote"),
    )
}

/// Script returning up to `limit` recent notes joined by the record
/// delimiter.
#[must_use]
pub fn recent_notes(folder: &str, limit: u32) -> String {
    format!(
        r####"tell application "Notes"
  set notesList to {{}}
  try
    set allNotes to notes of folder {folder}
  on error
    set allNotes to notes of default account
  end try
  set noteCount to count of allNotes
  if noteCount > {limit} then
    set notesToProcess to items 1 thru {limit} of allNotes
  else
    set notesToProcess to allNotes
  end if
  repeat with aNote in notesToProcess
    set end of notesList to {record}
  end repeat
  set AppleScript's text item delimiters to "###NOTESEPARATOR###"
  return notesList as text
end tell
"####,
        folder = quote(folder),
        record = record_expr("aNote"),
    )
}
