use sha2::{Digest, Sha256};

/// Characters removed before slugging. They vanish rather than becoming
/// separators, so `v1.2` slugs to `v12`.
const STRIPPED: &[char] = &['*', '+', '~', '.', '(', ')', '\'', '"', '!', ':', '@'];

const SEPARATOR: char = '-';

/// URL-safe slug of `title`: lowercase `[a-z0-9-]`, no leading or trailing
/// separator, never two separators in a row. May be empty.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_separator = false;

    for ch in title.trim().chars().flat_map(char::to_lowercase) {
        if STRIPPED.contains(&ch) {
            continue;
        }
        let ch = fold_latin(ch);
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            pending_separator = false;
            out.push(ch);
        } else {
            pending_separator = true;
        }
    }

    out
}

/// Slug for a note, with a content hash fallback when the title has nothing
/// sluggable: `note-<8 hex of sha256(title \n body)>`.
#[must_use]
pub fn note_slug(title: &str, body: &str) -> String {
    let slug = slugify(title);
    if !slug.is_empty() {
        return slug;
    }

    let digest = Sha256::digest(format!("{title}\n{body}").as_bytes());
    let hex = digest
        .iter()
        .take(4)
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();
    format!("note-{hex}")
}

/// Map common accented Latin letters to their ASCII base.
const fn fold_latin(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
