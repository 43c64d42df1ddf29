//! On-disk notes cache.
//!
//! Written wholesale by every fetch and never deleted by import, so an
//! import can be re-run; already imported posts are skipped.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use til_core::{CoreError, NormalizedNote};
use til_core::cache::NotesCacheFile;

use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct NotesCache {
    path: PathBuf,
}

impl NotesCache {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the cache with `notes`, creating the cache directory if needed.
    pub fn write(&self, notes: &[NormalizedNote], fetched_at: DateTime<Utc>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|error| StoreError::io(parent, error))?;
        }

        let file = NotesCacheFile::new(notes.to_vec(), fetched_at);
        fs::write(&self.path, file.to_json()?).map_err(|error| StoreError::io(&self.path, error))?;

        tracing::debug!(path = %self.path.display(), count = notes.len(), "wrote notes cache");
        Ok(())
    }

    /// Read the cache. A missing file is [`StoreError::CacheMissing`].
    pub fn read(&self) -> Result<NotesCacheFile, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(StoreError::CacheMissing(self.path.clone()));
            }
            Err(error) => return Err(StoreError::io(&self.path, error)),
        };

        NotesCacheFile::from_json(&json).map_err(|error| match error {
            CoreError::MalformedCache(error) => StoreError::Json(error),
            other => StoreError::Core(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn note(slug: &str) -> NormalizedNote {
        NormalizedNote {
            title: slug.to_uppercase(),
            body: "b".into(),
            date: Utc.with_ymd_and_hms(2025, 10, 22, 19, 40, 0).unwrap(),
            excerpt: "b".into(),
            date_key: "2025-10-22".into(),
            slug: slug.into(),
            created_at: None,
        }
    }

    #[test]
    fn write_creates_directory_and_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let cache = NotesCache::new(dir.path().join(".notes-cache").join("notes.json"));
        let fetched_at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

        cache.write(&[note("a"), note("b")], fetched_at).unwrap();
        let file = cache.read().unwrap();

        assert_eq!(file.fetched_at, fetched_at);
        assert_eq!(file.notes, vec![note("a"), note("b")]);
    }

    #[test]
    fn write_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let cache = NotesCache::new(dir.path().join("notes.json"));

        cache.write(&[note("a"), note("b")], Utc::now()).unwrap();
        cache.write(&[note("c")], Utc::now()).unwrap();

        assert_eq!(cache.read().unwrap().notes, vec![note("c")]);
    }

    #[test]
    fn missing_cache_is_distinct_error() {
        let dir = tempfile::tempdir().unwrap();
        let cache = NotesCache::new(dir.path().join("absent.json"));
        assert!(matches!(cache.read(), Err(StoreError::CacheMissing(_))));
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, r#"{"v":9,"fetched_at":"2026-01-01T00:00:00Z","notes":[]}"#).unwrap();

        let error = NotesCache::new(&path).read().unwrap_err();
        assert!(matches!(
            error,
            StoreError::Core(CoreError::UnsupportedCacheVersion { found: 9, .. })
        ));
    }

    #[test]
    fn newer_version_is_rejected_before_its_shape_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, r#"{"v":2,"fetched_at":"2026-01-01T00:00:00Z","entries":[]}"#).unwrap();

        let error = NotesCache::new(&path).read().unwrap_err();
        assert!(matches!(
            error,
            StoreError::Core(CoreError::UnsupportedCacheVersion { found: 2, .. })
        ));
    }

    #[test]
    fn garbage_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            NotesCache::new(&path).read(),
            Err(StoreError::Json(_))
        ));
    }
}
