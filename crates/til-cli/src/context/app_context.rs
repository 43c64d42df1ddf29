use std::path::{Path, PathBuf};

use anyhow::Context;
use til_config::TilConfig;
use til_core::normalize::{Html2TextConverter, Normalizer};
use til_source::{NoteSource, OsaScriptSource, StaticSource};
use til_store::{NotesCache, PostWriter};

/// Shared application resources initialized once at startup.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: TilConfig,
}

impl AppContext {
    /// Load `.env`, then layered configuration for `project_root`.
    pub fn init(project_root: PathBuf) -> anyhow::Result<Self> {
        let config = TilConfig::load_with_dotenv(&project_root)
            .with_context(|| format!("failed to load config for {}", project_root.display()))?;

        tracing::debug!(root = %project_root.display(), "application context ready");
        Ok(Self {
            project_root,
            config,
        })
    }

    #[must_use]
    pub fn post_writer(&self) -> PostWriter {
        PostWriter::new(self.config.paths.posts_dir_in(&self.project_root))
    }

    #[must_use]
    pub fn notes_cache(&self) -> NotesCache {
        NotesCache::new(self.config.paths.cache_file_in(&self.project_root))
    }

    #[must_use]
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(Html2TextConverter::new(self.config.markdown.wrap_width))
    }

    /// The configured `osascript` source, or captured output when
    /// `from_file` is given.
    pub fn note_source(&self, from_file: Option<&str>) -> anyhow::Result<Box<dyn NoteSource>> {
        match from_file {
            Some(path) => {
                let path = Path::new(path);
                let source = StaticSource::from_file(path)
                    .with_context(|| format!("failed to read captured notes from {}", path.display()))?;
                Ok(Box::new(source))
            }
            None => Ok(Box::new(OsaScriptSource::from_config(&self.config.source))),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn resources_resolve_against_project_root() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext {
            project_root: temp.path().to_path_buf(),
            config: TilConfig::default(),
        };

        assert_eq!(ctx.post_writer().posts_dir(), temp.path().join("src/posts"));
        assert_eq!(
            ctx.notes_cache().path(),
            temp.path().join(".notes-cache/notes.json")
        );
    }

    #[test]
    fn captured_source_is_served_verbatim() {
        let temp = TempDir::new().expect("tempdir should create");
        let capture = temp.path().join("capture.txt");
        std::fs::write(&capture, "T|||<div>b</div>|||c|||m\n").expect("capture should write");

        let ctx = AppContext {
            project_root: temp.path().to_path_buf(),
            config: TilConfig::default(),
        };
        let source = ctx
            .note_source(capture.to_str())
            .expect("captured source should open");
        assert_eq!(
            source.fetch_latest().expect("static source never fails"),
            "T|||<div>b</div>|||c|||m"
        );
    }

    #[test]
    fn missing_capture_file_is_an_error() {
        let temp = TempDir::new().expect("tempdir should create");
        let ctx = AppContext {
            project_root: temp.path().to_path_buf(),
            config: TilConfig::default(),
        };
        assert!(ctx.note_source(Some("/nonexistent/capture.txt")).is_err());
    }
}
