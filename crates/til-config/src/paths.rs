//! Project-relative locations of posts and the notes cache.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

fn default_posts_dir() -> String {
    "src/posts".to_string()
}

fn default_cache_file() -> String {
    ".notes-cache/notes.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PathsConfig {
    #[serde(default = "default_posts_dir")]
    pub posts_dir: String,

    #[serde(default = "default_cache_file")]
    pub cache_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            posts_dir: default_posts_dir(),
            cache_file: default_cache_file(),
        }
    }
}

impl PathsConfig {
    /// Posts directory resolved against `root`. Absolute values win.
    #[must_use]
    pub fn posts_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.posts_dir)
    }

    /// Cache file resolved against `root`. Absolute values win.
    #[must_use]
    pub fn cache_file_in(&self, root: &Path) -> PathBuf {
        root.join(&self.cache_file)
    }
}
