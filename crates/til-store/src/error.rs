use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("notes cache is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("notes cache not found at '{0}'")]
    CacheMissing(PathBuf),
    #[error(transparent)]
    Core(#[from] til_core::CoreError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
