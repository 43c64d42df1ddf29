use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A layer failed to parse or does not fit [`crate::TilConfig`].
    #[error("failed to load til configuration: {0}")]
    Figment(#[from] figment::Error),

    /// The project `.env` exists but is malformed.
    #[error("failed to read {}: {source}", path.display())]
    Dotenv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A value parsed but the commands cannot work with it.
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}
