use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// The automation interface cannot be reached: wrong OS, no Notes app,
    /// or automation permission denied.
    #[error("Apple Notes is not reachable: {0}")]
    Unavailable(String),
    #[error("note query failed: {0}")]
    Failed(String),
    #[error("note query output exceeded {limit} bytes")]
    OutputTooLarge { limit: usize },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    /// Whether this is the environment-capability failure rather than a
    /// generic one.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
