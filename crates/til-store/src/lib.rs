//! # til-store
//!
//! Filesystem side of til:
//! - `posts`: writes normalized notes as post files, in overwrite or skip mode
//! - `cache`: the on-disk notes cache shared by `fetch-notes` and
//!   `import-notes`
//!
//! Flows are single-operator; nothing here locks files.

pub mod cache;
mod error;
pub mod posts;

pub use cache::NotesCache;
pub use error::StoreError;
pub use posts::{ImportTally, PostWriter, WriteMode, WriteOutcome};
