//! # til-core
//!
//! Core types and pure transforms for the til blog toolchain.
//!
//! This crate provides the pieces shared by every other til crate:
//! - `RawRecord` / `NormalizedNote` data model
//! - The note interchange codec spoken by the AppleScript adapter
//! - Content normalization (markup cleanup, Markdown, dates, excerpt, slug)
//! - Post file rendering
//! - The versioned notes cache envelope
//!
//! Nothing in here touches the filesystem or spawns processes.

pub mod cache;
pub mod codec;
pub mod errors;
pub mod normalize;
pub mod note;
pub mod post;

pub use errors::{CodecError, CoreError};
pub use note::{NormalizedNote, RawRecord};
