//! # liveedit Protocols
//!
//! Shared data model and error types for the liveedit tool.
//!
//! Everything that crosses a component boundary lives here:
//!
//! - [`ElementDescriptor`] - snapshot of one DOM element reported by the
//!   preview-frame instrumentor
//! - [`DirectoryListing`] / [`FsEntry`] - file-browser entries
//! - [`EditOutcome`] - result of one external CLI invocation
//! - [`FileServiceError`] / [`DispatchError`] - error taxonomies

pub mod edit;
pub mod element;
pub mod error;
pub mod listing;

pub use edit::EditOutcome;
pub use element::{ElementDescriptor, ElementRect, ScrollOffset};
pub use error::{DispatchError, FileServiceError};
pub use listing::{DirectoryListing, FsEntry, FsEntryKind};
