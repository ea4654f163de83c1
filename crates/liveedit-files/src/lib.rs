//! # liveedit Files
//!
//! The file service: everything the editor reads from disk goes through
//! here. All operations take paths relative to a configured project root
//! and refuse to resolve anything outside it.
//!
//! - [`FileService::list_directory`] - browse directories and `.html` files
//! - [`FileService::read_file`] - raw file content
//! - [`FileService::preview`] - file content with a `<base>` tag injected so
//!   relative asset references resolve against the asset-serving route

mod preview;
mod service;

pub use preview::{inject_base_tag, ASSET_ROUTE};
pub use service::FileService;
