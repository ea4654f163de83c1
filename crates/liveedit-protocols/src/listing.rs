//! File-browser listing types.

use serde::{Deserialize, Serialize};

/// Kind of a file-browser entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FsEntryKind {
    File,
    Directory,
}

/// A single file-browser entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FsEntry {
    pub name: String,
    /// Path relative to the project root.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: FsEntryKind,
}

/// Result of listing one directory under the project root.
///
/// Only directories and `.html` files appear; dotfiles and the dependency
/// cache are filtered out by the file service. `parent_path` is `None` at
/// the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryListing {
    pub current_path: String,
    pub parent_path: Option<String>,
    pub directories: Vec<FsEntry>,
    pub files: Vec<FsEntry>,
    /// Directories followed by files, the order the picker renders.
    pub items: Vec<FsEntry>,
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
