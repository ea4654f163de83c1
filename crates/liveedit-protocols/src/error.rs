//! Error taxonomies for the file service and edit dispatcher.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from directory listing, file reads, and preview transforms.
#[derive(Debug, Error)]
pub enum FileServiceError {
    /// The resolved path escapes the project root.
    #[error("Access denied: path outside project directory: {}", .0.display())]
    AccessDenied(PathBuf),

    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from turning an edit request into an external process invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The request is missing required fields.
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    /// The external binary could not be started.
    #[error("Error spawning command: {0}")]
    Spawn(String),

    /// The target file vanished between selection and dispatch.
    #[error("Error reading file for stdin: {}", .0.display())]
    ReadFailure(PathBuf, #[source] std::io::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
