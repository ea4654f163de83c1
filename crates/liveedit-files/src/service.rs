//! Contained filesystem access under the project root.

use std::cmp::Ordering;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use liveedit_protocols::{DirectoryListing, FileServiceError, FsEntry, FsEntryKind};

use crate::preview::inject_base_tag;

/// Directory name always excluded from listings, alongside dotfiles.
const DEPENDENCY_CACHE_DIR: &str = "node_modules";

/// File service rooted at the project directory.
///
/// Every operation resolves its relative path against the root and rejects
/// the request with [`FileServiceError::AccessDenied`] if the normalized
/// result would land outside it. Normalization is lexical, so traversal is
/// rejected even for paths that do not exist.
#[derive(Debug, Clone)]
pub struct FileService {
    root: PathBuf,
}

impl FileService {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a root-relative request path to an absolute one.
    ///
    /// Absolute request paths are not special-cased: joining replaces the
    /// root, and the containment check below rejects them unless they
    /// already point inside it.
    pub fn resolve(&self, requested: &str) -> Result<PathBuf, FileServiceError> {
        let resolved = normalize(&self.root.join(requested));
        if !resolved.starts_with(&self.root) {
            debug!(requested, "rejected path outside project root");
            return Err(FileServiceError::AccessDenied(PathBuf::from(requested)));
        }
        Ok(resolved)
    }

    /// List one directory: subdirectories and `.html` files only, each
    /// group sorted by name, dotfiles and the dependency cache excluded.
    pub async fn list_directory(
        &self,
        requested: &str,
    ) -> Result<DirectoryListing, FileServiceError> {
        let full = self.resolve(requested)?;

        let metadata = tokio::fs::metadata(&full).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FileServiceError::NotFound(full.clone())
            } else {
                FileServiceError::Io(e)
            }
        })?;
        if !metadata.is_dir() {
            return Err(FileServiceError::NotADirectory(full));
        }

        let mut directories = Vec::new();
        let mut files = Vec::new();

        let mut entries = tokio::fs::read_dir(&full).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name == DEPENDENCY_CACHE_DIR {
                continue;
            }

            let path = join_relative(requested, &name);
            let file_type = entry.file_type().await?;
            if file_type.is_dir() {
                directories.push(FsEntry {
                    name,
                    path,
                    kind: FsEntryKind::Directory,
                });
            } else if file_type.is_file() && name.ends_with(".html") {
                files.push(FsEntry {
                    name,
                    path,
                    kind: FsEntryKind::File,
                });
            }
        }

        directories.sort_by(|a, b| compare_names(&a.name, &b.name));
        files.sort_by(|a, b| compare_names(&a.name, &b.name));

        let items = directories.iter().chain(files.iter()).cloned().collect();
        Ok(DirectoryListing {
            current_path: requested.to_string(),
            parent_path: parent_of(requested),
            directories,
            files,
            items,
        })
    }

    /// Read a file as text.
    pub async fn read_file(&self, requested: &str) -> Result<String, FileServiceError> {
        let full = self.resolve(requested)?;
        tokio::fs::read_to_string(&full).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                FileServiceError::NotFound(full.clone())
            } else {
                FileServiceError::Io(e)
            }
        })
    }

    /// Read an HTML file and inject a `<base>` tag pointing at the asset
    /// route for the file's directory, so its relative references resolve.
    pub async fn preview(&self, requested: &str) -> Result<String, FileServiceError> {
        let content = self.read_file(requested).await?;
        let base_dir = parent_of(requested).unwrap_or_default();
        Ok(inject_base_tag(&content, &base_dir))
    }
}

/// Lexically normalize a path: strip `.` components and resolve `..`
/// without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Join a directory request path and an entry name with `/`, the separator
/// the browser-side picker uses.
fn join_relative(requested: &str, name: &str) -> String {
    if requested.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", requested.trim_end_matches('/'), name)
    }
}

/// Parent of a relative request path; `None` at the project root.
fn parent_of(requested: &str) -> Option<String> {
    if requested.is_empty() {
        return None;
    }
    let trimmed = requested.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(idx) => Some(trimmed[..idx].to_string()),
        None => Some(String::new()),
    }
}

/// Case-insensitive name ordering with a stable case-sensitive tiebreak.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
