//! Element descriptor types reported by the preview-frame instrumentor.

use serde::{Deserialize, Serialize};

/// Bounding rectangle of an element in frame-viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Scroll offsets of the preview document at capture time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

/// Snapshot of one DOM element's identity, content, and geometry.
///
/// Indices are assigned in document-traversal order starting at 1 and are
/// only meaningful within the lifetime of one loaded document; every subtree
/// mutation re-runs the full indexing pass, so indices must never be cached
/// across reloads.
///
/// The markup fields carry the instrumentor's bounded snapshots: outer
/// markup capped at 1000 characters (large elements collapse to opening tag
/// plus up to 200 characters of trimmed text), inner markup at 500, text
/// content at 100. The caps bound message size only; they carry no other
/// meaning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementDescriptor {
    /// 1-based index unique within the current document snapshot.
    pub index: u32,
    /// Lowercased tag name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Trimmed text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "outerHTML", skip_serializing_if = "Option::is_none")]
    pub outer_html: Option<String>,
    #[serde(rename = "innerHTML", skip_serializing_if = "Option::is_none")]
    pub inner_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rect: Option<ElementRect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollOffset>,
}

impl ElementDescriptor {
    /// Short human-readable label, e.g. `#3 (div)`.
    pub fn label(&self) -> String {
        match &self.tag_name {
            Some(tag) => format!("#{} ({})", self.index, tag),
            None => format!("#{}", self.index),
        }
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
