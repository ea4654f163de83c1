//! Prompt construction for edit requests.
//!
//! Every dispatch carries two prompt variants: the *full* prompt embeds the
//! element context inline and exists for debugging and display; the
//! *simplified* prompt is what the process actually receives as its `-p`
//! argument, with the bulk context streamed via standard input instead.

use std::path::PathBuf;

use liveedit_protocols::{DispatchError, ElementDescriptor};

use crate::cli::CliTool;

/// A validated edit submission.
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub cli: CliTool,
    /// Absolute path of the file being edited.
    pub file_path: PathBuf,
    pub instructions: String,
    /// Present for component edits; `None` targets the whole page.
    pub element: Option<ElementDescriptor>,
}

/// Human-readable prompt describing the edit intent.
///
/// Component edits name the element and embed its captured markup (or
/// trimmed text as fallback) as context; page edits just name the file.
pub fn full_prompt(request: &EditRequest) -> String {
    let path = request.file_path.display();
    match &request.element {
        Some(element) => {
            let context = if let Some(markup) = &element.outer_html {
                format!("\n\nCurrent HTML:\n{}", markup)
            } else if let Some(content) = &element.content {
                format!("\n\nCurrent content: \"{}\"", content)
            } else {
                String::new()
            };
            format!(
                "Modify component {} in {}.{}\n\nInstructions: {}",
                element.label(),
                path,
                context,
                request.instructions
            )
        }
        None => format!(
            "Modify the following {}. Instructions: {}",
            path, request.instructions
        ),
    }
}

/// The simplified prompt plus the payload streamed via standard input.
///
/// Component edits with a captured markup snapshot send the markup
/// (prefixed with the file path); everything else re-reads the file from
/// disk at dispatch time so the tool sees the current bytes, never the
/// browser's stale copy.
pub async fn simplified_prompt_and_stdin(
    request: &EditRequest,
) -> Result<(String, String), DispatchError> {
    if let Some(element) = &request.element {
        if let Some(markup) = &element.outer_html {
            let payload = format!("File: {}\n\n{}", request.file_path.display(), markup);
            let prompt = format!(
                "Modify the HTML element provided via stdin. {}",
                request.instructions
            );
            return Ok((prompt, payload));
        }
    }

    let payload = tokio::fs::read_to_string(&request.file_path)
        .await
        .map_err(|e| DispatchError::ReadFailure(request.file_path.clone(), e))?;
    let prompt = format!(
        "Modify the HTML file provided via stdin ({}). {}",
        request.file_path.display(),
        request.instructions
    );
    Ok((prompt, payload))
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
