//! Edit outcome reported back to the browser.

use serde::{Deserialize, Serialize};

/// Outcome of one external CLI invocation.
///
/// A nonzero exit code is an unsuccessful outcome, not an error: the
/// process ran to completion and its captured output is part of the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditOutcome {
    pub success: bool,
    pub message: String,
    /// Captured standard output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Captured standard error, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The simplified prompt actually handed to the process.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Full human-readable prompt, kept for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_code: Option<i32>,
}

impl EditOutcome {
    /// Successful run: exit code 0, captured output, both prompt variants.
    pub fn succeeded(output: String, prompt: String, full_prompt: String) -> Self {
        Self {
            success: true,
            message: "Command executed successfully".to_string(),
            output: Some(output),
            error: None,
            prompt: Some(prompt),
            full_prompt: Some(full_prompt),
            exit_code: Some(0),
        }
    }

    /// Process ran but reported failure through its exit code.
    pub fn failed(code: i32, output: String, error: String, prompt: String) -> Self {
        Self {
            success: false,
            message: format!("Command failed with exit code {}", code),
            output: Some(output),
            error: Some(error),
            prompt: Some(prompt),
            full_prompt: None,
            exit_code: Some(code),
        }
    }

    /// The process could not be spawned at all.
    pub fn spawn_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            message: format!("Error spawning command: {}", message),
            output: None,
            error: Some(message),
            prompt: None,
            full_prompt: None,
            exit_code: None,
        }
    }
}
