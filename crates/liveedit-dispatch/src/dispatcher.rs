//! External CLI invocation.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

use liveedit_protocols::{DispatchError, EditOutcome};

use crate::prompt::{full_prompt, simplified_prompt_and_stdin, EditRequest};

/// Spawns the external CLI for one edit request and collects its result.
///
/// One request, one process, one attempt: there is no retry and no
/// server-side timeout (the browser enforces its own five-minute budget).
/// The child is spawned with `kill_on_drop` so a request abandoned by the
/// client takes the process down with it instead of leaking it.
#[derive(Debug, Clone)]
pub struct EditDispatcher {
    /// Working directory for spawned processes, normally the project root.
    work_dir: PathBuf,
}

impl EditDispatcher {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn work_dir(&self) -> &PathBuf {
        &self.work_dir
    }

    /// Run one edit request to completion.
    ///
    /// A nonzero exit code is a failure [`EditOutcome`], not an `Err`; the
    /// error variants cover requests that never reached the tool (stdin
    /// source unreadable, binary missing).
    pub async fn dispatch(&self, request: &EditRequest) -> Result<EditOutcome, DispatchError> {
        let full = full_prompt(request);
        let (simplified, stdin_payload) = simplified_prompt_and_stdin(request).await?;

        debug!(
            command = %request.cli.preview_line(&simplified),
            "dispatching edit"
        );
        debug!(
            stdin_preview = %truncate_for_log(&stdin_payload, 200),
            "stdin payload"
        );

        let mut command = Command::new(request.cli.program());
        command
            .args(request.cli.args(&simplified))
            .current_dir(&self.work_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|e| {
            warn!(cli = request.cli.program(), error = %e, "failed to spawn CLI");
            DispatchError::Spawn(e.to_string())
        })?;

        // Feed the payload concurrently with output collection so a child
        // that fills its stdout pipe before draining stdin cannot wedge the
        // dispatch. The stream closes when the writer drops.
        if let Some(mut stdin) = child.stdin.take() {
            tokio::spawn(async move {
                if let Err(e) = stdin.write_all(stdin_payload.as_bytes()).await {
                    debug!(error = %e, "stdin write ended early");
                }
            });
        }

        let output = child.wait_with_output().await?;
        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            info!(cli = request.cli.program(), "edit command succeeded");
            Ok(EditOutcome::succeeded(stdout, simplified, full))
        } else {
            let code = output.status.code().unwrap_or(-1);
            warn!(
                cli = request.cli.program(),
                code, "edit command failed"
            );
            Ok(EditOutcome::failed(code, stdout, stderr, simplified))
        }
    }
}

fn truncate_for_log(text: &str, max: usize) -> String {
    if text.len() <= max {
        text.to_string()
    } else {
        let mut end = max;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &text[..end])
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
