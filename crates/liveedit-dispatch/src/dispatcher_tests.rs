#![cfg(unix)]

use super::*;
use crate::cli::CliTool;
use liveedit_protocols::ElementDescriptor;
use tempfile::TempDir;

/// Write an executable script standing in for an AI CLI. Scripts receive
/// `-p <prompt>` like the real tools and read their context from stdin.
fn fake_cli(dir: &TempDir, name: &str, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

fn component_request(cli: &str, work: &TempDir) -> EditRequest {
    EditRequest {
        cli: CliTool::new(cli),
        file_path: work.path().join("index.html"),
        instructions: "center the card".to_string(),
        element: Some(ElementDescriptor {
            index: 2,
            tag_name: Some("div".to_string()),
            outer_html: Some("<div class=\"card\">body</div>".to_string()),
            ..Default::default()
        }),
    }
}

#[tokio::test]
async fn test_zero_exit_reports_success() {
    let work = TempDir::new().unwrap();
    let cli = fake_cli(&work, "fake-ok", "cat >/dev/null\necho applied the edit");

    let dispatcher = EditDispatcher::new(work.path());
    let request = component_request(&cli, &work);

    let outcome = dispatcher.dispatch(&request).await.unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.exit_code, Some(0));
    assert!(outcome.output.unwrap().contains("applied the edit"));
    assert!(outcome.prompt.is_some());
    assert!(outcome.full_prompt.is_some());
}

#[tokio::test]
async fn test_stdin_carries_element_markup() {
    let work = TempDir::new().unwrap();
    // Echo stdin back so the captured output proves what the tool received
    let cli = fake_cli(&work, "fake-echo", "cat");

    let dispatcher = EditDispatcher::new(work.path());
    let request = component_request(&cli, &work);

    let outcome = dispatcher.dispatch(&request).await.unwrap();
    assert!(outcome.success);

    let received = outcome.output.unwrap();
    assert!(received.contains("<div class=\"card\">body</div>"));
    assert!(received.starts_with("File: "));

    // The simplified prompt itself never carries the markup
    assert!(!outcome.prompt.unwrap().contains("<div"));
}

#[tokio::test]
async fn test_nonzero_exit_reports_failure_with_stderr() {
    let work = TempDir::new().unwrap();
    let cli = fake_cli(&work, "fake-fail", "cat >/dev/null\necho partial >&1\necho broke >&2\nexit 3");

    let dispatcher = EditDispatcher::new(work.path());
    let request = component_request(&cli, &work);

    let outcome = dispatcher.dispatch(&request).await.unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.exit_code, Some(3));
    assert!(outcome.message.contains("exit code 3"));
    assert!(outcome.output.unwrap().contains("partial"));
    assert!(outcome.error.unwrap().contains("broke"));
}

#[tokio::test]
async fn test_missing_binary_is_spawn_error() {
    let work = TempDir::new().unwrap();
    std::fs::write(work.path().join("index.html"), "<html></html>").unwrap();

    let dispatcher = EditDispatcher::new(work.path());
    let request = EditRequest {
        cli: CliTool::new("liveedit-no-such-binary"),
        file_path: work.path().join("index.html"),
        instructions: "anything".to_string(),
        element: None,
    };

    let err = dispatcher.dispatch(&request).await.unwrap_err();
    assert!(matches!(err, liveedit_protocols::DispatchError::Spawn(_)));
}

#[tokio::test]
async fn test_page_edit_streams_disk_content() {
    let work = TempDir::new().unwrap();
    std::fs::write(work.path().join("index.html"), "<html>from disk</html>").unwrap();
    let cli = fake_cli(&work, "fake-echo", "cat");

    let dispatcher = EditDispatcher::new(work.path());
    let request = EditRequest {
        cli: CliTool::new(&cli),
        file_path: work.path().join("index.html"),
        instructions: "restyle".to_string(),
        element: None,
    };

    let outcome = dispatcher.dispatch(&request).await.unwrap();
    assert_eq!(outcome.output.unwrap(), "<html>from disk</html>");
}

#[tokio::test]
async fn test_vanished_file_surfaces_read_failure() {
    let work = TempDir::new().unwrap();
    let cli = fake_cli(&work, "fake-echo", "cat");

    let dispatcher = EditDispatcher::new(work.path());
    let request = EditRequest {
        cli: CliTool::new(&cli),
        file_path: work.path().join("vanished.html"),
        instructions: "anything".to_string(),
        element: None,
    };

    let err = dispatcher.dispatch(&request).await.unwrap_err();
    assert!(matches!(
        err,
        liveedit_protocols::DispatchError::ReadFailure(_, _)
    ));
}

#[test]
fn test_truncate_for_log() {
    assert_eq!(truncate_for_log("short", 200), "short");
    let long = "x".repeat(300);
    let truncated = truncate_for_log(&long, 200);
    assert_eq!(truncated.len(), 203);
    assert!(truncated.ends_with("..."));
}
