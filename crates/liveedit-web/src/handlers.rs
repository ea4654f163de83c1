//! JSON API handlers.
//!
//! Error mapping follows the service taxonomy: AccessDenied → 403,
//! NotFound → 404, NotADirectory and missing parameters → 400, everything
//! else → 500. The listing endpoint answers JSON `{error}` bodies (the
//! file picker parses them); the raw-content endpoints answer plain text.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::warn;

use liveedit_dispatch::{CliTool, EditRequest};
use liveedit_protocols::{DispatchError, EditOutcome, ElementDescriptor, FileServiceError};

use crate::AppState;

/// Query parameters for the file-serving endpoints.
#[derive(Debug, Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub path: Option<String>,
}

/// Body of `POST /api/edit`.
///
/// Required fields stay optional here so their absence maps to the plain
/// 400 the UI expects rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditBody {
    #[serde(default)]
    pub cli: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub element_identifier: Option<ElementDescriptor>,
}

/// `GET /api/files` - browse one directory under the project root.
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Response {
    let requested = query.path.unwrap_or_default();
    match state.files.list_directory(&requested).await {
        Ok(listing) => Json(listing).into_response(),
        Err(e) => listing_error(e),
    }
}

/// `GET /api/file` - raw file content.
pub async fn read_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Response {
    let Some(requested) = query.path.filter(|p| !p.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "File path is required").into_response();
    };
    match state.files.read_file(&requested).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(e) => content_error(e),
    }
}

/// `GET /api/preview` - HTML rewritten so relative references resolve
/// against the `/assets` mount.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PathQuery>,
) -> Response {
    let Some(requested) = query.path.filter(|p| !p.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "File path is required").into_response();
    };
    match state.files.preview(&requested).await {
        Ok(document) => Html(document).into_response(),
        Err(e) => content_error(e),
    }
}

/// `POST /api/edit` - dispatch one edit to the external CLI.
pub async fn edit(State(state): State<Arc<AppState>>, Json(body): Json<EditBody>) -> Response {
    let non_empty = |field: Option<String>| field.filter(|v| !v.is_empty());
    let (Some(cli), Some(file_path), Some(instructions)) = (
        non_empty(body.cli),
        non_empty(body.file_path),
        non_empty(body.instructions),
    ) else {
        return (
            StatusCode::BAD_REQUEST,
            "Missing required fields: cli, filePath, instructions",
        )
            .into_response();
    };

    // The edit target obeys the same containment rule as every read
    let absolute = match state.files.resolve(&file_path) {
        Ok(path) => path,
        Err(e) => {
            warn!(path = %file_path, "edit request outside project root");
            return (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({
                    "success": false,
                    "message": e.to_string(),
                })),
            )
                .into_response();
        }
    };

    let request = EditRequest {
        cli: CliTool::new(cli),
        file_path: absolute,
        instructions,
        element: body.element_identifier,
    };

    match state.dispatcher.dispatch(&request).await {
        Ok(outcome) if outcome.success => (StatusCode::OK, Json(outcome)).into_response(),
        Ok(outcome) => (StatusCode::INTERNAL_SERVER_ERROR, Json(outcome)).into_response(),
        Err(e) => dispatch_error(e),
    }
}

/// JSON `{error}` body for the listing endpoint.
fn listing_error(err: FileServiceError) -> Response {
    let message = match &err {
        FileServiceError::AccessDenied(_) => {
            "Access denied: Path outside project directory".to_string()
        }
        FileServiceError::NotFound(_) => "Directory not found".to_string(),
        FileServiceError::NotADirectory(_) => "Path is not a directory".to_string(),
        FileServiceError::Io(e) => format!("Error reading directory: {}", e),
    };
    (
        status_for(&err),
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

/// Plain-text error for the raw-content endpoints.
fn content_error(err: FileServiceError) -> Response {
    let message = match &err {
        FileServiceError::AccessDenied(_) => {
            "Access denied: Path outside project directory".to_string()
        }
        FileServiceError::NotFound(_) => "File not found".to_string(),
        FileServiceError::NotADirectory(_) => "Path is not a directory".to_string(),
        FileServiceError::Io(e) => format!("Error reading file: {}", e),
    };
    (status_for(&err), message).into_response()
}

fn status_for(err: &FileServiceError) -> StatusCode {
    match err {
        FileServiceError::AccessDenied(_) => StatusCode::FORBIDDEN,
        FileServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        FileServiceError::NotADirectory(_) => StatusCode::BAD_REQUEST,
        FileServiceError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Failures that never reached the external tool.
fn dispatch_error(err: DispatchError) -> Response {
    let body = match err {
        DispatchError::Spawn(message) => EditOutcome::spawn_failed(message),
        DispatchError::ReadFailure(path, source) => EditOutcome {
            success: false,
            message: format!("Error reading file: {} ({})", path.display(), source),
            output: None,
            error: None,
            prompt: None,
            full_prompt: None,
            exit_code: None,
        },
        other => EditOutcome {
            success: false,
            message: format!("Error executing command: {}", other),
            output: None,
            error: None,
            prompt: None,
            full_prompt: None,
            exit_code: None,
        },
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
