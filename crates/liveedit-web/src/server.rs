//! HTTP server and routing.

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use rust_embed::RustEmbed;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use liveedit_files::ASSET_ROUTE;

use crate::{handlers, AppState};

/// Embedded editor UI and instrumentor script.
#[derive(RustEmbed)]
#[folder = "src/static/"]
struct StaticAssets;

/// Create the Axum router.
///
/// `/assets` mounts the project root itself (with content-type inference
/// and traversal protection from `ServeDir`), so documents previewed with
/// an injected base tag can load their css/js/images.
pub fn create_router(state: Arc<AppState>) -> Router {
    let project_assets = ServeDir::new(state.project_root());

    Router::new()
        // Editor UI
        .route("/", get(serve_index))
        .route("/style.css", get(serve_css))
        .route("/editor.js", get(serve_editor_js))
        .route("/injector.js", get(serve_injector_js))
        // Health check
        .route("/health", get(health_check))
        // JSON API
        .route("/api/files", get(handlers::list_files))
        .route("/api/file", get(handlers::read_file))
        .route("/api/preview", get(handlers::preview))
        .route("/api/edit", post(handlers::edit))
        // Project-root static mount for previewed assets; the same prefix
        // the preview transform writes into its base tags
        .nest_service(ASSET_ROUTE, project_assets)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the editor HTML page.
async fn serve_index() -> impl IntoResponse {
    match StaticAssets::get("index.html") {
        Some(content) => {
            Html(String::from_utf8_lossy(content.data.as_ref()).to_string()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Serve the editor stylesheet.
async fn serve_css() -> impl IntoResponse {
    embedded_asset("style.css", "text/css")
}

/// Serve the editor client script.
async fn serve_editor_js() -> impl IntoResponse {
    embedded_asset("editor.js", "application/javascript")
}

/// Serve the instrumentor injected into the preview frame.
async fn serve_injector_js() -> impl IntoResponse {
    embedded_asset("injector.js", "application/javascript")
}

fn embedded_asset(name: &str, content_type: &'static str) -> axum::response::Response {
    match StaticAssets::get(name) {
        Some(content) => (
            [(header::CONTENT_TYPE, content_type)],
            String::from_utf8_lossy(content.data.as_ref()).to_string(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        serde_json::json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
        })
        .to_string(),
    )
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
