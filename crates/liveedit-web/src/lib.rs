//! # liveedit Web
//!
//! HTTP server for the live HTML editor:
//!
//! - Serves the editor UI and the preview-frame instrumentor script,
//!   embedded in the binary
//! - Exposes the JSON API (`/api/files`, `/api/file`, `/api/preview`,
//!   `/api/edit`)
//! - Mounts the project root under `/assets` so relative references in
//!   previewed documents resolve
//!
//! ## Usage
//!
//! ```ignore
//! use liveedit_web::{AppState, EditorServer, WebServerConfig};
//!
//! let state = Arc::new(AppState::new("/path/to/project"));
//! let server = EditorServer::new(WebServerConfig::default(), state);
//! server.run().await?;
//! ```

mod handlers;
mod server;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

use liveedit_dispatch::EditDispatcher;
use liveedit_files::FileService;

pub use server::create_router;

/// Web server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebServerConfig {
    /// Host to bind to (default: "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on (default: 3000).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// State shared across handlers.
pub struct AppState {
    /// Contained filesystem access under the project root.
    pub files: FileService,
    /// External CLI invocation.
    pub dispatcher: EditDispatcher,
}

impl AppState {
    /// Create state rooted at the given project directory. The same root
    /// bounds file serving and becomes the working directory of spawned
    /// CLI processes.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let root = project_root.into();
        Self {
            files: FileService::new(root.clone()),
            dispatcher: EditDispatcher::new(root),
        }
    }

    pub fn project_root(&self) -> &Path {
        self.files.root()
    }
}

/// The editor server.
pub struct EditorServer {
    config: WebServerConfig,
    state: Arc<AppState>,
}

impl EditorServer {
    pub fn new(config: WebServerConfig, state: Arc<AppState>) -> Self {
        Self { config, state }
    }

    /// The server's listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind and serve until shutdown.
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let app = create_router(self.state.clone());

        let addr: SocketAddr = self.addr().parse()?;
        let listener = TcpListener::bind(addr).await?;

        info!("Live HTML editor running at http://{}", addr);
        info!("Project root: {}", self.state.project_root().display());
        axum::serve(listener, app).await?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
