//! liveedit - visual HTML editor bridging element selection to AI CLIs.
//!
//! Main entry point for the liveedit server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use liveedit_web::{AppState, EditorServer, WebServerConfig};

/// liveedit CLI.
#[derive(Parser)]
#[command(name = "liveedit")]
#[command(about = "Visual HTML editor bridging element selection to AI coding CLIs")]
#[command(version)]
struct Cli {
    /// Host to bind the editor server to
    #[arg(long, default_value = "127.0.0.1", env = "LIVEEDIT_HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000, env = "LIVEEDIT_PORT")]
    port: u16,

    /// Project root; browsing, previews, and edits are confined to it
    /// (default: current directory)
    #[arg(short, long, env = "LIVEEDIT_ROOT")]
    root: Option<PathBuf>,
}

/// Get the .liveedit directory path.
fn liveedit_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".liveedit"))
        .unwrap_or_else(|| PathBuf::from(".liveedit"))
}

/// Initialize tracing with console and file output.
///
/// Log files are written to ~/.liveedit/debug/ with daily rotation.
fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = liveedit_dir().join("debug");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("liveedit")
        .filename_suffix("log")
        .max_log_files(7)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer guard alive for the program duration
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing()?;

    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    // Canonicalize so the containment prefix check compares real paths
    let root = root
        .canonicalize()
        .map_err(|e| format!("project root {}: {}", root.display(), e))?;

    info!("Starting liveedit v{}", env!("CARGO_PKG_VERSION"));
    info!("Project root: {}", root.display());

    let state = Arc::new(AppState::new(root));
    let config = WebServerConfig {
        host: cli.host,
        port: cli.port,
    };
    let server = EditorServer::new(config, state);

    info!("Open http://{} in your browser to use the editor", server.addr());

    server.run().await?;

    Ok(())
}
