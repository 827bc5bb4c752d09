//! Preview server for a built overview page.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use folio_static::builder::OVERVIEW_FILE;
use tower_http::services::ServeDir;

use super::build::load_project;

/// Directory to serve: `--dir` when given, otherwise the project's output
/// directory as `folio build` would write it.
fn serve_dir(config_path: &Path, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(load_project(config_path)?.config.output_dir),
    }
}

/// Run the serve command.
pub async fn run(
    config_path: &Path,
    port: u16,
    dir: Option<PathBuf>,
    open_browser: bool,
) -> Result<()> {
    let dir = serve_dir(config_path, dir)?;
    if !dir.is_dir() {
        anyhow::bail!(
            "Output directory {} does not exist. Run 'folio build' first.",
            dir.display()
        );
    }
    if !dir.join(OVERVIEW_FILE).exists() {
        tracing::warn!("No {} in {}", OVERVIEW_FILE, dir.display());
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    let url = format!("http://{addr}/{OVERVIEW_FILE}");
    tracing::info!(dir = %dir.display(), "Previewing at {url}");

    if open_browser {
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let app = Router::new().fallback_service(ServeDir::new(&dir));
    axum::serve(listener, app).await?;

    Ok(())
}
