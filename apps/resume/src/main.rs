mod blog;
mod config;
mod errors;
mod loader;
mod models;
mod page;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::blog::{FeedClient, Rss2JsonClient};
use crate::config::Config;
use crate::loader::{load_resume, DocumentSource, FileDocumentSource, HttpDocumentSource};
use crate::page::{shell::render_document, Page};
use crate::render::RenderOptions;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume site v{}", env!("CARGO_PKG_VERSION"));

    let source: Arc<dyn DocumentSource> = match &config.resume_data_url {
        Some(url) => Arc::new(HttpDocumentSource::new(url.clone())),
        None => Arc::new(FileDocumentSource::new(config.resume_data_path.clone())),
    };
    info!("Resume data source: {}", source.describe());

    let feed: Arc<dyn FeedClient> = Arc::new(Rss2JsonClient::new(config.feed_proxy_url.clone()));

    if let Some(output_path) = &config.output_path {
        return render_to_file(&config, source.as_ref(), feed, output_path).await;
    }

    let state = AppState {
        config: config.clone(),
        source,
        feed,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// One-shot mode: render the page once and write it to `output_path`.
/// The page is written even when loading fails, then the failure is returned.
async fn render_to_file(
    config: &Config,
    source: &dyn DocumentSource,
    feed: Arc<dyn FeedClient>,
    output_path: &Path,
) -> Result<()> {
    let options = RenderOptions {
        projects_layout: config.projects_layout,
        footer_year: Utc::now().year(),
        feed_timeout: config.feed_timeout,
    };

    let mut page = Page::new();
    let loaded = load_resume(&mut page, source, feed, &options).await;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(output_path, render_document(&page).into_string())
        .await
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    info!("Wrote {}", output_path.display());

    loaded.context("Resume data could not be loaded")
}
