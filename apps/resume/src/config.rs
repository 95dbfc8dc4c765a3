use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::blog::DEFAULT_PROXY_URL;
use crate::render::ProjectsLayout;

const DEFAULT_DATA_PATH: &str = "resume-data.json";
const DEFAULT_FEED_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
/// Everything has a default; a `.env` file is honoured when present.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fetch the document over HTTP when set; otherwise read `resume_data_path`.
    pub resume_data_url: Option<String>,
    pub resume_data_path: PathBuf,
    pub feed_proxy_url: String,
    pub projects_layout: ProjectsLayout,
    /// Upper bound on the blog feed fetch; the posts area falls back after it.
    pub feed_timeout: Duration,
    /// Render once into this file and exit instead of serving.
    pub output_path: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Config {
            resume_data_url: non_empty("RESUME_DATA_URL"),
            resume_data_path: non_empty("RESUME_DATA_PATH")
                .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string())
                .into(),
            feed_proxy_url: non_empty("FEED_PROXY_URL")
                .unwrap_or_else(|| DEFAULT_PROXY_URL.to_string()),
            projects_layout: match non_empty("PROJECTS_LAYOUT") {
                Some(value) => value
                    .parse()
                    .map_err(|e: String| anyhow!(e))
                    .context("PROJECTS_LAYOUT must be 'grid' or 'list'")?,
                None => ProjectsLayout::default(),
            },
            feed_timeout: match non_empty("FEED_TIMEOUT_SECS") {
                Some(value) => Duration::from_secs(
                    value
                        .parse::<u64>()
                        .context("FEED_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
                None => Duration::from_secs(DEFAULT_FEED_TIMEOUT_SECS),
            },
            output_path: non_empty("OUTPUT_PATH").map(PathBuf::from),
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
