use std::sync::Arc;

use crate::blog::FeedClient;
use crate::config::Config;
use crate::loader::DocumentSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable: every request renders into its own page.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn DocumentSource>,
    pub feed: Arc<dyn FeedClient>,
}
