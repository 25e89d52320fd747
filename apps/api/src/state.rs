use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; analysis itself is stateless.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document-to-text backend. Default: `DocumentExtractor`.
    pub extractor: Arc<dyn TextExtractor>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config, extractor: Arc<dyn TextExtractor>) -> Self {
        Self {
            config,
            extractor,
            started_at: Utc::now(),
        }
    }
}
