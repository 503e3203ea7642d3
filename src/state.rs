//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// State shared across request handlers.
///
/// The service is the only shared resource; the store behind it is the
/// single source of truth, with no in-process caching layer in front.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Public base URL used to build the human-facing short link string.
    pub base_url: String,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, base_url: String) -> Self {
        Self {
            url_service,
            base_url,
        }
    }

    /// Builds the public short link for a code: `{base_url}/u/{code}`.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/u/{}", self.base_url.trim_end_matches('/'), code)
    }
}
