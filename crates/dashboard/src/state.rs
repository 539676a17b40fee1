use std::sync::Arc;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// Pre-rendered dashboard HTML
    pub page: Arc<str>,
}

impl AppState {
    pub fn new(page: String) -> Self {
        Self { page: page.into() }
    }
}
