use std::sync::Arc;

use crate::parttime::store::PostingStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Posting persistence. `PgPostingStore` in production.
    pub postings: Arc<dyn PostingStore>,
}
