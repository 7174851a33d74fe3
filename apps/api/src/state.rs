use std::sync::Arc;

use crate::chat::ChatResponder;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub config: Config,
    /// Pluggable chat backend. Default: KeywordResponder.
    pub chat_responder: Arc<dyn ChatResponder>,
}
