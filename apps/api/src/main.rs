mod catalog;
mod chat;
mod config;
mod errors;
mod guidance;
mod profile;
mod routes;
mod session;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::chat::KeywordResponder;
use crate::config::Config;
use crate::routes::build_router;
use crate::session::store::spawn_idle_sweeper;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so a bad value fails before anything starts
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cartographer API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Chat reply delay: {}ms",
        config.chat_reply_delay.as_millis()
    );

    let sessions = SessionStore::new();
    spawn_idle_sweeper(sessions.clone(), config.session_idle_ttl);
    info!(
        "Session idle TTL: {}s",
        config.session_idle_ttl.as_secs()
    );

    let state = AppState {
        sessions,
        config: config.clone(),
        chat_responder: Arc::new(KeywordResponder),
    };

    // The rendering layer is a browser app served from another origin
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
