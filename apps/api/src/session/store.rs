use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::session::controller::Session;

/// A session shared between request handlers and pending chat replies.
pub type SharedSession = Arc<RwLock<Session>>;

struct StoreEntry {
    session: SharedSession,
    last_seen: Instant,
}

/// In-memory session registry. Cloning shares the same map.
///
/// Sessions that go unused for longer than the idle TTL are dropped by
/// `sweep_idle`. A reply task still pending for a swept session finishes
/// against its own handle and is then freed with it.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoreEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self) -> SharedSession {
        let id = Uuid::new_v4();
        let session = Arc::new(RwLock::new(Session::new(id)));
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id,
            StoreEntry {
                session: session.clone(),
                last_seen: Instant::now(),
            },
        );
        info!(session = %id, active = sessions.len(), "session created");
        session
    }

    /// Looks up a session and marks it as used.
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        entry.last_seen = Instant::now();
        Some(entry.session.clone())
    }

    /// Drops every session idle for at least `ttl`. Returns how many were removed.
    pub async fn sweep_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.last_seen) < ttl);
        let removed = before - sessions.len();
        if removed > 0 {
            info!(removed, active = sessions.len(), "expired idle sessions");
        }
        removed
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Runs `sweep_idle` in the background for the life of the process.
pub fn spawn_idle_sweeper(store: SessionStore, ttl: Duration) -> JoinHandle<()> {
    let period = (ttl / 4).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = store.sweep_idle(ttl).await;
            debug!(removed, "idle session sweep");
        }
    })
}
