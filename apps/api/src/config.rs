use std::time::Duration;

use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CHAT_REPLY_DELAY_MS: u64 = 1000;
const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 1800;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// How long the mentor "types" before its reply is appended.
    pub chat_reply_delay: Duration,
    /// Sessions untouched for this long are dropped from memory.
    pub session_idle_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let delay_ms = match lookup("CHAT_REPLY_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("CHAT_REPLY_DELAY_MS must be a whole number of milliseconds")?,
            None => DEFAULT_CHAT_REPLY_DELAY_MS,
        };

        let ttl_secs = match lookup("SESSION_IDLE_TTL_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("SESSION_IDLE_TTL_SECS must be a whole number of seconds")?,
            None => DEFAULT_SESSION_IDLE_TTL_SECS,
        };
        if ttl_secs == 0 {
            bail!("SESSION_IDLE_TTL_SECS must be greater than zero");
        }

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            chat_reply_delay: Duration::from_millis(delay_ms),
            session_idle_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            chat_reply_delay: Duration::from_millis(DEFAULT_CHAT_REPLY_DELAY_MS),
            session_idle_ttl: Duration::from_secs(DEFAULT_SESSION_IDLE_TTL_SECS),
        }
    }
}
