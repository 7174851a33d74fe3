#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const GREETING: &str = "Hi! I'm Carto, your AI career mentor. How can I help you today?";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Append-only conversation, rendered in insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// A log holding only the bot's greeting.
    pub fn new() -> Self {
        let mut log = Self {
            messages: Vec::new(),
        };
        log.push(Speaker::Bot, GREETING);
        log
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            speaker,
            text: text.into(),
            sent_at: Utc::now(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
