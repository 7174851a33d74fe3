// Scripted mentor chat: keyword responder and append-only chat log.
// Replies are canned; nothing here talks to a model.

pub mod log;
pub mod responder;

pub use log::{ChatLog, ChatMessage, Speaker};
pub use responder::{ChatIntent, ChatResponder, KeywordResponder};
