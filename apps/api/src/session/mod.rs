// Per-session application state: navigation machine, controller, in-memory store.
// Sessions are ephemeral and live only as long as the process.

pub mod controller;
pub mod handlers;
pub mod navigation;
pub mod store;

pub use controller::{send_chat_message, Session, SessionSnapshot};
pub use navigation::{Screen, Trigger};
pub use store::{SessionStore, SharedSession};
