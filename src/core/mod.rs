// src/core/mod.rs — Session state and transitions

pub mod events;
pub mod session;
pub mod store;

pub use events::{update, AppEvent, AppState, Effect, Notice};
pub use session::{ChatEntry, Session, Speaker, DEFAULT_SESSION_KEY};
pub use store::{SessionStore, StoreError};
