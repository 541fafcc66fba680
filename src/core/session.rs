// src/core/session.rs — Chat session record
//
// One session is one independent chat thread bound to at most one uploaded
// document. The backend session id only exists after a successful upload;
// until then the session cannot take questions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key of the protected session seeded at startup. Never deletable.
pub const DEFAULT_SESSION_KEY: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatEntry {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub key: String,
    pub backend_session_id: Option<String>,
    pub chat_history: Vec<ChatEntry>,
    pub display_name: String,
    pub has_document: bool,
    pub selected_model: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(number: u32, model: &str) -> Self {
        Self::with_key(Uuid::new_v4().to_string(), number, model)
    }

    pub(crate) fn with_key(key: String, number: u32, model: &str) -> Self {
        Self {
            key,
            backend_session_id: None,
            chat_history: Vec::new(),
            display_name: format!("Chat {number}"),
            has_document: false,
            selected_model: model.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Whether the session can take questions yet.
    pub fn can_ask(&self) -> bool {
        self.backend_session_id.is_some()
    }

    /// Record a successful upload: history is wholly reset and reseeded with
    /// the summary as the first assistant message.
    pub fn record_upload(&mut self, backend_session_id: impl Into<String>, summary: impl Into<String>) {
        self.backend_session_id = Some(backend_session_id.into());
        self.chat_history = vec![ChatEntry::assistant(summary)];
        self.has_document = true;
    }

    /// Append one question/answer exchange, user entry first.
    pub fn append_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.chat_history.push(ChatEntry::user(question));
        self.chat_history.push(ChatEntry::assistant(answer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let s = Session::new(3, "mt5-small");
        assert_eq!(s.display_name, "Chat 3");
        assert_eq!(s.selected_model, "mt5-small");
        assert!(s.chat_history.is_empty());
        assert!(!s.has_document);
        assert!(!s.can_ask());
    }

    #[test]
    fn test_record_upload_reseeds_history() {
        let mut s = Session::new(1, "mt5-small");
        s.chat_history.push(ChatEntry::user("stale"));
        s.chat_history.push(ChatEntry::assistant("stale"));

        s.record_upload("abc", "The summary");

        assert_eq!(s.backend_session_id.as_deref(), Some("abc"));
        assert!(s.has_document);
        assert!(s.can_ask());
        assert_eq!(s.chat_history, vec![ChatEntry::assistant("The summary")]);
    }

    #[test]
    fn test_append_exchange_order() {
        let mut s = Session::new(1, "mt5-small");
        s.record_upload("abc", "S");
        s.append_exchange("why?", "because");

        assert_eq!(s.chat_history.len(), 3);
        assert_eq!(s.chat_history[1], ChatEntry::user("why?"));
        assert_eq!(s.chat_history[2], ChatEntry::assistant("because"));
    }

    #[test]
    fn test_keys_are_unique() {
        let a = Session::new(1, "m");
        let b = Session::new(2, "m");
        assert_ne!(a.key, b.key);
    }
}
