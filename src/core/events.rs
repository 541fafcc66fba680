// src/core/events.rs — Event-driven state transitions
//
// Every user interaction is one AppEvent. `update` applies exactly one event
// to the state and performs no I/O; when an event needs the backend it
// returns an Effect describing the request, the runtime executes it and
// feeds the outcome back in as another event (DocumentLoaded,
// DocumentAnswered, RequestFailed). This keeps every transition testable
// without rendering or a live server.

use std::path::PathBuf;

use super::store::SessionStore;

/// One user-facing status line. Overwritten by each event that produces one,
/// cleared by events that succeed silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    CreateSession,
    DeleteSession { key: String },
    SelectSession { key: String },
    SelectModel { key: String, model_id: String },

    /// Question entered. Guards only; a passing guard yields
    /// `Effect::AskBackend` and leaves the store untouched.
    SubmitQuestion { key: String, question: String },

    /// PDF path entered. Guards only; a passing guard yields
    /// `Effect::LoadDocument`.
    SubmitUpload { key: String, path: String },

    /// Backend finished processing an upload.
    DocumentLoaded {
        key: String,
        backend_session_id: String,
        summary: String,
    },

    /// Backend answered a question.
    DocumentAnswered {
        key: String,
        question: String,
        answer: String,
    },

    /// A request failed; `message` is the classified user-facing line.
    /// The store is left unchanged.
    RequestFailed { key: String, message: String },
}

/// A backend request the runtime must perform on behalf of an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadDocument {
        key: String,
        path: PathBuf,
        model: String,
    },
    AskBackend {
        key: String,
        backend_session_id: String,
        question: String,
        model: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(default_model: impl Into<String>) -> Self {
        Self {
            store: SessionStore::new(default_model),
            notice: None,
        }
    }
}

/// Apply one event. Total: unknown keys and refused operations degrade to a
/// warning notice, never a panic.
pub fn update(state: &mut AppState, event: AppEvent) -> Option<Effect> {
    match event {
        AppEvent::CreateSession => {
            state.store.create();
            state.notice = None;
            None
        }

        AppEvent::DeleteSession { key } => {
            match state.store.delete(&key) {
                Ok(()) => state.notice = None,
                Err(e) => state.notice = Some(Notice::Warning(e.to_string())),
            }
            None
        }

        AppEvent::SelectSession { key } => {
            match state.store.set_active(&key) {
                Ok(()) => state.notice = None,
                Err(e) => state.notice = Some(Notice::Warning(e.to_string())),
            }
            None
        }

        AppEvent::SelectModel { key, model_id } => {
            match state.store.select_model(&key, &model_id) {
                Ok(()) => state.notice = None,
                Err(e) => state.notice = Some(Notice::Warning(e.to_string())),
            }
            None
        }

        AppEvent::SubmitQuestion { key, question } => {
            if question.trim().is_empty() {
                state.notice = Some(Notice::Warning("Type a question before sending.".into()));
                return None;
            }
            let session = match state.store.get(&key) {
                Ok(s) => s,
                Err(e) => {
                    state.notice = Some(Notice::Warning(e.to_string()));
                    return None;
                }
            };
            let Some(backend_session_id) = session.backend_session_id.clone() else {
                state.notice = Some(Notice::Warning(
                    "Load a document before asking questions.".into(),
                ));
                return None;
            };
            state.notice = None;
            Some(Effect::AskBackend {
                key,
                backend_session_id,
                question,
                model: session.selected_model.clone(),
            })
        }

        AppEvent::SubmitUpload { key, path } => {
            if path.trim().is_empty() {
                state.notice = Some(Notice::Warning("Choose a PDF file first.".into()));
                return None;
            }
            let session = match state.store.get(&key) {
                Ok(s) => s,
                Err(e) => {
                    state.notice = Some(Notice::Warning(e.to_string()));
                    return None;
                }
            };
            state.notice = None;
            Some(Effect::LoadDocument {
                key,
                path: PathBuf::from(path.trim()),
                model: session.selected_model.clone(),
            })
        }

        AppEvent::DocumentLoaded {
            key,
            backend_session_id,
            summary,
        } => {
            match state
                .store
                .record_upload_result(&key, &backend_session_id, &summary)
            {
                Ok(()) => {
                    state.notice = Some(Notice::Info("Document processed.".into()));
                }
                Err(e) => state.notice = Some(Notice::Warning(e.to_string())),
            }
            None
        }

        AppEvent::DocumentAnswered {
            key,
            question,
            answer,
        } => {
            match state.store.append_exchange(&key, &question, &answer) {
                Ok(()) => state.notice = None,
                Err(e) => state.notice = Some(Notice::Warning(e.to_string())),
            }
            None
        }

        AppEvent::RequestFailed { key: _, message } => {
            state.notice = Some(Notice::Error(message));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::DEFAULT_SESSION_KEY;

    fn state() -> AppState {
        AppState::new("mt5-small")
    }

    #[test]
    fn test_blank_question_is_rejected_without_effect() {
        let mut s = state();
        let effect = update(
            &mut s,
            AppEvent::SubmitQuestion {
                key: DEFAULT_SESSION_KEY.into(),
                question: "   ".into(),
            },
        );
        assert_eq!(effect, None);
        assert!(matches!(s.notice, Some(Notice::Warning(_))));
        assert!(s.store.active().chat_history.is_empty());
    }

    #[test]
    fn test_question_without_document_is_rejected() {
        let mut s = state();
        let effect = update(
            &mut s,
            AppEvent::SubmitQuestion {
                key: DEFAULT_SESSION_KEY.into(),
                question: "what is this about?".into(),
            },
        );
        assert_eq!(effect, None);
        assert!(matches!(s.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn test_question_with_document_yields_ask_effect() {
        let mut s = state();
        update(
            &mut s,
            AppEvent::DocumentLoaded {
                key: DEFAULT_SESSION_KEY.into(),
                backend_session_id: "abc".into(),
                summary: "S".into(),
            },
        );
        let effect = update(
            &mut s,
            AppEvent::SubmitQuestion {
                key: DEFAULT_SESSION_KEY.into(),
                question: "why?".into(),
            },
        );
        assert_eq!(
            effect,
            Some(Effect::AskBackend {
                key: DEFAULT_SESSION_KEY.into(),
                backend_session_id: "abc".into(),
                question: "why?".into(),
                model: "mt5-small".into(),
            })
        );
        // The guard itself records nothing
        assert_eq!(s.store.active().chat_history.len(), 1);
    }

    #[test]
    fn test_blank_upload_path_is_rejected() {
        let mut s = state();
        let effect = update(
            &mut s,
            AppEvent::SubmitUpload {
                key: DEFAULT_SESSION_KEY.into(),
                path: "".into(),
            },
        );
        assert_eq!(effect, None);
        assert!(matches!(s.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn test_request_failed_leaves_store_unchanged() {
        let mut s = state();
        update(
            &mut s,
            AppEvent::DocumentLoaded {
                key: DEFAULT_SESSION_KEY.into(),
                backend_session_id: "abc".into(),
                summary: "S".into(),
            },
        );
        let before = s.store.active().chat_history.clone();

        update(
            &mut s,
            AppEvent::RequestFailed {
                key: DEFAULT_SESSION_KEY.into(),
                message: "Server error: boom".into(),
            },
        );
        assert_eq!(s.store.active().chat_history, before);
        assert!(matches!(s.notice, Some(Notice::Error(_))));
    }

    #[test]
    fn test_unknown_key_degrades_to_warning() {
        let mut s = state();
        update(
            &mut s,
            AppEvent::SelectSession {
                key: "missing".into(),
            },
        );
        assert!(matches!(s.notice, Some(Notice::Warning(_))));
        assert_eq!(s.store.active_key(), DEFAULT_SESSION_KEY);
    }
}
