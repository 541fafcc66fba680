// tests/events_test.rs — Integration test: event-driven transitions end to end
//
// Drives update() the way a front end does, with a stub backend standing in
// for the HTTP service.

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use papertalk::backend::error::BackendError;
use papertalk::backend::{DocumentBackend, UploadOutcome};
use papertalk::core::{
    update, AppEvent, AppState, Effect, Notice, Speaker, DEFAULT_SESSION_KEY,
};

const MODEL: &str = "moonshotai/kimi-vl-a3b-thinking:free";

fn state() -> AppState {
    AppState::new(MODEL)
}

/// Canned backend: every call returns the configured result.
struct StubBackend {
    upload: Result<UploadOutcome, BackendError>,
    answer: Result<String, BackendError>,
}

#[async_trait]
impl DocumentBackend for StubBackend {
    async fn upload_document(
        &self,
        _file_name: &str,
        _bytes: Vec<u8>,
        _model: Option<&str>,
    ) -> Result<UploadOutcome, BackendError> {
        self.upload.clone()
    }

    async fn ask_question(
        &self,
        _backend_session_id: &str,
        _question: &str,
        _model: Option<&str>,
    ) -> Result<String, BackendError> {
        self.answer.clone()
    }
}

// ─── Upload scenarios ───────────────────────────────────────

#[tokio::test]
async fn test_successful_upload_seeds_session() {
    let backend = StubBackend {
        upload: Ok(UploadOutcome {
            session_id: "abc".into(),
            summary: "S".into(),
        }),
        answer: Err(BackendError::Internal),
    };

    let mut s = state();
    let effect = update(
        &mut s,
        AppEvent::SubmitUpload {
            key: DEFAULT_SESSION_KEY.into(),
            path: "paper.pdf".into(),
        },
    )
    .expect("upload guard should pass");

    let Effect::LoadDocument { key, model, .. } = effect else {
        panic!("expected a load effect");
    };
    assert_eq!(model, MODEL);

    let outcome = backend
        .upload_document("paper.pdf", vec![0x25, 0x50, 0x44, 0x46], Some(model.as_str()))
        .await
        .unwrap();
    update(
        &mut s,
        AppEvent::DocumentLoaded {
            key,
            backend_session_id: outcome.session_id,
            summary: outcome.summary,
        },
    );

    let session = s.store.active();
    assert!(session.has_document);
    assert_eq!(session.backend_session_id.as_deref(), Some("abc"));
    assert_eq!(session.chat_history.len(), 1);
    assert_eq!(session.chat_history[0].speaker, Speaker::Assistant);
    assert_eq!(session.chat_history[0].text, "S");
}

#[tokio::test]
async fn test_failed_upload_leaves_session_unchanged() {
    let backend = StubBackend {
        upload: Err(papertalk::backend::error::classify(
            413,
            r#"{"error":"Request body too large"}"#,
        )),
        answer: Err(BackendError::Internal),
    };

    let mut s = state();
    let err = backend
        .upload_document("big.pdf", vec![0; 16], Some(MODEL))
        .await
        .unwrap_err();
    assert_eq!(err, BackendError::DocumentTooLarge);

    update(
        &mut s,
        AppEvent::RequestFailed {
            key: DEFAULT_SESSION_KEY.into(),
            message: err.to_string(),
        },
    );

    let session = s.store.active();
    assert!(!session.has_document);
    assert_eq!(session.backend_session_id, None);
    assert!(session.chat_history.is_empty());
    assert_eq!(
        s.notice,
        Some(Notice::Error(BackendError::DocumentTooLarge.to_string()))
    );
}

// ─── Question scenarios ─────────────────────────────────────

#[tokio::test]
async fn test_answered_question_appends_exchange_in_order() {
    let backend = StubBackend {
        upload: Err(BackendError::Internal),
        answer: Ok("42".into()),
    };

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
            question: "what is the meaning of it all?".into(),
        },
    )
    .expect("question guard should pass");

    let Effect::AskBackend {
        key,
        backend_session_id,
        question,
        model,
    } = effect
    else {
        panic!("expected an ask effect");
    };
    assert_eq!(backend_session_id, "abc");

    let answer = backend
        .ask_question(&backend_session_id, &question, Some(model.as_str()))
        .await
        .unwrap();
    update(
        &mut s,
        AppEvent::DocumentAnswered {
            key,
            question,
            answer,
        },
    );

    let history = &s.store.active().chat_history;
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].speaker, Speaker::User);
    assert_eq!(history[1].text, "what is the meaning of it all?");
    assert_eq!(history[2].speaker, Speaker::Assistant);
    assert_eq!(history[2].text, "42");
}

#[test]
fn test_blank_question_issues_no_request_and_warns() {
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
            question: "  \t ".into(),
        },
    );

    assert_eq!(effect, None);
    assert!(matches!(s.notice, Some(Notice::Warning(_))));
    assert_eq!(s.store.active().chat_history.len(), 1);
}

#[test]
fn test_failed_answer_leaves_history_unchanged() {
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
            message: BackendError::RateLimited.to_string(),
        },
    );

    assert_eq!(s.store.active().chat_history, before);
    assert!(matches!(s.notice, Some(Notice::Error(_))));
}

// ─── Session management through events ──────────────────────

#[test]
fn test_create_select_delete_flow() {
    let mut s = state();

    update(&mut s, AppEvent::CreateSession);
    assert_eq!(s.store.len(), 2);
    let second = s.store.active_key().to_string();
    assert_ne!(second, DEFAULT_SESSION_KEY);

    update(
        &mut s,
        AppEvent::SelectSession {
            key: DEFAULT_SESSION_KEY.into(),
        },
    );
    assert_eq!(s.store.active_key(), DEFAULT_SESSION_KEY);

    update(&mut s, AppEvent::DeleteSession { key: second });
    assert_eq!(s.store.len(), 1);

    // The protected session survives a delete attempt with a warning
    update(
        &mut s,
        AppEvent::DeleteSession {
            key: DEFAULT_SESSION_KEY.into(),
        },
    );
    assert_eq!(s.store.len(), 1);
    assert!(matches!(s.notice, Some(Notice::Warning(_))));
}

#[test]
fn test_select_model_applies_to_named_session_only() {
    let mut s = state();
    update(&mut s, AppEvent::CreateSession);
    let second = s.store.active_key().to_string();

    update(
        &mut s,
        AppEvent::SelectModel {
            key: second.clone(),
            model_id: "mt5-small".into(),
        },
    );

    assert_eq!(s.store.get(&second).unwrap().selected_model, "mt5-small");
    assert_eq!(
        s.store.get(DEFAULT_SESSION_KEY).unwrap().selected_model,
        MODEL
    );
}
