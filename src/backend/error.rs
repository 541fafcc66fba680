// src/backend/error.rs — Backend failure classification
//
// Classification is total and deterministic: every (status, body) pair maps
// to exactly one variant. A JSON body with a recognized `error` keyword wins
// over the status-code fallback. The display line of each variant is the
// entire recovery story — nothing is retried, the user tries again.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("The document is too large for this model. Try a smaller PDF or pick another model.")]
    DocumentTooLarge,

    #[error("The model's usage limit has been reached. Try again later or pick another model.")]
    RateLimited,

    #[error("Authentication failed. Check the service configuration.")]
    Auth,

    #[error("The selected model is not available. Pick another model.")]
    ModelUnavailable,

    #[error("Server error: {message}")]
    Server { message: String },

    #[error("The request was rejected. Check the document or pick another model.")]
    BadRequest,

    #[error("Internal server error. Try again in a few minutes or pick another model.")]
    Internal,

    #[error("Service error (status {status}). Try again.")]
    Http { status: u16 },

    #[error("Could not reach the backend: {0}")]
    Transport(String),

    #[error("Could not build the request: {0}")]
    Request(String),

    #[error("Unexpected response from the backend: {0}")]
    InvalidResponse(String),
}

/// Map a non-200 response to its user-facing category.
///
/// Keyword rules apply in order against the JSON `error` field,
/// case-insensitively; a body that is not a JSON object falls back to the
/// status code alone.
pub fn classify(status: u16, body: &str) -> BackendError {
    if let Some(message) = json_error_field(body) {
        let lower = message.to_lowercase();
        if lower.contains("request body too large") {
            return BackendError::DocumentTooLarge;
        }
        if lower.contains("quota") || lower.contains("limit") {
            return BackendError::RateLimited;
        }
        if lower.contains("authentication") || lower.contains("unauthorized") {
            return BackendError::Auth;
        }
        if lower.contains("not found") {
            return BackendError::ModelUnavailable;
        }
        return BackendError::Server { message };
    }

    match status {
        400 => BackendError::BadRequest,
        429 => BackendError::RateLimited,
        500 => BackendError::Internal,
        status => BackendError::Http { status },
    }
}

/// The `error` field of a JSON object body. A missing field reads as empty,
/// matching the service's older revisions; a body that is not a JSON object
/// yields `None`.
fn json_error_field(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if !value.is_object() {
        return None;
    }
    Some(
        value
            .get("error")
            .and_then(|e| e.as_str())
            .unwrap_or_default()
            .to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_beats_status() {
        // 500 would mean Internal, but the body keyword wins
        let e = classify(500, r#"{"error":"Daily quota exceeded"}"#);
        assert_eq!(e, BackendError::RateLimited);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            classify(413, r#"{"error":"REQUEST BODY TOO LARGE"}"#),
            BackendError::DocumentTooLarge
        );
        assert_eq!(
            classify(401, r#"{"error":"Unauthorized key"}"#),
            BackendError::Auth
        );
        assert_eq!(
            classify(404, r#"{"error":"Model Not Found"}"#),
            BackendError::ModelUnavailable
        );
    }

    #[test]
    fn test_keyword_order_first_wins() {
        // Matches both the too-large and the limit rule; the first applies
        assert_eq!(
            classify(413, r#"{"error":"Request body too large: over the limit"}"#),
            BackendError::DocumentTooLarge
        );
    }

    #[test]
    fn test_unrecognized_message_carries_raw_text() {
        assert_eq!(
            classify(502, r#"{"error":"upstream exploded"}"#),
            BackendError::Server {
                message: "upstream exploded".into()
            }
        );
    }

    #[test]
    fn test_status_fallback() {
        assert_eq!(classify(400, "bad"), BackendError::BadRequest);
        assert_eq!(classify(429, "slow down"), BackendError::RateLimited);
        assert_eq!(classify(500, "<html>oops</html>"), BackendError::Internal);
        assert_eq!(classify(503, ""), BackendError::Http { status: 503 });
    }

    #[test]
    fn test_non_object_json_falls_back_to_status() {
        assert_eq!(classify(400, r#""oops""#), BackendError::BadRequest);
        assert_eq!(classify(418, "[1,2]"), BackendError::Http { status: 418 });
    }
}
