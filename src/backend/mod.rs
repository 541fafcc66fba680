// src/backend/mod.rs — HTTP client for the summarize-and-chat service
//
// Two exchanges, both plain request/response: a multipart POST that uploads
// a PDF and returns a backend session id plus summary, and a JSON POST that
// asks a question inside such a session. No retries, no cancellation; the
// transport's defaults are the only timeout policy.

pub mod error;

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;
use url::Url;

use self::error::{classify, BackendError};

/// Successful `/load` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadOutcome {
    pub session_id: String,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
struct AskOutcome {
    answer: String,
}

/// The two exchanges the remote service supports. Front ends depend on this
/// trait so tests can substitute a stub for the live client.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Upload a PDF for processing. Success is exactly HTTP 200 with a
    /// session id and summary.
    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        model: Option<&str>,
    ) -> Result<UploadOutcome, BackendError>;

    /// Ask a question inside an existing backend session.
    async fn ask_question(
        &self,
        backend_session_id: &str,
        question: &str,
        model: Option<&str>,
    ) -> Result<String, BackendError>;
}

pub struct BackendClient {
    base_url: Url,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("Invalid backend URL '{base_url}': {e}"))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }
}

fn transport(e: reqwest::Error) -> BackendError {
    BackendError::Transport(e.to_string())
}

#[async_trait]
impl DocumentBackend for BackendClient {
    async fn upload_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        model: Option<&str>,
    ) -> Result<UploadOutcome, BackendError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let form = multipart::Form::new().part("pdf", part);

        let mut request = self.http.post(self.endpoint("load"));
        if let Some(model) = model {
            request = request.query(&[("model", model)]);
        }

        tracing::debug!(file = file_name, model = ?model, "uploading document");
        let response = request.multipart(form).send().await.map_err(transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "upload rejected");
            return Err(classify(status.as_u16(), &body));
        }

        response
            .json::<UploadOutcome>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }

    async fn ask_question(
        &self,
        backend_session_id: &str,
        question: &str,
        model: Option<&str>,
    ) -> Result<String, BackendError> {
        let mut request = self
            .http
            .post(self.endpoint("chat"))
            .query(&[("session_id", backend_session_id)]);
        if let Some(model) = model {
            request = request.query(&[("model", model)]);
        }

        let response = request
            .json(&serde_json::json!({ "message": question }))
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "question rejected");
            return Err(classify(status.as_u16(), &body));
        }

        let parsed: AskOutcome = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        Ok(parsed.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let c = BackendClient::new("http://127.0.0.1:8000").unwrap();
        assert_eq!(c.endpoint("load"), "http://127.0.0.1:8000/load");

        let c = BackendClient::new("https://scibot.example.com/").unwrap();
        assert_eq!(c.endpoint("chat"), "https://scibot.example.com/chat");
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(BackendClient::new("not a url").is_err());
    }

    #[test]
    fn test_upload_outcome_deserializes_wire_format() {
        let parsed: UploadOutcome =
            serde_json::from_str(r#"{"session_id":"abc","summary":"S"}"#).unwrap();
        assert_eq!(parsed.session_id, "abc");
        assert_eq!(parsed.summary, "S");
    }

    #[test]
    fn test_ask_outcome_deserializes_wire_format() {
        let parsed: AskOutcome = serde_json::from_str(r#"{"answer":"42"}"#).unwrap();
        assert_eq!(parsed.answer, "42");
    }
}
