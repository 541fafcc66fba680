// src/cli/load.rs — One-shot document upload

use std::path::Path;

use crate::backend::DocumentBackend;
use crate::infra::errors::PaperTalkError;

/// Upload a PDF and print the backend session id plus summary. The printed
/// id is what `papertalk ask` continues the conversation with.
pub async fn run_load(
    backend: &dyn DocumentBackend,
    file: &Path,
    model: Option<&str>,
) -> Result<(), PaperTalkError> {
    let bytes = tokio::fs::read(file).await?;
    let file_name = file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document.pdf");

    tracing::debug!(file = %file.display(), size = bytes.len(), "loading document");
    let outcome = backend.upload_document(file_name, bytes, model).await?;

    println!("session: {}", outcome.session_id);
    println!();
    println!("{}", outcome.summary);
    Ok(())
}
