// src/cli/ask.rs — One-shot question

use crate::backend::DocumentBackend;
use crate::infra::errors::PaperTalkError;

pub async fn run_ask(
    backend: &dyn DocumentBackend,
    session_id: &str,
    question: &str,
    model: Option<&str>,
) -> Result<(), PaperTalkError> {
    if question.trim().is_empty() {
        return Err(anyhow::anyhow!("Type a question before sending.").into());
    }

    let answer = backend.ask_question(session_id, question, model).await?;
    println!("{answer}");
    Ok(())
}
