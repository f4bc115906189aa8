//! Relay endpoint.
//!
//! Stateless pass-through for clients that hold their own copy of the
//! knowledge documents: the request carries the question and both documents,
//! the response carries the raw model reply. Documents missing from the
//! request fall back to the ones loaded at start-up.

use std::sync::Arc;

use askuni_llm::compose_prompt;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Request for POST /api/chat.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct ChatRequest {
    prompt: Option<String>,
    knowledge_base: Option<String>,
    summary: Option<String>,
}

/// Response for POST /api/chat.
#[derive(Serialize)]
pub(crate) struct ChatResponse {
    reply: String,
}

/// Handle POST /api/chat.
pub(crate) async fn post_chat(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    // An unreadable body has no prompt.
    let request = body.map_or_else(
        |rejection| {
            tracing::debug!(rejection = %rejection, "Unreadable relay body");
            ChatRequest::default()
        },
        |Json(request)| request,
    );

    let prompt = request
        .prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .ok_or(ServerError::MissingPrompt)?;

    let model = state
        .model()
        .map_err(|failure| ServerError::Relay(failure.detail.clone()))?;
    let model = Arc::clone(model);

    let loaded = state.knowledge();
    let summary = request
        .summary
        .or_else(|| loaded.map(|k| k.summary.clone()))
        .unwrap_or_default();
    let knowledge_base = request
        .knowledge_base
        .or_else(|| loaded.map(|k| k.knowledge_base.clone()))
        .unwrap_or_default();

    let text = compose_prompt(&summary, &knowledge_base, &prompt);
    let reply = tokio::task::spawn_blocking(move || model.generate(&text))
        .await?
        .map_err(|e| {
            tracing::error!(error = %e, "Relay query failed");
            ServerError::Relay(e.to_string())
        })?;

    Ok(Json(ChatResponse { reply }))
}
