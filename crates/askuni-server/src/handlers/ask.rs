//! Ask endpoint used by the chat page.
//!
//! Answers from the documents loaded at start-up and returns the reply both
//! as markdown and as rendered markup.

use std::sync::Arc;

use askuni_llm::compose_question_prompt;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServerError;
use crate::handlers::render_markdown;
use crate::state::{AppState, Readiness};

/// Request for POST /api/ask.
#[derive(Deserialize)]
pub(crate) struct AskRequest {
    #[serde(default)]
    question: String,
}

/// Response for POST /api/ask.
#[derive(Serialize)]
pub(crate) struct AskResponse {
    /// Model reply as markdown.
    reply: String,
    /// Reply rendered to markup.
    html: String,
}

/// Handle POST /api/ask.
pub(crate) async fn post_ask(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ServerError> {
    let Json(request) = body.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    let question = request.question.trim();
    if question.is_empty() {
        return Err(ServerError::EmptyQuestion);
    }

    let (model, prompt) = match state.readiness() {
        Readiness::Loading => return Err(ServerError::Loading),
        Readiness::Unavailable(failure) => return Err(ServerError::Unavailable(failure.clone())),
        Readiness::Ready { model, knowledge } => (
            Arc::clone(model),
            compose_question_prompt(&knowledge.summary, &knowledge.knowledge_base, question),
        ),
    };

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, question_len = question.len(), "Answering question");

    let reply = tokio::task::spawn_blocking(move || model.generate(&prompt))
        .await?
        .inspect_err(|e| tracing::error!(%request_id, error = %e, "Model query failed"))?;

    let html = render_markdown(&reply).html;
    Ok(Json(AskResponse { reply, html }))
}
