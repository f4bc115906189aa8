//! Render endpoint.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::render_markdown;

/// Request for POST /api/render.
#[derive(Deserialize)]
pub(crate) struct RenderRequest {
    #[serde(default)]
    markdown: String,
}

/// Response for POST /api/render.
#[derive(Serialize)]
pub(crate) struct RenderResponse {
    html: String,
    warnings: Vec<String>,
}

/// Handle POST /api/render.
///
/// Rendering runs on the blocking pool so large documents do not hold up
/// the async workers.
pub(crate) async fn post_render(
    body: Result<Json<RenderRequest>, JsonRejection>,
) -> Result<Json<RenderResponse>, ServerError> {
    let Json(request) = body.map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
    let result = tokio::task::spawn_blocking(move || render_markdown(&request.markdown)).await?;
    Ok(Json(RenderResponse {
        html: result.html,
        warnings: result.warnings,
    }))
}
