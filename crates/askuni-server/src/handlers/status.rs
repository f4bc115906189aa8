//! Status endpoint.
//!
//! Tells the chat page whether questions can be sent and which message to
//! show in the status bar.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::{AppState, Branding, ErrorClass, LOADING_MESSAGE, READY_MESSAGE, Readiness};

/// Response for GET /api/status.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StatusResponse {
    /// `loading`, `ready` or `unavailable`.
    state: &'static str,
    ready: bool,
    /// Status bar text.
    message: &'static str,
    /// Shown when a question is sent before the assistant is ready.
    #[serde(skip_serializing_if = "Option::is_none")]
    blocked_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_class: Option<ErrorClass>,
    branding: Branding,
}

/// Handle GET /api/status.
pub(crate) async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let readiness = state.readiness();
    let ready = matches!(readiness, Readiness::Ready { .. });
    let (name, message, blocked_message, error_class) = match readiness {
        Readiness::Loading => ("loading", LOADING_MESSAGE, Some(LOADING_MESSAGE), None),
        Readiness::Ready { .. } => ("ready", READY_MESSAGE, None, None),
        Readiness::Unavailable(failure) => (
            "unavailable",
            failure.class.status_message(),
            Some(failure.class.user_message()),
            Some(failure.class),
        ),
    };

    Json(StatusResponse {
        state: name,
        ready,
        message,
        blocked_message,
        error_class,
        branding: state.branding.clone(),
    })
}
