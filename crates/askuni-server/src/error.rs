//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::{ErrorClass, LOADING_MESSAGE, StartupFailure};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request method other than POST on a POST-only route.
    #[error("Only POST allowed")]
    MethodNotAllowed,

    /// Relay request without a prompt.
    #[error("Missing prompt")]
    MissingPrompt,

    /// Ask request with a blank question.
    #[error("Question is empty")]
    EmptyQuestion,

    /// Request body could not be read as the expected JSON.
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    /// Documents are still loading.
    #[error("Assistant is still loading")]
    Loading,

    /// Start-up failed; questions are refused until restart.
    #[error("Assistant unavailable: {}", .0.detail)]
    Unavailable(StartupFailure),

    /// The model failed to answer a question from the chat page.
    #[error("Query failed: {0}")]
    Query(#[from] askuni_llm::QueryError),

    /// The model failed to answer a relay request.
    #[error("{0}")]
    Relay(String),

    /// A blocking task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({"error": self.to_string()}),
            ),
            Self::MissingPrompt | Self::EmptyQuestion => {
                (StatusCode::BAD_REQUEST, json!({"error": self.to_string()}))
            }
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({"error": message})),
            Self::Loading => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({"error": LOADING_MESSAGE}),
            ),
            Self::Unavailable(failure) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": failure.class.user_message(),
                    "errorClass": failure.class,
                    "retryable": false,
                }),
            ),
            Self::Query(_) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": ErrorClass::Query.user_message(),
                    "errorClass": ErrorClass::Query,
                    "retryable": true,
                }),
            ),
            Self::Relay(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": message}),
            ),
            Self::Task(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
