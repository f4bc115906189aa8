//! Error types for model queries.

/// A question could not be answered by the model.
///
/// Every variant is transient from the user's point of view: the same
/// question may be sent again. Nothing is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// The API rejected the request.
    #[error("model API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Response body was not the expected JSON.
    #[error("invalid model response")]
    Json(#[from] serde_json::Error),

    /// The prompt was blocked by the model's safety filters.
    #[error("prompt blocked: {reason}")]
    Blocked {
        /// Block reason reported by the API.
        reason: String,
    },

    /// The model returned no text.
    #[error("model returned an empty response")]
    EmptyResponse,
}
