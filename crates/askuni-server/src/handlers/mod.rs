//! HTTP request handlers.

pub(crate) mod ask;
pub(crate) mod chat;
pub(crate) mod render;
pub(crate) mod status;

use askuni_renderer::{HtmlBackend, MarkdownRenderer, RenderResult};

use crate::error::ServerError;

/// Fallback for non-POST requests on POST-only routes.
pub(crate) async fn method_not_allowed() -> ServerError {
    ServerError::MethodNotAllowed
}

/// Render markdown for the chat page, logging any render warnings.
pub(crate) fn render_markdown(markdown: &str) -> RenderResult {
    let result = MarkdownRenderer::<HtmlBackend>::new().render(markdown);
    for warning in &result.warnings {
        tracing::warn!(warning = %warning, "Render warning");
    }
    result
}
