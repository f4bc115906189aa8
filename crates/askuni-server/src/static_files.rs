//! Static file serving for the chat page.
//!
//! The page lives in `assets/` and is compiled into the binary.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(rust_embed::RustEmbed)]
#[folder = "assets"]
struct Assets;

/// Create router serving the chat page assets.
pub(crate) fn static_router() -> Router<Arc<AppState>> {
    Router::new().fallback(serve_asset)
}

/// Serve an embedded asset, mapping `/` to `index.html`.
async fn serve_asset(req: Request<Body>) -> Response {
    let path = req.uri().path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    // Unknown API paths get a 404, not the page.
    if file_path.starts_with("api/") {
        return StatusCode::NOT_FOUND.into_response();
    }

    match Assets::get(file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(file_path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.to_string())], file.data.into_owned()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
