//! Security headers for every response.
//!
//! Model answers are inserted into the chat page as markup, so the policy
//! forbids inline and third-party scripts outright. Logo and banner images
//! may come from any https host.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

const CSP: &str = "default-src 'self'; \
                   script-src 'self'; \
                   style-src 'self' 'unsafe-inline'; \
                   img-src 'self' data: https:; \
                   connect-src 'self'; \
                   frame-ancestors 'none'";

/// Header name and value pairs, in the order they are layered.
const HEADERS: [(&str, &str); 3] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
];

/// One header layer per entry in [`HEADERS`]. Values replace any header a
/// handler set.
pub(crate) fn header_layers() -> [SetResponseHeaderLayer<HeaderValue>; 3] {
    HEADERS.map(|(name, value)| {
        SetResponseHeaderLayer::overriding(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_blocks_inline_scripts() {
        assert!(CSP.contains("script-src 'self';"));
        assert!(!CSP.contains("'unsafe-eval'"));
        assert!(CSP.contains("img-src 'self' data: https:"));
    }

    #[test]
    fn test_header_values_are_valid() {
        for (name, value) in HEADERS {
            assert!(HeaderName::from_bytes(name.as_bytes()).is_ok(), "{name}");
            assert!(HeaderValue::from_str(value).is_ok(), "{name}");
        }
        assert_eq!(header_layers().len(), 3);
    }
}
