//! HTML escaping.
//!
//! Escaping happens exactly once, when text leaves the tree for the output
//! buffer. Nothing is escaped while parsing, so entities already present in
//! the input are escaped a single time and never twice.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` for use in element content.
///
/// # Examples
///
/// ```
/// use askuni_renderer::escape_text;
///
/// assert_eq!(escape_text("a < b & c"), "a &lt; b &amp; c");
/// assert_eq!(escape_text("plain"), "plain");
/// ```
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape(s, false)
}

/// Escape `&`, `<`, `>` and `"` for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape(s, true)
}

fn escape(s: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !s.contains(needs_escape) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
