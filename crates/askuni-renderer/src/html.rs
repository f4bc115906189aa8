//! HTML backend for chat messages.
//!
//! Produces the fragment inserted into a chat bubble: no document wrapper,
//! no ids, no newlines between elements.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::escape::{escape_attr, escape_text};

/// HTML render backend.
///
/// - `<pre><code>` for code blocks
/// - `<blockquote>` for quotes
/// - `<a href="…" target="_blank">` for links, so answers never navigate the
///   chat page away
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(content: &str, out: &mut String) {
        write!(out, "<pre><code>{}</code></pre>", escape_text(content)).unwrap();
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn link_start(href: &str, out: &mut String) {
        write!(out, r#"<a href="{}" target="_blank">"#, escape_attr(href)).unwrap();
    }

    fn link_end(out: &mut String) {
        out.push_str("</a>");
    }

    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_is_escaped() {
        let mut out = String::new();
        HtmlBackend::code_block("a < b\n", &mut out);
        assert_eq!(out, "<pre><code>a &lt; b\n</code></pre>");
    }

    #[test]
    fn test_link_href_is_attribute_escaped() {
        let mut out = String::new();
        HtmlBackend::link_start(r#"http://x.test/?a="1"&b=2"#, &mut out);
        HtmlBackend::link_end(&mut out);
        assert_eq!(
            out,
            r#"<a href="http://x.test/?a=&quot;1&quot;&amp;b=2" target="_blank"></a>"#
        );
    }
}
