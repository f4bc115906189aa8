//! Markdown renderer for model answers.
//!
//! Turns the loosely formatted markdown a language model produces into an
//! HTML fragment that is safe to insert into a page.
//!
//! # Architecture
//!
//! Rendering runs in two phases:
//! - parsing: every line is classified on its own, then a block tree is built
//!   (fenced code, headings, quotes, rules, lists, paragraphs) and paragraph
//!   and item text is split into inline spans (code, links, bold, italic);
//! - serialization: [`MarkdownRenderer`] walks the tree once and writes markup,
//!   delegating format-specific elements to a [`RenderBackend`].
//!
//! Text is escaped when it is written, never while parsing, so entities are
//! escaped exactly once. Rendering has no error conditions: malformed markup
//! comes out as literal text. Recoverable oddities such as an unclosed code
//! fence are reported in [`RenderResult::warnings`].
//!
//! # Example
//!
//! ```
//! use askuni_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let result = MarkdownRenderer::<HtmlBackend>::new().render("# Hello\n\n**Bold** text");
//! assert_eq!(result.html, "<h1>Hello</h1><p><strong>Bold</strong> text</p>");
//! ```

mod backend;
mod block;
mod cleanup;
mod escape;
mod html;
mod inline;
mod line;
mod list;
mod node;
mod renderer;

pub use backend::RenderBackend;
pub use block::{ParsedDocument, parse};
pub use escape::{escape_attr, escape_text};
pub use html::HtmlBackend;
pub use node::{Block, HeadingLevel, Inline, List, ListItem, ListKind};
pub use renderer::{MarkdownRenderer, RenderResult};

/// Render markdown to an HTML fragment, discarding warnings.
///
/// ```
/// assert_eq!(
///     askuni_renderer::render("- a\n- b"),
///     "<ul><li>a</li><li>b</li></ul>"
/// );
/// ```
#[must_use]
pub fn render(markdown: &str) -> String {
    MarkdownRenderer::<HtmlBackend>::new().render(markdown).html
}
