//! Output format abstraction.

/// Format-specific pieces of the output.
///
/// [`MarkdownRenderer`](crate::MarkdownRenderer) walks the document tree and
/// writes the shared structure (headings, paragraphs, lists, inline emphasis)
/// itself. Elements whose markup differs between targets are delegated here.
/// Implementations receive unescaped input and are responsible for escaping
/// it.
pub trait RenderBackend {
    /// Write a code block holding `content` verbatim.
    fn code_block(content: &str, out: &mut String);

    /// Open a blockquote.
    fn blockquote_start(out: &mut String);

    /// Close a blockquote.
    fn blockquote_end(out: &mut String);

    /// Open a hyperlink to `href`.
    fn link_start(href: &str, out: &mut String);

    /// Close a hyperlink.
    fn link_end(out: &mut String);

    /// Write a thematic break.
    fn horizontal_rule(out: &mut String);
}
