//! Generic markdown renderer with pluggable backend.

use std::fmt::Write;
use std::marker::PhantomData;

use crate::backend::RenderBackend;
use crate::block::{self, ParsedDocument};
use crate::escape::escape_text;
use crate::node::{Block, Inline, List, ListKind};

/// Result of rendering markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderResult {
    /// Rendered markup.
    pub html: String,
    /// Warnings generated while parsing (e.g. an unclosed code fence).
    pub warnings: Vec<String>,
}

/// Generic markdown renderer with pluggable backend.
///
/// Parses the input into a block tree, then serializes the tree in a single
/// pass. Headings, paragraphs, lists and inline emphasis are written here;
/// code blocks, quotes, links and rules go through `B`.
pub struct MarkdownRenderer<B: RenderBackend> {
    output: String,
    _backend: PhantomData<B>,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Create a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(1024),
            _backend: PhantomData,
        }
    }

    /// Render markdown text.
    pub fn render(&mut self, markdown: &str) -> RenderResult {
        self.render_parsed(block::parse(markdown))
    }

    /// Render an already parsed document.
    pub fn render_parsed(&mut self, document: ParsedDocument) -> RenderResult {
        for block in &document.blocks {
            self.block(block);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            warnings: document.warnings,
        }
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, content } => {
                let level = level.as_u8();
                write!(self.output, "<h{level}>").unwrap();
                self.inlines(content);
                write!(self.output, "</h{level}>").unwrap();
            }
            Block::Paragraph(content) => {
                self.output.push_str("<p>");
                self.inlines(content);
                self.output.push_str("</p>");
            }
            Block::List(list) => self.list(list),
            Block::CodeBlock(content) => B::code_block(content, &mut self.output),
            Block::BlockQuote(content) => {
                B::blockquote_start(&mut self.output);
                self.inlines(content);
                B::blockquote_end(&mut self.output);
            }
            Block::Rule => B::horizontal_rule(&mut self.output),
        }
    }

    fn list(&mut self, list: &List) {
        let tag = match list.kind {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        };
        write!(self.output, "<{tag}>").unwrap();
        for item in &list.items {
            self.output.push_str("<li>");
            self.inlines(&item.content);
            for child in &item.children {
                self.list(child);
            }
            self.output.push_str("</li>");
        }
        write!(self.output, "</{tag}>").unwrap();
    }

    fn inlines(&mut self, content: &[Inline]) {
        for inline in content {
            match inline {
                Inline::Text(text) => self.output.push_str(&escape_text(text)),
                Inline::Code(code) => {
                    write!(self.output, "<code>{}</code>", escape_text(code)).unwrap();
                }
                Inline::Strong(children) => {
                    self.output.push_str("<strong>");
                    self.inlines(children);
                    self.output.push_str("</strong>");
                }
                Inline::Emphasis(children) => {
                    self.output.push_str("<em>");
                    self.inlines(children);
                    self.output.push_str("</em>");
                }
                Inline::Link { href, content } => {
                    B::link_start(href, &mut self.output);
                    self.inlines(content);
                    B::link_end(&mut self.output);
                }
            }
        }
    }
}

impl<B: RenderBackend> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new()
    }
}
