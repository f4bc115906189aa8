//! Block parsing.
//!
//! Second phase: walks the classified lines top to bottom and builds the
//! block tree. Fenced code is handled first and its interior is never
//! classified, so nothing inside a fence is treated as markup.

use crate::cleanup;
use crate::inline;
use crate::line::{LineKind, classify, is_fence};
use crate::list;
use crate::node::Block;

/// Parsed document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
    /// Non-fatal problems found while parsing (e.g. an unclosed fence).
    pub warnings: Vec<String>,
}

/// Parse markdown text into a block tree.
///
/// Total over any input: malformed markup degrades to literal text.
pub fn parse(markdown: &str) -> ParsedDocument {
    let lines: Vec<&str> = markdown.lines().collect();
    let mut blocks = Vec::new();
    let mut warnings = Vec::new();
    let mut pos = 0;

    while let Some(&line) = lines.get(pos) {
        match classify(line) {
            LineKind::Blank => pos += 1,
            LineKind::Fence => {
                let opened_on = pos + 1;
                let (content, closed) = fenced_content(&lines, &mut pos);
                if !closed {
                    warnings.push(format!("Unclosed code fence opened on line {opened_on}"));
                }
                blocks.push(Block::CodeBlock(content));
            }
            LineKind::Heading(level, text) => {
                blocks.push(Block::Heading {
                    level,
                    content: inline::parse(text.trim_end()),
                });
                pos += 1;
            }
            LineKind::Quote(text) => {
                blocks.push(Block::BlockQuote(inline::parse(text.trim_end())));
                pos += 1;
            }
            LineKind::Rule => {
                blocks.push(Block::Rule);
                pos += 1;
            }
            LineKind::ListItem(_) => {
                blocks.extend(list::assemble(&lines, &mut pos).into_iter().map(Block::List));
            }
            LineKind::Plain(_) => {
                let text = paragraph_text(&lines, &mut pos);
                blocks.push(Block::Paragraph(inline::parse(&text)));
            }
        }
    }

    ParsedDocument {
        blocks: cleanup::cleanup(blocks),
        warnings,
    }
}

/// Collect the interior of the fence opened at `*pos`.
///
/// Returns the literal content and whether a closing fence was found. An
/// unclosed fence runs to the end of the document.
fn fenced_content(lines: &[&str], pos: &mut usize) -> (String, bool) {
    let mut content = String::new();
    *pos += 1;

    while let Some(line) = lines.get(*pos) {
        *pos += 1;
        if is_fence(line) {
            return (content, true);
        }
        content.push_str(line.trim_end_matches('\r'));
        content.push('\n');
    }
    (content, false)
}

/// Join consecutive plain lines starting at `*pos` into one paragraph body.
fn paragraph_text(lines: &[&str], pos: &mut usize) -> String {
    let mut text = String::new();

    while let Some(line) = lines.get(*pos) {
        let LineKind::Plain(line) = classify(line) else {
            break;
        };
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(line.trim());
        *pos += 1;
    }
    text
}
