//! Tree cleanup.
//!
//! Last pass before serialization. After it runs no paragraph is empty and
//! no list is without items. Block nodes cannot sit inside a paragraph by
//! construction, so nothing has to be un-nested here.

use crate::node::{Block, Inline, List};

/// Normalize a parsed block sequence.
pub(crate) fn cleanup(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .filter_map(|block| match block {
            Block::Paragraph(content) => {
                let content = trim_edges(content);
                (!content.is_empty()).then_some(Block::Paragraph(content))
            }
            Block::List(list) => clean_list(list).map(Block::List),
            other => Some(other),
        })
        .collect()
}

fn clean_list(mut list: List) -> Option<List> {
    for item in &mut list.items {
        let children = std::mem::take(&mut item.children);
        item.children = children.into_iter().filter_map(clean_list).collect();
    }
    (!list.items.is_empty()).then_some(list)
}

/// Trim whitespace at the outer edges of a span sequence and drop text
/// nodes left empty.
fn trim_edges(mut content: Vec<Inline>) -> Vec<Inline> {
    if let Some(Inline::Text(text)) = content.first_mut() {
        let trimmed = text.trim_start();
        if trimmed.len() != text.len() {
            *text = trimmed.to_owned();
        }
    }
    if let Some(Inline::Text(text)) = content.last_mut() {
        text.truncate(text.trim_end().len());
    }
    content.retain(|inline| !matches!(inline, Inline::Text(text) if text.is_empty()));
    content
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::{ListItem, ListKind};

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_owned())
    }

    #[test]
    fn test_drops_empty_paragraphs() {
        let blocks = vec![
            Block::Paragraph(vec![]),
            Block::Paragraph(vec![text("   ")]),
            Block::Paragraph(vec![text("kept")]),
        ];
        assert_eq!(cleanup(blocks), vec![Block::Paragraph(vec![text("kept")])]);
    }

    #[test]
    fn test_trims_paragraph_edges() {
        let blocks = vec![Block::Paragraph(vec![
            text("  lead "),
            Inline::Code("x".to_owned()),
            text(" tail  "),
        ])];
        assert_eq!(
            cleanup(blocks),
            vec![Block::Paragraph(vec![
                text("lead "),
                Inline::Code("x".to_owned()),
                text(" tail"),
            ])]
        );
    }

    #[test]
    fn test_paragraph_of_only_code_is_kept() {
        let blocks = vec![Block::Paragraph(vec![Inline::Code(" ".to_owned())])];
        assert_eq!(cleanup(blocks.clone()), blocks);
    }

    #[test]
    fn test_drops_empty_lists() {
        let mut parent = List::new(ListKind::Unordered);
        parent.items.push(ListItem {
            content: vec![text("a")],
            children: vec![List::new(ListKind::Ordered)],
        });
        let blocks = vec![Block::List(List::new(ListKind::Unordered)), Block::List(parent)];

        let cleaned = cleanup(blocks);
        assert_eq!(cleaned.len(), 1);
        let Block::List(list) = &cleaned[0] else {
            panic!("expected list");
        };
        assert!(list.items[0].children.is_empty());
    }

    #[test]
    fn test_other_blocks_untouched() {
        let blocks = vec![Block::Rule, Block::CodeBlock(String::new())];
        assert_eq!(cleanup(blocks.clone()), blocks);
    }
}
