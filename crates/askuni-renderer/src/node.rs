//! Document tree produced by the block and inline passes.
//!
//! The tree is the only thing the backends see. Block nodes never nest inside
//! a paragraph, so serializing it cannot produce the paragraph-wrapped headings
//! or lists that a purely textual pipeline has to repair afterwards.

/// Heading level. Only the first three levels are recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Level for a run of `count` leading `#` characters.
    pub(crate) fn from_marker_len(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }

    /// Numeric level (1-3).
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }
}

/// List flavour, decided by the item marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// `1.`, `2.`, ... markers.
    Ordered,
    /// `-` or `*` markers.
    Unordered,
}

/// Block-level node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Heading {
        level: HeadingLevel,
        content: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    List(List),
    /// Literal code block content, one `\n` after every line.
    CodeBlock(String),
    /// Single-line quote.
    BlockQuote(Vec<Inline>),
    Rule,
}

/// A list container and its items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

impl List {
    pub(crate) fn new(kind: ListKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }
}

/// A list item with optional nested lists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListItem {
    pub content: Vec<Inline>,
    pub children: Vec<List>,
}

/// Span-level node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    /// Inline code; content is literal.
    Code(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Link {
        href: String,
        content: Vec<Inline>,
    },
}

impl Inline {
    /// Concatenated visible text of a span sequence, without markup.
    #[must_use]
    pub fn plain_text(inlines: &[Inline]) -> String {
        let mut out = String::new();
        collect_text(inlines, &mut out);
        out
    }
}

fn collect_text(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(children)
            | Inline::Emphasis(children)
            | Inline::Link {
                content: children, ..
            } => collect_text(children, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_from_marker_len() {
        assert_eq!(HeadingLevel::from_marker_len(1), Some(HeadingLevel::H1));
        assert_eq!(HeadingLevel::from_marker_len(3), Some(HeadingLevel::H3));
        assert_eq!(HeadingLevel::from_marker_len(4), None);
        assert_eq!(HeadingLevel::from_marker_len(0), None);
    }

    #[test]
    fn test_plain_text_flattens_nested_spans() {
        let inlines = vec![
            Inline::Text("see ".to_owned()),
            Inline::Link {
                href: "http://x.test".to_owned(),
                content: vec![Inline::Strong(vec![Inline::Text("site".to_owned())])],
            },
            Inline::Code("a*b".to_owned()),
        ];
        assert_eq!(Inline::plain_text(&inlines), "see sitea*b");
    }
}
