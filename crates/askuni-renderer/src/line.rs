//! Line classification.
//!
//! First phase of block parsing: every line is classified from local facts
//! only, without looking at the lines around it. Markers are anchored at the
//! start of the line, so each rule applies to every line of the document.

use crate::node::{HeadingLevel, ListKind};

/// Columns a tab counts for when measuring list indentation.
const TAB_WIDTH: usize = 4;

/// Fence delimiter.
const FENCE: &str = "```";

/// Classified line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Empty or whitespace only.
    Blank,
    /// Opens or closes a fenced code block. The info string is ignored.
    Fence,
    Heading(HeadingLevel, &'a str),
    /// Exactly `---`.
    Rule,
    /// `> ` followed by the quoted text.
    Quote(&'a str),
    ListItem(ListMarker<'a>),
    Plain(&'a str),
}

/// List item marker facts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ListMarker<'a> {
    pub(crate) kind: ListKind,
    /// Leading whitespace width in columns.
    pub(crate) indent: usize,
    /// Item text after the marker.
    pub(crate) text: &'a str,
}

/// Classify a single line (without its terminating newline).
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    let line = line.trim_end_matches('\r');

    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if is_fence(line) {
        return LineKind::Fence;
    }
    if let Some((level, text)) = heading(line) {
        return LineKind::Heading(level, text);
    }
    if let Some(text) = line.strip_prefix("> ") {
        return LineKind::Quote(text);
    }
    if line == "---" {
        return LineKind::Rule;
    }
    if let Some(marker) = list_marker(line) {
        return LineKind::ListItem(marker);
    }
    LineKind::Plain(line)
}

/// Whether the line starts or ends a fenced block.
///
/// A line such as ```` ```code``` ```` carries its own closing backticks and is
/// left to the inline pass as a code span.
pub(crate) fn is_fence(line: &str) -> bool {
    line.trim_start()
        .strip_prefix(FENCE)
        .is_some_and(|info| !info.contains('`'))
}

/// Whether the line starts with whitespace.
pub(crate) fn is_indented(line: &str) -> bool {
    line.starts_with([' ', '\t'])
}

fn heading(line: &str) -> Option<(HeadingLevel, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let level = HeadingLevel::from_marker_len(hashes)?;
    let text = line[hashes..].strip_prefix(' ')?;
    Some((level, text))
}

fn list_marker(line: &str) -> Option<ListMarker<'_>> {
    let body = line.trim_start();
    let indent = indent_width(&line[..line.len() - body.len()]);

    let (kind, text) = if let Some(rest) = body.strip_prefix("- ").or_else(|| body.strip_prefix("* "))
    {
        (ListKind::Unordered, rest)
    } else {
        let digits = body.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = body[digits..].strip_prefix('.')?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        (ListKind::Ordered, rest)
    };

    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(ListMarker { kind, indent, text })
}

fn indent_width(whitespace: &str) -> usize {
    whitespace
        .chars()
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(kind: ListKind, indent: usize, text: &str) -> LineKind<'_> {
        LineKind::ListItem(ListMarker { kind, indent, text })
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(""), LineKind::Blank);
        assert_eq!(classify("   \t"), LineKind::Blank);
        assert_eq!(classify("\r"), LineKind::Blank);
    }

    #[test]
    fn test_headings_up_to_three_levels() {
        assert_eq!(classify("# Title"), LineKind::Heading(HeadingLevel::H1, "Title"));
        assert_eq!(classify("## Sub"), LineKind::Heading(HeadingLevel::H2, "Sub"));
        assert_eq!(classify("### Deep"), LineKind::Heading(HeadingLevel::H3, "Deep"));
        assert_eq!(classify("#### Deeper"), LineKind::Plain("#### Deeper"));
    }

    #[test]
    fn test_heading_requires_space_at_line_start() {
        assert_eq!(classify("#Title"), LineKind::Plain("#Title"));
        assert_eq!(classify(" # Title"), LineKind::Plain(" # Title"));
        assert_eq!(classify("# "), LineKind::Heading(HeadingLevel::H1, ""));
    }

    #[test]
    fn test_quote() {
        assert_eq!(classify("> quoted"), LineKind::Quote("quoted"));
        assert_eq!(classify(">no space"), LineKind::Plain(">no space"));
    }

    #[test]
    fn test_rule_must_be_exact() {
        assert_eq!(classify("---"), LineKind::Rule);
        assert_eq!(classify("---\r"), LineKind::Rule);
        assert_eq!(classify("----"), LineKind::Plain("----"));
        assert_eq!(classify("--- x"), LineKind::Plain("--- x"));
    }

    #[test]
    fn test_fences() {
        assert_eq!(classify("```"), LineKind::Fence);
        assert_eq!(classify("```rust"), LineKind::Fence);
        assert_eq!(classify("  ```"), LineKind::Fence);
        assert_eq!(classify("```x```"), LineKind::Plain("```x```"));
    }

    #[test]
    fn test_unordered_items() {
        assert_eq!(classify("- a"), item(ListKind::Unordered, 0, "a"));
        assert_eq!(classify("* b"), item(ListKind::Unordered, 0, "b"));
        assert_eq!(classify("  - c"), item(ListKind::Unordered, 2, "c"));
        assert_eq!(classify("\t- d"), item(ListKind::Unordered, 4, "d"));
    }

    #[test]
    fn test_ordered_items() {
        assert_eq!(classify("1. one"), item(ListKind::Ordered, 0, "one"));
        assert_eq!(classify("12.  twelve"), item(ListKind::Ordered, 0, "twelve"));
        assert_eq!(classify("1.no space"), LineKind::Plain("1.no space"));
        assert_eq!(classify("1) paren"), LineKind::Plain("1) paren"));
    }

    #[test]
    fn test_emphasis_is_not_a_list_marker() {
        assert_eq!(classify("*italic* text"), LineKind::Plain("*italic* text"));
        assert_eq!(classify("**bold** text"), LineKind::Plain("**bold** text"));
        assert_eq!(classify("-dash"), LineKind::Plain("-dash"));
    }

    #[test]
    fn test_marker_without_text_is_plain() {
        assert_eq!(classify("- "), LineKind::Plain("- "));
        assert_eq!(classify("1. "), LineKind::Plain("1. "));
        assert_eq!(classify("1.  x"), item(ListKind::Ordered, 0, "x"));
    }

    #[test]
    fn test_is_indented() {
        assert!(is_indented("  more"));
        assert!(is_indented("\tmore"));
        assert!(!is_indented("more"));
    }
}
