//! List assembly.
//!
//! Collects a run of list-item lines starting at the current position and
//! turns it into list containers. Every run is wrapped on its own, so a
//! document may hold any number of ordered and unordered lists.
//!
//! Run rules:
//! - blank lines inside a run are skipped when the next non-blank line is an
//!   item of the same kind as the previous item;
//! - an indented plain line directly after an item continues that item;
//! - an item indented at least [`NEST_INDENT`] columns deeper than its list
//!   opens a nested list inside the previous item;
//! - a change of marker kind at the same depth starts a new list.

use crate::inline;
use crate::line::{LineKind, ListMarker, classify, is_indented};
use crate::node::{List, ListItem, ListKind};

/// Extra indentation (in columns) that nests an item under its predecessor.
const NEST_INDENT: usize = 2;

/// Item line with continuation text already folded in.
#[derive(Debug)]
struct ItemLine {
    kind: ListKind,
    indent: usize,
    text: String,
}

impl From<ListMarker<'_>> for ItemLine {
    fn from(marker: ListMarker<'_>) -> Self {
        Self {
            kind: marker.kind,
            indent: marker.indent,
            text: marker.text.to_owned(),
        }
    }
}

/// Assemble the run of list lines starting at `*pos`, advancing `*pos` past it.
pub(crate) fn assemble(lines: &[&str], pos: &mut usize) -> Vec<List> {
    nest(collect_run(lines, pos))
}

fn collect_run(lines: &[&str], pos: &mut usize) -> Vec<ItemLine> {
    let mut items: Vec<ItemLine> = Vec::new();

    while let Some(line) = lines.get(*pos) {
        match classify(line) {
            LineKind::ListItem(marker) => {
                items.push(marker.into());
                *pos += 1;
            }
            LineKind::Plain(text) if is_indented(text) => {
                let Some(last) = items.last_mut() else { break };
                last.text.push('\n');
                last.text.push_str(text.trim());
                *pos += 1;
            }
            LineKind::Blank => {
                let Some(last_kind) = items.last().map(|item| item.kind) else {
                    break;
                };
                let Some(offset) = lines[*pos..].iter().position(|l| !l.trim().is_empty()) else {
                    break;
                };
                match classify(lines[*pos + offset]) {
                    LineKind::ListItem(next) if next.kind == last_kind => *pos += offset,
                    _ => break,
                }
            }
            _ => break,
        }
    }

    items
}

fn nest(items: Vec<ItemLine>) -> Vec<List> {
    let mut done = Vec::new();
    let mut stack: Vec<(usize, List)> = Vec::new();

    for item in items {
        while stack.len() > 1 && stack.last().is_some_and(|(indent, _)| item.indent < *indent) {
            close_top(&mut stack, &mut done);
        }

        let top = stack
            .last()
            .map(|(indent, list)| (*indent, list.kind, list.items.is_empty()));
        match top {
            None => stack.push((item.indent, List::new(item.kind))),
            Some((indent, _, false)) if item.indent >= indent + NEST_INDENT => {
                stack.push((item.indent, List::new(item.kind)));
            }
            Some((indent, kind, _)) if kind != item.kind => {
                close_top(&mut stack, &mut done);
                let level = if stack.is_empty() { item.indent } else { indent };
                stack.push((level, List::new(item.kind)));
            }
            Some(_) => {}
        }

        if let Some((_, list)) = stack.last_mut() {
            list.items.push(ListItem {
                content: inline::parse(&item.text),
                children: Vec::new(),
            });
        }
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut done);
    }
    done
}

/// Pop the innermost list and attach it to its parent item, or emit it.
fn close_top(stack: &mut Vec<(usize, List)>, done: &mut Vec<List>) {
    let Some((_, list)) = stack.pop() else { return };
    match stack.last_mut().and_then(|(_, parent)| parent.items.last_mut()) {
        Some(parent_item) => parent_item.children.push(list),
        None => done.push(list),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::node::Inline;

    fn run(markdown: &str) -> (Vec<List>, usize) {
        let lines: Vec<&str> = markdown.lines().collect();
        let mut pos = 0;
        let lists = assemble(&lines, &mut pos);
        (lists, pos)
    }

    fn texts(list: &List) -> Vec<String> {
        list.items
            .iter()
            .map(|item| Inline::plain_text(&item.content))
            .collect()
    }

    #[test]
    fn test_single_unordered_run() {
        let (lists, pos) = run("- a\n- b\n- c");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].kind, ListKind::Unordered);
        assert_eq!(texts(&lists[0]), vec!["a", "b", "c"]);
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_star_and_dash_share_a_list() {
        let (lists, _) = run("- a\n* b");
        assert_eq!(lists.len(), 1);
        assert_eq!(texts(&lists[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_ordered_run() {
        let (lists, _) = run("1. one\n2. two");
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].kind, ListKind::Ordered);
        assert_eq!(texts(&lists[0]), vec!["one", "two"]);
    }

    #[test]
    fn test_kind_change_starts_new_list() {
        let (lists, _) = run("- a\n1. b");
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].kind, ListKind::Unordered);
        assert_eq!(lists[1].kind, ListKind::Ordered);
    }

    #[test]
    fn test_blank_line_between_same_kind_items() {
        let (lists, pos) = run("- a\n\n- b\n\ntext");
        assert_eq!(lists.len(), 1);
        assert_eq!(texts(&lists[0]), vec!["a", "b"]);
        // Stops on the blank line before the paragraph.
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_blank_line_before_other_kind_ends_run() {
        let (lists, pos) = run("- a\n\n1. b");
        assert_eq!(lists.len(), 1);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_indented_continuation() {
        let (lists, _) = run("- first\n  still first\n- second");
        assert_eq!(texts(&lists[0]), vec!["first\nstill first", "second"]);
    }

    #[test]
    fn test_unindented_plain_line_ends_run() {
        let (lists, pos) = run("- a\nparagraph");
        assert_eq!(texts(&lists[0]), vec!["a"]);
        assert_eq!(pos, 1);
    }

    #[test]
    fn test_nested_list() {
        let (lists, _) = run("- a\n  - a1\n  - a2\n- b");
        assert_eq!(lists.len(), 1);
        assert_eq!(texts(&lists[0]), vec!["a", "b"]);
        let children = &lists[0].items[0].children;
        assert_eq!(children.len(), 1);
        assert_eq!(texts(&children[0]), vec!["a1", "a2"]);
        assert!(lists[0].items[1].children.is_empty());
    }

    #[test]
    fn test_nested_ordered_inside_unordered() {
        let (lists, _) = run("- steps\n   1. first\n   2. second");
        let children = &lists[0].items[0].children;
        assert_eq!(children[0].kind, ListKind::Ordered);
        assert_eq!(texts(&children[0]), vec!["first", "second"]);
    }

    #[test]
    fn test_single_space_indent_does_not_nest() {
        let (lists, _) = run("- a\n - b");
        assert_eq!(texts(&lists[0]), vec!["a", "b"]);
        assert!(lists[0].items[0].children.is_empty());
    }

    #[test]
    fn test_dedent_below_root_stays_at_root() {
        let (lists, _) = run("  - a\n- b");
        assert_eq!(lists.len(), 1);
        assert_eq!(texts(&lists[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_items_are_inline_parsed() {
        let (lists, _) = run("- **bold** item");
        assert_eq!(
            lists[0].items[0].content,
            vec![
                Inline::Strong(vec![Inline::Text("bold".to_owned())]),
                Inline::Text(" item".to_owned()),
            ]
        );
    }
}
