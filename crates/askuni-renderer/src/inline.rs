//! Inline span parsing.
//!
//! Spans are recognized in a fixed order: code spans, links, bold (`**`, then
//! `__`), italic (`*`, then `_`). Each step works on a token stream in which
//! the spans found by earlier steps are opaque groups, so a later delimiter
//! pair can wrap a whole earlier span but never cut through one. That keeps
//! the resulting tree well nested for any input.
//!
//! Emphasis bodies may not contain their own delimiter character. A stray
//! `*` or `_` next to emphasis markers therefore breaks pairing and is left as
//! literal text; this is accepted behavior.

use crate::node::Inline;

/// Emphasis passes in application order.
const EMPHASIS_PASSES: [(char, usize, Wrap); 4] = [
    ('*', 2, Wrap::Strong),
    ('_', 2, Wrap::Strong),
    ('*', 1, Wrap::Emphasis),
    ('_', 1, Wrap::Emphasis),
];

#[derive(Clone, Copy, Debug)]
enum Wrap {
    Strong,
    Emphasis,
}

#[derive(Debug)]
enum Token {
    Char(char),
    Code(String),
    Group(Group, Vec<Token>),
}

#[derive(Debug)]
enum Group {
    Strong,
    Emphasis,
    Link(String),
}

impl Token {
    fn is_char(&self, c: char) -> bool {
        matches!(self, Self::Char(t) if *t == c)
    }
}

/// Parse a run of text into inline nodes.
pub(crate) fn parse(text: &str) -> Vec<Inline> {
    let mut tokens = links(code_spans(text));
    for (delim, width, wrap) in EMPHASIS_PASSES {
        tokens = pair(tokens, delim, width, wrap);
    }
    to_inlines(tokens)
}

/// Split out `` `code` `` spans. Content must be non-empty and is literal.
fn code_spans(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '`'
            && let Some(len) = chars[i + 1..].iter().position(|&c| c == '`')
            && len > 0
        {
            tokens.push(Token::Code(chars[i + 1..i + 1 + len].iter().collect()));
            i += len + 2;
            continue;
        }
        tokens.push(Token::Char(chars[i]));
        i += 1;
    }
    tokens
}

/// Group `[text](url)` links. The URL must be plain characters.
fn links(tokens: Vec<Token>) -> Vec<Token> {
    let spans = find_links(&tokens);
    let mut out = Vec::with_capacity(tokens.len());
    let mut rest = tokens.into_iter();
    let mut pos = 0;

    for span in spans {
        out.extend(rest.by_ref().take(span.start - pos));
        rest.next();
        let content = rest.by_ref().take(span.close - span.start - 1).collect();
        // `](url)` up to and including the closing paren.
        rest.nth(span.end - span.close);
        out.push(Token::Group(Group::Link(span.href), content));
        pos = span.end + 1;
    }

    out.extend(rest);
    out
}

/// A recognized link: bracket and paren positions plus the target.
struct LinkSpan {
    start: usize,
    close: usize,
    end: usize,
    href: String,
}

/// Locate every link, leftmost first, without overlaps.
fn find_links(tokens: &[Token]) -> Vec<LinkSpan> {
    let none = tokens.len();
    let next_close = next_index(tokens, |t| t.is_char(']'));
    let next_paren = next_index(tokens, |t| t.is_char(')'));
    let next_code = next_index(tokens, |t| matches!(t, Token::Code(_)));

    let link_at = |start: usize| {
        let close = next_close[start + 1];
        if close == none || close == start + 1 || !tokens.get(close + 1)?.is_char('(') {
            return None;
        }
        let url_start = close + 2;
        let end = next_paren[url_start];
        if end == none || end == url_start || next_code[url_start] < end {
            return None;
        }
        let href = tokens[url_start..end]
            .iter()
            .filter_map(|t| match t {
                Token::Char(c) => Some(*c),
                _ => None,
            })
            .collect();
        Some(LinkSpan {
            start,
            close,
            end,
            href,
        })
    };

    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].is_char('[')
            && let Some(span) = link_at(i)
        {
            i = span.end + 1;
            spans.push(span);
            continue;
        }
        i += 1;
    }
    spans
}

/// Wrap every `delim`-delimited pair of width `width` at this level and,
/// recursively, inside existing groups.
fn pair(tokens: Vec<Token>, delim: char, width: usize, wrap: Wrap) -> Vec<Token> {
    let tokens: Vec<Token> = tokens
        .into_iter()
        .map(|token| match token {
            Token::Group(group, inner) => Token::Group(group, pair(inner, delim, width, wrap)),
            other => other,
        })
        .collect();
    let spans = find_pairs(&tokens, delim, width);
    let mut out = Vec::with_capacity(tokens.len());
    let mut rest = tokens.into_iter();
    let mut pos = 0;

    for (start, body_end) in spans {
        out.extend(rest.by_ref().take(start - pos));
        rest.nth(width - 1);
        let body = rest.by_ref().take(body_end - start - width).collect();
        rest.nth(width - 1);
        let group = match wrap {
            Wrap::Strong => Group::Strong,
            Wrap::Emphasis => Group::Emphasis,
        };
        out.push(Token::Group(group, body));
        pos = body_end + width;
    }

    out.extend(rest);
    out
}

/// Locate every delimiter pair, leftmost first: `(opening index, body end index)`.
fn find_pairs(tokens: &[Token], delim: char, width: usize) -> Vec<(usize, usize)> {
    let next_delim = next_index(tokens, |t| t.is_char(delim));
    let is_run = |at: usize| {
        at + width <= tokens.len() && tokens[at..at + width].iter().all(|t| t.is_char(delim))
    };

    let mut spans = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if is_run(i) {
            let body_start = i + width;
            let body_end = next_delim[body_start];
            if body_end > body_start && is_run(body_end) {
                spans.push((i, body_end));
                i = body_end + width;
                continue;
            }
        }
        i += 1;
    }
    spans
}

/// For each position, the index of the first token at or after it matching
/// `pred`, or `tokens.len()` if there is none. Has one extra trailing entry.
fn next_index(tokens: &[Token], pred: impl Fn(&Token) -> bool) -> Vec<usize> {
    let mut next = vec![tokens.len(); tokens.len() + 1];
    for i in (0..tokens.len()).rev() {
        next[i] = if pred(&tokens[i]) { i } else { next[i + 1] };
    }
    next
}

fn to_inlines(tokens: Vec<Token>) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut text = String::new();

    for token in tokens {
        match token {
            Token::Char(c) => {
                text.push(c);
                continue;
            }
            Token::Code(code) => {
                flush_text(&mut text, &mut out);
                out.push(Inline::Code(code));
            }
            Token::Group(group, inner) => {
                flush_text(&mut text, &mut out);
                let content = to_inlines(inner);
                out.push(match group {
                    Group::Strong => Inline::Strong(content),
                    Group::Emphasis => Inline::Emphasis(content),
                    Group::Link(href) => Inline::Link { href, content },
                });
            }
        }
    }

    flush_text(&mut text, &mut out);
    out
}

fn flush_text(text: &mut String, out: &mut Vec<Inline>) {
    if !text.is_empty() {
        out.push(Inline::Text(std::mem::take(text)));
    }
}
