//! Inline markup used inside content lines.
//!
//! The dialect has exactly two constructs on top of plain text:
//!
//! ```text
//! <link:"Portal ONSV"=https://www.onsv.gob.pe>   → new-tab anchor
//! **importante**  or  *importante*               → <strong>
//! ```
//!
//! [`parse`] turns a line into a tree of [`Inline`] nodes; [`render`] turns
//! the tree into escaped HTML. At every position the parser tries a link, then
//! a double asterisk, then a single asterisk, and otherwise takes one literal
//! character. Unterminated markers are literal text. Link labels may contain
//! bold but never another link. Recursion always works on a strictly shorter
//! slice, so there is no depth limit.

use maud::{Markup, html};
use regex::Regex;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<link:"([^"]+)"=([^>]+)>"#).expect("Invalid link regex"));

/// A parsed inline node.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Link { label: Vec<Inline>, url: String },
}

/// Parse a content line into inline nodes.
pub fn parse(text: &str) -> Vec<Inline> {
    parse_inner(text, true)
}

fn parse_inner(text: &str, allow_links: bool) -> Vec<Inline> {
    let mut nodes = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if allow_links
            && rest.starts_with("<link:")
            && let Some(caps) = LINK.captures(rest)
        {
            flush(&mut literal, &mut nodes);
            nodes.push(Inline::Link {
                label: parse_inner(&caps[1], false),
                url: caps[2].trim().to_string(),
            });
            i += caps[0].len();
            continue;
        }

        if let Some((inner, consumed)) = emphasis(rest, "**").or_else(|| emphasis(rest, "*")) {
            flush(&mut literal, &mut nodes);
            nodes.push(Inline::Bold(parse_inner(inner, allow_links)));
            i += consumed;
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        literal.push(ch);
        i += ch.len_utf8();
    }

    flush(&mut literal, &mut nodes);
    nodes
}

/// Match `<marker>inner<marker>` at the start of `rest`.
///
/// Returns the inner slice and the number of bytes consumed. Empty emphasis
/// does not match, which keeps `**oops` literal.
fn emphasis<'a>(rest: &'a str, marker: &str) -> Option<(&'a str, usize)> {
    let after = rest.strip_prefix(marker)?;
    let end = after.find(marker)?;
    if end == 0 {
        return None;
    }
    Some((&after[..end], marker.len() * 2 + end))
}

fn flush(literal: &mut String, nodes: &mut Vec<Inline>) {
    if !literal.is_empty() {
        nodes.push(Inline::Text(std::mem::take(literal)));
    }
}

/// Render inline nodes as HTML. Text is escaped by maud.
pub fn render(nodes: &[Inline]) -> Markup {
    html! {
        @for node in nodes {
            @match node {
                Inline::Text(text) => { (text) }
                Inline::Bold(children) => { strong { (render(children)) } }
                Inline::Link { label, url } => {
                    a href=(url) target="_blank" rel="noopener" { (render(label)) }
                }
            }
        }
    }
}

/// Parse and render a content line in one step.
pub fn render_inline(text: &str) -> Markup {
    render(&parse(text))
}
