//! Escaping policy shared by the section renderers.
//!
//! Everything is escaped by maud. The only exception is `inline`, which
//! re-admits a small set of formatting tags for the fields allowed to carry
//! them (the summary and job responsibilities).

use maud::{html, Markup, PreEscaped};

/// Formatting tags allowed through `inline` when they open and close in pairs.
const PAIRED_TAGS: &[&str] = &["strong", "em", "b", "i", "u", "code"];
/// Line breaks, allowed on their own.
const LINE_BREAKS: &[&str] = &["br", "br/", "br /"];

const LT: &str = "&lt;";
const GT: &str = "&gt;";

#[derive(Debug, Clone, Copy)]
enum Tag {
    Open(&'static str),
    Close(&'static str),
    Break(&'static str),
}

#[derive(Debug)]
enum Piece<'a> {
    Text(&'a str),
    Tag(Tag, &'a str),
}

/// Escapes `text`, then restores the allow-listed inline tags.
///
/// A formatting tag is restored only together with its closing tag, nested
/// properly inside the same string; a stray opener stays escaped so it cannot
/// spill into the rest of the page. Tags with attributes are never restored.
pub fn inline(text: &str) -> Markup {
    let escaped = html! { (text) }.into_string();
    let pieces = split_tags(&escaped);

    let mut keep = vec![false; pieces.len()];
    let mut open: Vec<(usize, &str)> = Vec::new();
    for (index, piece) in pieces.iter().enumerate() {
        match piece {
            Piece::Tag(Tag::Break(_), _) => keep[index] = true,
            Piece::Tag(Tag::Open(name), _) => open.push((index, *name)),
            Piece::Tag(Tag::Close(name), _) => {
                if let Some(depth) = open.iter().rposition(|(_, opened)| opened == name) {
                    keep[open[depth].0] = true;
                    keep[index] = true;
                    // Openers left inside the pair are unclosed; they stay escaped.
                    open.truncate(depth);
                }
            }
            Piece::Text(_) => {}
        }
    }

    let mut out = String::with_capacity(escaped.len());
    for (piece, keep) in pieces.iter().zip(keep) {
        match piece {
            Piece::Text(text) => out.push_str(text),
            Piece::Tag(_, raw) if !keep => out.push_str(raw),
            Piece::Tag(Tag::Open(name), _) => {
                out.push('<');
                out.push_str(name);
                out.push('>');
            }
            Piece::Tag(Tag::Close(name), _) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Piece::Tag(Tag::Break(form), _) => {
                out.push('<');
                out.push_str(form);
                out.push('>');
            }
        }
    }
    PreEscaped(out)
}

/// Splits escaped text into plain runs and allow-listed tags.
fn split_tags(escaped: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut rest = escaped;
    while let Some(start) = rest.find(LT) {
        if start > 0 {
            pieces.push(Piece::Text(&rest[..start]));
        }
        let candidate = &rest[start..];
        match match_tag(candidate) {
            Some((tag, len)) => {
                pieces.push(Piece::Tag(tag, &candidate[..len]));
                rest = &candidate[len..];
            }
            None => {
                pieces.push(Piece::Text(LT));
                rest = &candidate[LT.len()..];
            }
        }
    }
    if !rest.is_empty() {
        pieces.push(Piece::Text(rest));
    }
    pieces
}

/// Recognises `&lt;name&gt;`, `&lt;/name&gt;` or a line break at the start of `s`.
fn match_tag(s: &str) -> Option<(Tag, usize)> {
    let inner = s.strip_prefix(LT)?;
    let body = &inner[..inner.find(GT)?];
    let len = LT.len() + body.len() + GT.len();

    let tag = if let Some(name) = body.strip_prefix('/') {
        Tag::Close(PAIRED_TAGS.iter().copied().find(|tag| *tag == name)?)
    } else if let Some(name) = PAIRED_TAGS.iter().copied().find(|tag| *tag == body) {
        Tag::Open(name)
    } else {
        Tag::Break(LINE_BREAKS.iter().copied().find(|form| *form == body)?)
    };
    Some((tag, len))
}

/// A URL without its scheme, for link text: `https://github.com/x` → `github.com/x`.
pub fn display_url(url: &str) -> &str {
    url.split_once("//").map(|(_, rest)| rest).unwrap_or(url)
}
