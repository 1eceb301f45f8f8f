//! Structured, indented, escaping XML output shared by the token dump and
//! the parse-tree dump (spec.md §9: "keep this as a single helper").

#[cfg(test)]
mod tests;

use crate::ast::Node;
use crate::token::{Token, TokenKind};

const INDENT: &str = "  ";

/// Escapes `<`, `>`, `&`, and `"` for safe inclusion in element text,
/// following `XMLUtilities::escape` in the original implementation (which
/// does not escape `'`).
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn open_tag(out: &mut String, depth: usize, tag: &str) {
    write_indent(out, depth);
    out.push('<');
    out.push_str(tag);
    out.push_str(">\n");
}

fn close_tag(out: &mut String, depth: usize, tag: &str) {
    write_indent(out, depth);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

/// Emits a leaf element: `<tag> escaped text </tag>`, padded with a
/// space on each side of the content as the original writer does.
fn emit_leaf(out: &mut String, depth: usize, tag: &str, text: &str) {
    write_indent(out, depth);
    out.push('<');
    out.push_str(tag);
    out.push_str("> ");
    out.push_str(&escape(text));
    out.push_str(" </");
    out.push_str(tag);
    out.push_str(">\n");
}

fn token_tag(kind: &TokenKind) -> &'static str {
    match kind {
        TokenKind::Keyword(_) => "keyword",
        TokenKind::Symbol(_) => "symbol",
        TokenKind::Identifier(_) => "identifier",
        TokenKind::IntConst(_) => "integerConstant",
        TokenKind::StringConst(_) => "stringConstant",
        TokenKind::Eof => "eof",
    }
}

fn token_text(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Keyword(k) => k.as_str().to_string(),
        TokenKind::Symbol(c) => c.to_string(),
        TokenKind::Identifier(s) => s.clone(),
        TokenKind::IntConst(n) => n.to_string(),
        TokenKind::StringConst(s) => s.clone(),
        TokenKind::Eof => String::new(),
    }
}

/// Renders the root-level `<tokens>` dump for a non-comment token stream.
/// A faithful, round-trippable-modulo-whitespace serialization per
/// spec.md §8's testable property 5. The trailing `Eof` sentinel is
/// never written, since it carries no source text.
pub fn tokens_to_xml(tokens: &[Token]) -> String {
    let mut out = String::new();
    open_tag(&mut out, 0, "tokens");
    for token in tokens {
        if matches!(token.kind, TokenKind::Eof) {
            continue;
        }
        emit_leaf(&mut out, 1, token_tag(&token.kind), &token_text(&token.kind));
    }
    close_tag(&mut out, 0, "tokens");
    out
}

/// Renders a parse-tree [`Node`] as nested, indented XML.
pub fn node_to_xml(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, 0, node);
    out
}

fn write_node(out: &mut String, depth: usize, node: &Node) {
    match node {
        Node::Leaf { tag, text } => emit_leaf(out, depth, tag, text),
        Node::NonTerminal { tag, children } => {
            open_tag(out, depth, tag);
            for child in children {
                write_node(out, depth + 1, child);
            }
            close_tag(out, depth, tag);
        }
    }
}
