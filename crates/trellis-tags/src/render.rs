//! Markup serialization.
//!
//! Both forms write, in order: the opening tag, attributes in insertion
//! order, a single `class` attribute when the class set is non-empty, then
//! either ` />` (no children and no text) or the escaped text followed by
//! the rendered children and the closing tag.

use std::borrow::Cow;

use crate::Node;

const INDENT: &str = "  ";

/// Escape text content: `&`, `<` and `>`.
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape an attribute value for use inside double quotes: `&`, `"`, `<`
/// and `>`.
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

fn escape(input: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');
    if !input.contains(needs_escape) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn write_open_tag(node: &Node, out: &mut String) {
    out.push('<');
    out.push_str(node.tag_name());
    for (name, value) in &node.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    if !node.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&node.classes.join(" ")));
        out.push('"');
    }
    if node.is_self_closing() {
        out.push_str(" />");
    } else {
        out.push('>');
    }
}

fn write_close_tag(node: &Node, out: &mut String) {
    out.push_str("</");
    out.push_str(node.tag_name());
    out.push('>');
}

pub(crate) fn write_compact(node: &Node, out: &mut String) {
    write_open_tag(node, out);
    if node.is_self_closing() {
        return;
    }
    if let Some(text) = &node.text {
        out.push_str(&escape_text(text));
    }
    for child in &node.children {
        write_compact(child, out);
    }
    write_close_tag(node, out);
}

pub(crate) fn write_pretty(node: &Node, depth: usize, out: &mut String) {
    // Leaves (text-only or empty) stay on one line.
    if node.children.is_empty() {
        write_compact(node, out);
        return;
    }

    write_open_tag(node, out);
    if let Some(text) = &node.text {
        out.push_str(&escape_text(text));
    }
    for child in &node.children {
        out.push('\n');
        out.push_str(&INDENT.repeat(depth + 1));
        write_pretty(child, depth + 1, out);
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    write_close_tag(node, out);
}
