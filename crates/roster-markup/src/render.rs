//! HTML serialization of an element tree.

use crate::element::{Element, Node};
use crate::escape::{escape_attr, escape_text};

/// Tags that never carry children and take no closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

impl Element {
    /// Serialize this element and its subtree to an HTML string.
    ///
    /// Output is compact (no indentation or inter-element whitespace),
    /// attributes in insertion order, text and attribute values escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(&mut out, self);
        out
    }
}

fn write_element(out: &mut String, el: &Element) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        // Children on a void tag are a caller bug; drop them silently
        // rather than emit invalid markup.
        return;
    }

    for child in &el.children {
        match child {
            Node::Element(e) => write_element(out, e),
            Node::Text(t) => out.push_str(&escape_text(t)),
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}
