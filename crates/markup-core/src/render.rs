//! HTML rendering
//!
//! Converts renderable values into HTML text. Text and attribute values are
//! escaped exactly once; `Raw` content is never escaped.

use crate::ast::{AttrValue, Attributes, Element, Renderable};
use crate::utilities::{escape_html_into, is_void};

/// Render a value to an HTML string
pub fn render(value: &Renderable) -> String {
    let mut output = String::with_capacity(256);
    render_into(value, &mut output);
    output
}

/// Render a value, appending to `out`
pub fn render_into(value: &Renderable, out: &mut String) {
    match value {
        Renderable::Empty => {}

        Renderable::Raw(raw) => out.push_str(&raw.content),

        Renderable::Sequence(items) => {
            for item in items {
                render_into(item, out);
            }
        }

        Renderable::Text(text) => escape_html_into(text, out),

        Renderable::Element(element) => render_element(element, out),
    }
}

pub(crate) fn render_element(element: &Element, out: &mut String) {
    tracing::trace!(tag = %element.tag, "rendering element");

    out.push('<');
    out.push_str(&element.tag);
    render_attributes(&element.attributes, out);

    if is_void(&element.tag) {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(children) = &element.children {
        for child in children {
            render_into(child, out);
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn render_attributes(attributes: &Attributes, out: &mut String) {
    // Attributes are emitted in ordinal order of their names, whatever the
    // insertion order was.
    let mut entries: Vec<(&String, &AttrValue)> = attributes.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (name, value) in entries {
        out.push(' ');
        out.push_str(name);

        if value.is_empty() {
            continue;
        }

        out.push_str("=\"");
        match value {
            AttrValue::Text(text) => escape_html_into(text, out),
            AttrValue::Raw(content) => out.push_str(content),
            AttrValue::Absent => {}
        }
        out.push('"');
    }
}
