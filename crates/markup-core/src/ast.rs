//! HTML element tree
//!
//! This module defines the values the renderer accepts: elements, raw
//! fragments, text, and sequences of those.

use std::fmt;

use indexmap::IndexMap;

use crate::render::{render, render_element};

/// Attribute mapping, kept in insertion order. Rendering sorts by name.
pub type Attributes = IndexMap<String, AttrValue>;

/// Value of a single attribute
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttrValue {
    /// Valueless (boolean) attribute, rendered as the bare name
    #[default]
    Absent,

    /// Text value, HTML-escaped on output
    Text(String),

    /// Pre-escaped value, emitted verbatim
    Raw(String),
}

impl AttrValue {
    /// Check if this value renders as a bare attribute name
    pub fn is_empty(&self) -> bool {
        match self {
            AttrValue::Absent => true,
            AttrValue::Text(text) | AttrValue::Raw(text) => text.is_empty(),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Raw> for AttrValue {
    fn from(value: Raw) -> Self {
        AttrValue::Raw(value.content)
    }
}

/// A string marked as already escaped.
///
/// This is the only way to get content past HTML escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raw {
    pub content: String,
}

impl Raw {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

/// A tagged HTML element with attributes and children.
///
/// `children` is `None` until children are attached. Fields are public so
/// callers can adjust a tree after building it; the builder in the `markup`
/// crate is what enforces the void-tag and attribute-name rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag name, emitted verbatim
    pub tag: String,

    /// Attributes by name
    pub attributes: Attributes,

    /// Child content
    pub children: Option<Vec<Renderable>>,
}

impl Element {
    /// Create an element with no attributes and no children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            children: None,
        }
    }

    /// Check if the tag belongs to the void-tag set
    pub fn is_void(&self) -> bool {
        crate::utilities::is_void(&self.tag)
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Check if children have been attached
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        render_element(self, &mut out);
        f.write_str(&out)
    }
}

/// Anything the renderer accepts
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Renderable {
    /// Renders to nothing
    #[default]
    Empty,

    /// An element and its subtree
    Element(Element),

    /// Verbatim content
    Raw(Raw),

    /// Plain text, HTML-escaped on output
    Text(String),

    /// Members rendered in order and concatenated
    Sequence(Vec<Renderable>),
}

impl Renderable {
    /// Turn this value into a child list.
    ///
    /// A sequence becomes its members; anything else becomes a one-element
    /// list.
    pub fn into_children(self) -> Vec<Renderable> {
        match self {
            Renderable::Sequence(items) => items,
            other => vec![other],
        }
    }
}

impl fmt::Display for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl From<Element> for Renderable {
    fn from(value: Element) -> Self {
        Renderable::Element(value)
    }
}

impl From<Raw> for Renderable {
    fn from(value: Raw) -> Self {
        Renderable::Raw(value)
    }
}

impl From<&str> for Renderable {
    fn from(value: &str) -> Self {
        Renderable::Text(value.to_string())
    }
}

impl From<String> for Renderable {
    fn from(value: String) -> Self {
        Renderable::Text(value)
    }
}

impl From<&String> for Renderable {
    fn from(value: &String) -> Self {
        Renderable::Text(value.clone())
    }
}

impl<T: Into<Renderable>> From<Option<T>> for Renderable {
    fn from(value: Option<T>) -> Self {
        value.map_or(Renderable::Empty, Into::into)
    }
}

impl<T: Into<Renderable>> From<Vec<T>> for Renderable {
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Into<Renderable>, const N: usize> From<[T; N]> for Renderable {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Into<Renderable>> FromIterator<T> for Renderable {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Renderable::Sequence(iter.into_iter().map(Into::into).collect())
    }
}
