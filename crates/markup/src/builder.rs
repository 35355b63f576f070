//! Builder - the entry point for constructing validated element trees.

use indexmap::IndexSet;
use markup_core::{AttrValue, Element, Renderable};
use once_cell::sync::Lazy;

use crate::attrs::Attrs;
use crate::shortcut::{check_segment, SegmentKind, Shortcut};
use crate::{MarkupError, Result};

/// Attribute names whose trailing-underscore spelling is accepted by default
pub const DEFAULT_KEYWORD_ATTRIBUTES: &[&str] =
    &["class", "for", "id", "type", "async", "as", "in"];

static DEFAULT_BUILDER: Lazy<Builder> = Lazy::new(Builder::new);

/// Options for Builder
#[derive(Debug, Clone)]
pub struct BuilderOptions {
    /// Attribute names written with a trailing underscore (`class_`) that
    /// map back to the bare name
    pub keyword_attributes: IndexSet<String>,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            keyword_attributes: DEFAULT_KEYWORD_ATTRIBUTES
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

/// Constructs elements and enforces the tree invariants
#[derive(Debug, Clone)]
pub struct Builder {
    options: BuilderOptions,
}

impl Builder {
    /// Create a new Builder with default options
    pub fn new() -> Self {
        Self {
            options: BuilderOptions::default(),
        }
    }

    /// Create a Builder with custom options
    pub fn with_options(options: BuilderOptions) -> Self {
        Self { options }
    }

    /// The shared default builder
    pub fn global() -> &'static Builder {
        &DEFAULT_BUILDER
    }

    /// Get the current options
    pub fn options(&self) -> &BuilderOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut BuilderOptions {
        &mut self.options
    }

    /// Create a fresh element for any tag
    pub fn element(&self, tag: &str) -> Element {
        tracing::trace!(tag = %tag, "creating element");
        Element::new(tag)
    }

    /// Return a new element with `base`'s tag and the given attributes.
    ///
    /// The result starts from a fresh attribute set and has no children.
    /// Classes from `shortcut` are appended to any explicit `class`; an id
    /// from `shortcut` replaces any explicit `id`.
    pub fn apply(&self, base: &Element, shortcut: Option<&str>, attrs: Attrs) -> Result<Element> {
        let mut attributes = attrs.normalize(&self.options.keyword_attributes)?;

        if let Some(shortcut) = shortcut.filter(|s| !s.is_empty()) {
            let Shortcut { id, classes } = Shortcut::parse(shortcut)?;

            if let Some(id) = id {
                attributes.insert("id".to_string(), AttrValue::Text(id));
            }
            let merged = merge_classes(attributes.get("class"), &classes)?;
            if let Some(merged) = merged {
                attributes.insert("class".to_string(), merged);
            }
        }

        Ok(Element {
            tag: base.tag.clone(),
            attributes,
            children: None,
        })
    }

    /// Set the children of `node`.
    ///
    /// A single value becomes a one-element child list. Void tags and nodes
    /// that already have children are rejected.
    pub fn nest(&self, mut node: Element, children: impl Into<Renderable>) -> Result<Element> {
        if node.is_void() {
            tracing::debug!(tag = %node.tag, "rejecting children for void tag");
            return Err(MarkupError::VoidChildren { tag: node.tag });
        }
        if node.has_children() {
            tracing::debug!(tag = %node.tag, "rejecting re-attachment of children");
            return Err(MarkupError::ChildrenAlreadySet { tag: node.tag });
        }

        let children = children.into().into_children();
        tracing::trace!(tag = %node.tag, count = children.len(), "attaching children");
        node.children = Some(children);
        Ok(node)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Append shortcut classes to an existing class value.
///
/// Every piece of the existing value must pass the same check as a shortcut
/// class. Returns `None` when there are no classes at all.
fn merge_classes(
    existing: Option<&AttrValue>,
    classes: &[String],
) -> Result<Option<AttrValue>> {
    let (current, raw) = match existing {
        Some(AttrValue::Text(text)) => (text.as_str(), false),
        Some(AttrValue::Raw(content)) => (content.as_str(), true),
        Some(AttrValue::Absent) | None => ("", false),
    };

    let mut merged = Vec::with_capacity(classes.len());
    for class in current.split(' ').filter(|class| !class.is_empty()) {
        merged.push(check_segment(class, SegmentKind::Class)?);
    }
    merged.extend(classes.iter().cloned());

    if merged.is_empty() {
        return Ok(None);
    }

    let joined = merged.join(" ");
    Ok(Some(if raw {
        AttrValue::Raw(joined)
    } else {
        AttrValue::Text(joined)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup_core::render;
    use pretty_assertions::assert_eq;

    fn html(node: Element) -> String {
        render(&node.into())
    }

    #[test]
    fn test_element_any_tag() {
        let builder = Builder::new();
        let node = builder.element("my-widget");
        assert_eq!(node.tag, "my-widget");
        assert_eq!(html(node), "<my-widget></my-widget>");
    }

    #[test]
    fn test_apply_attributes() {
        let builder = Builder::new();
        let input = builder
            .apply(
                &builder.element("input"),
                None,
                Attrs::new().set("id", "hello").set("value", "world"),
            )
            .unwrap();
        assert_eq!(html(input), r#"<input id="hello" value="world"/>"#);
    }

    #[test]
    fn test_apply_keyword_and_hyphen() {
        let builder = Builder::new();
        let node = builder
            .apply(
                &builder.element("label"),
                None,
                Attrs::new().set("for_", "name").set("data_trigger", "666"),
            )
            .unwrap();
        assert_eq!(html(node), r#"<label data-trigger="666" for="name"></label>"#);
    }

    #[test]
    fn test_custom_keyword_table() {
        let mut options = BuilderOptions::default();
        options.keyword_attributes.insert("loop".to_string());
        let builder = Builder::with_options(options);

        let node = builder
            .apply(&builder.element("video"), None, Attrs::new().flag("loop_"))
            .unwrap();
        assert_eq!(html(node), "<video loop></video>");

        let default = Builder::new()
            .apply(&builder.element("video"), None, Attrs::new().flag("loop_"))
            .unwrap();
        assert_eq!(html(default), "<video loop-></video>");
    }

    #[test]
    fn test_shortcut_appends_classes() {
        let builder = Builder::new();
        let node = builder
            .apply(
                &builder.element("span"),
                Some(".hello.world"),
                Attrs::new().set("class_", "first"),
            )
            .unwrap();
        assert_eq!(html(node), r#"<span class="first hello world"></span>"#);
    }

    #[test]
    fn test_shortcut_overwrites_id() {
        let builder = Builder::new();
        let node = builder
            .apply(
                &builder.element("span"),
                Some("#world.hello"),
                Attrs::new().set("id", "ignored"),
            )
            .unwrap();
        assert_eq!(html(node), r#"<span class="hello" id="world"></span>"#);
    }

    #[test]
    fn test_shortcut_keeps_raw_class() {
        let builder = Builder::new();
        let node = builder
            .apply(
                &builder.element("p"),
                Some(".b"),
                Attrs::new().set("class", markup_core::Raw::new("a&amp;")),
            )
            .unwrap();
        assert_eq!(html(node), r#"<p class="a&amp; b"></p>"#);
    }

    #[test]
    fn test_shortcut_checks_explicit_classes() {
        let builder = Builder::new();
        let err = builder
            .apply(
                &builder.element("span"),
                Some(".c"),
                Attrs::new().set("class_", "a,b"),
            )
            .unwrap_err();
        assert_eq!(
            err,
            MarkupError::InvalidShortcut {
                name: "a,b".to_string(),
                kind: SegmentKind::Class,
            }
        );
    }

    #[test]
    fn test_id_shortcut_checks_explicit_classes() {
        let builder = Builder::new();
        let result = builder.apply(
            &builder.element("span"),
            Some("#x"),
            Attrs::new().set("class_", "a,b"),
        );
        assert!(matches!(result, Err(MarkupError::InvalidShortcut { .. })));
    }

    #[test]
    fn test_explicit_class_without_shortcut_is_kept() {
        let builder = Builder::new();
        let node = builder
            .apply(&builder.element("span"), None, Attrs::new().set("class_", "a,b"))
            .unwrap();
        assert_eq!(html(node), r#"<span class="a,b"></span>"#);
    }

    #[test]
    fn test_options_mut() {
        let mut builder = Builder::new();
        builder.options_mut().keyword_attributes.insert("loop".to_string());
        assert!(builder.options().keyword_attributes.contains("loop"));
    }

    #[test]
    fn test_empty_shortcut_is_ignored() {
        let builder = Builder::new();
        let node = builder
            .apply(&builder.element("div"), Some(""), Attrs::new())
            .unwrap();
        assert!(node.attributes.is_empty());
    }

    #[test]
    fn test_apply_drops_children_and_keeps_base() {
        let builder = Builder::new();
        let base = builder.nest(builder.element("div"), "content").unwrap();
        let node = builder.apply(&base, Some(".x"), Attrs::new()).unwrap();

        assert_eq!(node.children, None);
        assert_eq!(html(base), "<div>content</div>");
    }

    #[test]
    fn test_nest_single_child() {
        let builder = Builder::new();
        let node = builder.nest(builder.element("h1"), "hello world").unwrap();
        assert_eq!(node.children.as_ref().map(Vec::len), Some(1));
        assert_eq!(html(node), "<h1>hello world</h1>");
    }

    #[test]
    fn test_nest_void_tag() {
        let builder = Builder::new();
        let err = builder
            .nest(builder.element("br"), builder.element("p"))
            .unwrap_err();
        assert_eq!(err, MarkupError::VoidChildren { tag: "br".to_string() });
        assert_eq!(err.to_string(), "<br> can't have children nodes");
    }

    #[test]
    fn test_nest_twice() {
        let builder = Builder::new();
        let ul = builder.nest(builder.element("ul"), "first").unwrap();
        let err = builder.nest(ul, "second").unwrap_err();
        assert_eq!(err, MarkupError::ChildrenAlreadySet { tag: "ul".to_string() });
    }

    #[test]
    fn test_global_builder_uses_defaults() {
        let keywords = &Builder::global().options().keyword_attributes;
        assert!(keywords.contains("class"));
        assert!(keywords.contains("for"));
    }
}
