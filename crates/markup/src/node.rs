//! Convenience entry points backed by the default builder.

use markup_core::{Element, Raw, Renderable};

use crate::attrs::Attrs;
use crate::builder::Builder;
use crate::Result;

/// Create a fresh element for any tag
pub fn element(tag: &str) -> Element {
    Builder::global().element(tag)
}

/// Mark a string as already escaped
pub fn raw(content: impl Into<String>) -> Raw {
    Raw::new(content)
}

/// Builder steps as methods on `Element`.
///
/// Each step returns a new element, so a tree reads top to bottom:
///
/// ```rust
/// use markup::{element, Attrs, ElementExt};
///
/// let link = element("a")
///     .attrs(Some(".nav"), Attrs::new().set("href", "/"))?
///     .nest("Home")?;
/// assert_eq!(link.to_string(), r#"<a class="nav" href="/">Home</a>"#);
/// # Ok::<(), markup::MarkupError>(())
/// ```
pub trait ElementExt: Sized {
    /// Apply a shortcut string and attributes, returning a new element
    fn attrs(&self, shortcut: Option<&str>, attrs: Attrs) -> Result<Element>;

    /// Apply only a shortcut string
    fn shortcut(&self, shortcut: &str) -> Result<Element> {
        self.attrs(Some(shortcut), Attrs::new())
    }

    /// Set the children
    fn nest(self, children: impl Into<Renderable>) -> Result<Element>;
}

impl ElementExt for Element {
    fn attrs(&self, shortcut: Option<&str>, attrs: Attrs) -> Result<Element> {
        Builder::global().apply(self, shortcut, attrs)
    }

    fn nest(self, children: impl Into<Renderable>) -> Result<Element> {
        Builder::global().nest(self, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkupError;

    #[test]
    fn test_element_is_fresh() {
        let node = element("section");
        assert_eq!(node.tag, "section");
        assert!(node.attributes.is_empty());
        assert!(node.children.is_none());
    }

    #[test]
    fn test_raw() {
        assert_eq!(raw("a&b").content, "a&b");
    }

    #[test]
    fn test_shortcut_method() {
        let hr = element("hr").shortcut(".thick").unwrap();
        assert_eq!(hr.to_string(), r#"<hr class="thick"/>"#);
    }

    #[test]
    fn test_attrs_error_propagates() {
        let result = element("button").attrs(None, Attrs::new().set("data_id", 123));
        assert!(matches!(
            result,
            Err(MarkupError::InvalidAttributeValue { .. })
        ));
    }

    #[test]
    fn test_nest_bottom_up() {
        let tree = element("a")
            .nest(element("b").nest(element("c").nest(element("d")).unwrap()).unwrap())
            .unwrap();
        assert_eq!(tree.to_string(), "<a><b><c><d></d></c></b></a>");
    }
}
