//! # markup
//!
//! Build HTML fragments from composable nodes.
//!
//! Elements are created for any tag name, specialized with attributes (with
//! an optional `#id.class` shortcut string), given children, and rendered
//! to an escaped HTML string.
//!
//! ## Design
//!
//! Construction is a pipeline where every step returns a new value:
//!
//! - **tag → element**: [`element`] accepts any tag, including custom ones
//! - **element + attributes → element**: [`ElementExt::attrs`]
//! - **element + children → element**: [`ElementExt::nest`]
//!
//! All rule violations surface as [`MarkupError`] while building. Rendering
//! never fails.
//!
//! ## Example
//!
//! ```rust
//! use markup::{element, nodes, raw, Attrs, ElementExt};
//!
//! let list = element("ul").shortcut("#menu.nav")?.nest(nodes![
//!     element("li").nest("One")?,
//!     None::<markup::Element>,
//!     element("li").nest("Two & more")?,
//! ])?;
//! assert_eq!(
//!     list.to_string(),
//!     r#"<ul class="nav" id="menu"><li>One</li><li>Two &amp; more</li></ul>"#
//! );
//!
//! let button = element("button")
//!     .attrs(None, Attrs::new().set("onclick", raw("go('home')")))?;
//! assert_eq!(button.to_string(), r#"<button onclick="go('home')"></button>"#);
//! # Ok::<(), markup::MarkupError>(())
//! ```

mod attrs;
mod builder;
#[macro_use]
mod macros;
mod node;
mod shortcut;

pub use attrs::{clean_key, Attrs, Value};
pub use builder::{Builder, BuilderOptions, DEFAULT_KEYWORD_ATTRIBUTES};
pub use markup_core::{
    escape_html, is_void, render, render_into, AttrValue, Attributes, Element, Raw, Renderable,
    VOID_ELEMENTS,
};
pub use node::{element, raw, ElementExt};
pub use shortcut::{SegmentKind, Shortcut};

/// Error type for markup construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    #[error("Invalid attribute name \"{0}\"")]
    InvalidAttributeName(String),

    #[error("Invalid attribute value \"{value}\" for key \"{key}\"")]
    InvalidAttributeValue { key: String, value: String },

    #[error("\"{name}\" is an invalid {kind} name")]
    InvalidShortcut { name: String, kind: SegmentKind },

    #[error("<{tag}> can't have children nodes")]
    VoidChildren { tag: String },

    #[error("<{tag}> already has children nodes")]
    ChildrenAlreadySet { tag: String },
}

pub type Result<T> = std::result::Result<T, MarkupError>;
