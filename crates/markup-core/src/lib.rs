//! markup-core - HTML element tree and rendering
//!
//! This crate provides the tree values and the renderer. It is used by
//! `markup`, which adds the validating builder on top.
//!
//! # Architecture
//!
//! ```text
//! builder calls ──▶ ┌────────────────┐
//!                   │                │
//!                   │  Element tree  │ ──render──▶ HTML String
//! raw / text ──────▶│                │
//!                   └────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use markup_core::{render, Element, Renderable};
//!
//! let mut h1 = Element::new("h1");
//! h1.children = Some(vec![Renderable::from("Hello & welcome")]);
//!
//! assert_eq!(render(&h1.into()), "<h1>Hello &amp; welcome</h1>");
//! ```

mod ast;
mod render;
mod utilities;

pub use ast::{AttrValue, Attributes, Element, Raw, Renderable};
pub use render::{render, render_into};
pub use utilities::{escape_html, is_void, VOID_ELEMENTS};
