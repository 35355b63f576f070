/// Build a sequence from values of mixed types.
///
/// Each argument is converted with `Into<Renderable>`, so elements, text,
/// raw fragments and `None` can sit side by side.
///
/// ```rust
/// use markup::{element, nodes, render, Element};
///
/// let seq = nodes![element("br"), "a < b", None::<Element>];
/// assert_eq!(render(&seq), "<br/>a &lt; b");
/// ```
#[macro_export]
macro_rules! nodes {
    ($($item:expr),* $(,)?) => {
        $crate::Renderable::Sequence(vec![$($crate::Renderable::from($item)),*])
    };
}
