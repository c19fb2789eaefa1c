//! Host surface abstraction
//!
//! The selection subsystem never creates DOM elements itself; it drives a
//! small set of operations on opaque element handles supplied by the host.

use crate::rect::{Offset, Rect};

/// Handle to a styled rectangular element on the host surface.
///
/// Handles are cheap clones referring to the same underlying element (the
/// web build backs them with `web_sys::Element`).
pub trait Element: Clone {
    /// Insert `child` as the last child of this element.
    fn append(&self, child: &Self);

    /// Remove `child` from this element; no-op when absent.
    fn remove(&self, child: &Self);

    /// Position and size the element, in pixels.
    fn set_rect(&self, rect: Rect);

    /// The element's own position within the page.
    fn offset(&self) -> Offset;

    fn show(&self);

    fn hide(&self);
}

/// Creates styled elements on the host surface.
pub trait Surface {
    type Element: Element;

    /// Create a detached element carrying the given style class.
    fn create(&self, class: &str) -> Self::Element;
}
