//! Visual areas
//!
//! A `VisualArea` binds one rectangle to one host-surface element. It owns
//! no selection semantics; the selector creates and releases areas as the
//! selection changes.

use tracing::trace;

use crate::rect::Rect;
use crate::surface::{Element, Surface};

/// An attached, positioned highlight element.
pub struct VisualArea<E: Element> {
    node: E,
    rect: Option<Rect>,
    target: Option<E>,
}

impl<E: Element> VisualArea<E> {
    /// Wrap an already-created surface element.
    pub const fn new(node: E) -> Self {
        Self {
            node,
            rect: None,
            target: None,
        }
    }

    /// Create the area's element on `surface` with the given style class,
    /// optionally visible immediately.
    pub fn create<S: Surface<Element = E>>(surface: &S, class: &str, show: bool) -> Self {
        let area = Self::new(surface.create(class));
        if show {
            area.node.show();
        }
        area
    }

    /// Set the rectangle this area occupies. Re-applying the same
    /// rectangle is a no-op.
    pub fn rect(&mut self, rect: Rect) -> &mut Self {
        if self.rect != Some(rect) {
            self.rect = Some(rect);
            self.node.set_rect(rect);
        }
        self
    }

    /// Associate the area with a target element; with `auto_attach` the
    /// node is inserted into the target immediately. Re-targeting detaches
    /// from the previous target first.
    pub fn target(&mut self, target: E, auto_attach: bool) -> &mut Self {
        self.clear();
        if auto_attach {
            target.append(&self.node);
        }
        self.target = Some(target);
        self
    }

    /// Insert `child` into the area's own element (the corner drag handle).
    pub fn append_child(&mut self, child: &E) -> &mut Self {
        self.node.append(child);
        self
    }

    /// The area's rectangle composed with its target's page offset; `None`
    /// until both a rectangle and a target are set.
    pub fn offset(&self) -> Option<Rect> {
        let rect = self.rect?;
        let target = self.target.as_ref()?;
        Some(rect.translate(target.offset()))
    }

    pub fn show(&mut self) -> &mut Self {
        self.node.show();
        self
    }

    /// The underlying element, for callers that control insertion order
    /// themselves.
    pub const fn node(&self) -> &E {
        &self.node
    }

    pub const fn is_attached(&self) -> bool {
        self.target.is_some()
    }

    /// Detach from the target element and drop the target reference.
    /// Safe to call repeatedly.
    pub fn clear(&mut self) {
        if let Some(target) = self.target.take() {
            target.remove(&self.node);
            trace!("visual area detached");
        }
    }
}

/// Areas release their surface element when dropped, so a replaced area
/// can never leak an attached element.
impl<E: Element> Drop for VisualArea<E> {
    fn drop(&mut self) {
        self.clear();
    }
}
