//! In-memory host surface
//!
//! A surface implementation that exists only in memory, with inspection
//! helpers. Backs unit tests and headless use; the web build supplies a
//! DOM-backed surface instead.

use std::cell::RefCell;
use std::rc::Rc;

use crate::rect::{Offset, Rect};
use crate::surface::{Element, Surface};

#[derive(Debug, Default)]
struct ElementState {
    class: String,
    rect: Option<Rect>,
    visible: bool,
    offset: Offset,
    children: Vec<MemoryElement>,
}

/// Element handle backed by shared in-memory state.
#[derive(Debug, Clone)]
pub struct MemoryElement {
    inner: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    pub fn new(class: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementState {
                class: class.to_string(),
                ..ElementState::default()
            })),
        }
    }

    pub fn class(&self) -> String {
        self.inner.borrow().class.clone()
    }

    pub fn rect(&self) -> Option<Rect> {
        self.inner.borrow().rect
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    /// Position this element within the page (normally the layout engine's
    /// job; settable here so tests can exercise offset composition).
    pub fn set_offset(&self, offset: Offset) {
        self.inner.borrow_mut().offset = offset;
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    pub fn children(&self) -> Vec<MemoryElement> {
        self.inner.borrow().children.clone()
    }

    pub fn contains(&self, child: &Self) -> bool {
        self.inner
            .borrow()
            .children
            .iter()
            .any(|c| Rc::ptr_eq(&c.inner, &child.inner))
    }
}

impl Element for MemoryElement {
    fn append(&self, child: &Self) {
        let mut state = self.inner.borrow_mut();
        state
            .children
            .retain(|c| !Rc::ptr_eq(&c.inner, &child.inner));
        state.children.push(child.clone());
    }

    fn remove(&self, child: &Self) {
        self.inner
            .borrow_mut()
            .children
            .retain(|c| !Rc::ptr_eq(&c.inner, &child.inner));
    }

    fn set_rect(&self, rect: Rect) {
        self.inner.borrow_mut().rect = Some(rect);
    }

    fn offset(&self) -> Offset {
        self.inner.borrow().offset
    }

    fn show(&self) {
        self.inner.borrow_mut().visible = true;
    }

    fn hide(&self) {
        self.inner.borrow_mut().visible = false;
    }
}

/// Factory for in-memory elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemorySurface;

impl MemorySurface {
    pub const fn new() -> Self {
        Self
    }
}

impl Surface for MemorySurface {
    type Element = MemoryElement;

    fn create(&self, class: &str) -> MemoryElement {
        MemoryElement::new(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_remove() {
        let parent = MemoryElement::new("parent");
        let child = MemoryElement::new("child");

        parent.append(&child);
        assert!(parent.contains(&child));

        // Re-appending does not duplicate
        parent.append(&child);
        assert_eq!(parent.child_count(), 1);

        parent.remove(&child);
        assert!(!parent.contains(&child));
        parent.remove(&child);
        assert_eq!(parent.child_count(), 0);
    }

    #[test]
    fn test_rect_and_visibility() {
        let el = MemoryElement::new("area");
        assert!(el.rect().is_none());
        assert!(!el.is_visible());

        el.set_rect(Rect::new(1.0, 2.0, 3.0, 4.0));
        el.show();
        assert_eq!(el.rect(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert!(el.is_visible());

        el.hide();
        assert!(!el.is_visible());
    }

    #[test]
    fn test_surface_creates_styled_elements() {
        let surface = MemorySurface::new();
        let el = surface.create("websheet-selector-copy");
        assert_eq!(el.class(), "websheet-selector-copy");
    }
}
