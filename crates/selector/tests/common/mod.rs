//! Common test utilities
#![allow(dead_code)] // Helpers may not be used in all test files

use websheet_overlay::{MemoryElement, MemorySurface};
use websheet_selector::{Placement, Selector, SelectorStyle};

/// A selector over a fresh in-memory surface for the given zone, plus the
/// sheet element its areas attach to.
pub fn selector_for(placement: Placement) -> (Selector<MemorySurface>, MemoryElement) {
    let selector = Selector::new(MemorySurface::new(), placement, SelectorStyle::default());
    (selector, MemoryElement::new("websheet-sheet"))
}

/// Body-zone selector, the common case.
pub fn body_selector() -> (Selector<MemorySurface>, MemoryElement) {
    selector_for(Placement::Body)
}
