//! Host-surface overlay primitives for websheet
//!
//! The selection subsystem renders itself by attaching positioned
//! highlight elements to an opaque host surface. This crate defines the
//! pixel-space geometry, the surface abstraction, and the `VisualArea`
//! handle binding a rectangle to a surface element. An in-memory surface
//! backs tests and headless use.

pub mod area;
pub mod memory;
pub mod rect;
pub mod surface;

pub use area::VisualArea;
pub use memory::{MemoryElement, MemorySurface};
pub use rect::{Offset, Rect};
pub use surface::{Element, Surface};
