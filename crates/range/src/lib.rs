//! Shared grid range types for websheet
//!
//! Defines the inclusive rectangular spans the selection subsystem works
//! with, including whole-row / whole-column ranges and A1-style reference
//! notation.

pub mod a1;
pub mod range;
pub mod span;

pub use a1::{CellRef, RefParseError};
pub use range::Range;
pub use span::Span;
