//! Grid selection state for websheet
//!
//! Tracks which cells are selected, focused, copied, or targeted for
//! autofill, projects selections onto the row/column header bands, and
//! owns the visual areas that render them on the host surface.

pub mod header;
pub mod merge;
pub mod selector;
pub mod style;

pub use header::{project, HeaderProjection};
pub use merge::{merge_cols, merge_ranges, merge_rows};
pub use selector::{Placement, Selector};
pub use style::SelectorStyle;
