//! Header projection
//!
//! Derives the row-header and column-header bands covering the active
//! selection. A multi-range body selection highlights the minimal set of
//! non-duplicated bands, never overlapping ones.

use websheet_range::{Range, Span};

use crate::merge::{merge_cols, merge_rows};

/// Minimal row / column header bands covering a set of ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderProjection {
    pub row_ranges: Vec<Range>,
    pub col_ranges: Vec<Range>,
}

/// Project `ranges` onto their header bands.
///
/// Whole-column ranges emit no row band and whole-row ranges emit no
/// column band; each band collapses the projected axis to index 0.
pub fn project(ranges: &[Range]) -> HeaderProjection {
    let mut row_ranges = Vec::new();
    let mut col_ranges = Vec::new();
    for range in ranges {
        if range.rows.is_bounded() {
            row_ranges.push(Range::from_spans(range.rows, Span::point(0)));
        }
        if range.cols.is_bounded() {
            col_ranges.push(Range::from_spans(Span::point(0), range.cols));
        }
    }
    HeaderProjection {
        row_ranges: merge_rows(row_ranges),
        col_ranges: merge_cols(col_ranges),
    }
}
