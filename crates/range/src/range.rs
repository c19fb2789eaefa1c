//! Rectangular grid ranges

use serde::{Deserialize, Serialize};

use crate::span::Span;

/// An immutable rectangular span of grid cells.
///
/// Either axis may be `Span::Unbounded`, giving whole-row or whole-column
/// ranges. Values are `Copy` and freely shared; every operation returns a
/// new `Range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub rows: Span,
    pub cols: Span,
}

impl Range {
    /// Bounded range from two corner cells, normalizing swapped bounds.
    pub fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            rows: Span::bounded(start_row, end_row),
            cols: Span::bounded(start_col, end_col),
        }
    }

    /// Range covering a single cell.
    pub const fn cell(row: usize, col: usize) -> Self {
        Self {
            rows: Span::point(row),
            cols: Span::point(col),
        }
    }

    /// Whole-row range: the given rows across every column.
    pub fn whole_rows(start: usize, end: usize) -> Self {
        Self {
            rows: Span::bounded(start, end),
            cols: Span::Unbounded,
        }
    }

    /// Whole-column range: the given columns across every row.
    pub fn whole_cols(start: usize, end: usize) -> Self {
        Self {
            rows: Span::Unbounded,
            cols: Span::bounded(start, end),
        }
    }

    pub const fn from_spans(rows: Span, cols: Span) -> Self {
        Self { rows, cols }
    }

    /// Bounding box of both ranges.
    pub fn union(self, other: Self) -> Self {
        Self {
            rows: self.rows.union(other.rows),
            cols: self.cols.union(other.cols),
        }
    }

    /// True if the row interval `[start, end]` overlaps this range's rows.
    pub const fn intersects_rows(self, start: usize, end: usize) -> bool {
        self.rows.intersects(Span::Bounded { start, end })
    }

    /// True if the column interval `[start, end]` overlaps this range's columns.
    pub const fn intersects_cols(self, start: usize, end: usize) -> bool {
        self.cols.intersects(Span::Bounded { start, end })
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.rows.intersects(other.rows) && self.cols.intersects(other.cols)
    }

    pub const fn contains(self, row: usize, col: usize) -> bool {
        self.rows.contains(row) && self.cols.contains(col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_corners() {
        // Drag from bottom-right to top-left
        assert_eq!(Range::new(4, 3, 1, 0), Range::new(1, 0, 4, 3));
    }

    #[test]
    fn test_union_is_bounding_box() {
        let a = Range::cell(0, 0);
        let b = Range::cell(3, 2);
        assert_eq!(a.union(b), Range::new(0, 0, 3, 2));
    }

    #[test]
    fn test_union_with_whole_row() {
        let a = Range::whole_rows(2, 2);
        let b = Range::new(0, 1, 1, 1);
        let u = a.union(b);
        assert_eq!(u.rows, Span::bounded(0, 2));
        assert_eq!(u.cols, Span::Unbounded);
    }

    #[test]
    fn test_axis_intersections() {
        let r = Range::new(1, 2, 3, 4);
        assert!(r.intersects_rows(3, 9));
        assert!(!r.intersects_rows(4, 9));
        assert!(r.intersects_cols(0, 2));
        assert!(!r.intersects_cols(5, 6));
        // Whole-column ranges intersect every row interval
        assert!(Range::whole_cols(0, 0).intersects_rows(100, 200));
    }

    #[test]
    fn test_contains_and_intersects() {
        let r = Range::new(1, 1, 2, 2);
        assert!(r.contains(2, 1));
        assert!(!r.contains(0, 1));
        assert!(r.intersects(Range::new(2, 2, 5, 5)));
        assert!(!r.intersects(Range::new(3, 3, 5, 5)));
    }

    #[test]
    fn test_serde_round_trip() {
        let r = Range::whole_cols(1, 3);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
    }
}
