//! Interval merging
//!
//! Collapses possibly-overlapping ranges into the minimal ordered set of
//! non-overlapping merged ranges along one axis, so header highlighting
//! stays stable and non-duplicated.

use std::cmp::Ordering;

use websheet_range::Range;

/// Merge `ranges` into the minimal set of non-overlapping ranges.
///
/// `cmp` must order ranges ascending along the same axis the `intersects`
/// predicate tests; with mismatched axes, merges can be missed. The output
/// is ascending by the same key. Empty input yields empty output.
pub fn merge_ranges<C, I>(mut ranges: Vec<Range>, cmp: C, intersects: I) -> Vec<Range>
where
    C: FnMut(&Range, &Range) -> Ordering,
    I: Fn(&Range, &Range) -> bool,
{
    ranges.sort_by(cmp);
    let mut iter = ranges.into_iter();
    let Some(mut current) = iter.next() else {
        return Vec::new();
    };
    let mut merged = Vec::new();
    for next in iter {
        if intersects(&current, &next) {
            current = current.union(next);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

/// Merge along the row axis (row-header bands).
pub fn merge_rows(ranges: Vec<Range>) -> Vec<Range> {
    merge_ranges(
        ranges,
        |a, b| a.rows.min_index().cmp(&b.rows.min_index()),
        |a, b| a.rows.intersects(b.rows),
    )
}

/// Merge along the column axis (column-header bands).
pub fn merge_cols(ranges: Vec<Range>) -> Vec<Range> {
    merge_ranges(
        ranges,
        |a, b| a.cols.min_index().cmp(&b.cols.min_index()),
        |a, b| a.cols.intersects(b.cols),
    )
}
