//! One axis of a grid range

use serde::{Deserialize, Serialize};

/// An inclusive interval of row or column indices, or the whole axis.
///
/// Whole-row and whole-column ranges (a click on a row or column header)
/// are modeled with `Unbounded` on the other axis instead of a sentinel
/// index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Span {
    /// Covers every index on the axis.
    Unbounded,
    /// Inclusive interval with `start <= end`.
    Bounded { start: usize, end: usize },
}

impl Span {
    /// Bounded span over `[a, b]`, swapping the bounds if they arrive
    /// reversed (a drag anchor may trail its cursor).
    pub fn bounded(a: usize, b: usize) -> Self {
        if a <= b {
            Self::Bounded { start: a, end: b }
        } else {
            Self::Bounded { start: b, end: a }
        }
    }

    /// Span covering a single index.
    pub const fn point(index: usize) -> Self {
        Self::Bounded {
            start: index,
            end: index,
        }
    }

    pub const fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded { .. })
    }

    /// First index covered, `None` for an unbounded span.
    pub const fn start(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Bounded { start, .. } => Some(start),
        }
    }

    /// Last index covered, `None` for an unbounded span.
    pub const fn end(self) -> Option<usize> {
        match self {
            Self::Unbounded => None,
            Self::Bounded { end, .. } => Some(end),
        }
    }

    /// Smallest index covered; unbounded spans start at the axis origin.
    /// Used as the sort key for axis-ordered scans.
    pub const fn min_index(self) -> usize {
        match self {
            Self::Unbounded => 0,
            Self::Bounded { start, .. } => start,
        }
    }

    pub const fn contains(self, index: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Bounded { start, end } => start <= index && index <= end,
        }
    }

    /// Inclusive interval overlap. Unbounded spans intersect everything.
    pub const fn intersects(self, other: Self) -> bool {
        match (self, other) {
            (Self::Unbounded, _) | (_, Self::Unbounded) => true,
            (
                Self::Bounded { start: a, end: b },
                Self::Bounded { start: c, end: d },
            ) => a <= d && c <= b,
        }
    }

    /// Bounding interval of both spans; `Unbounded` absorbs.
    pub fn union(self, other: Self) -> Self {
        match (self, other) {
            (Self::Unbounded, _) | (_, Self::Unbounded) => Self::Unbounded,
            (
                Self::Bounded { start: a, end: b },
                Self::Bounded { start: c, end: d },
            ) => Self::Bounded {
                start: a.min(c),
                end: b.max(d),
            },
        }
    }
}
