//! Selection state machine
//!
//! One `Selector` per grid zone tracks the selected ranges, focus anchor,
//! drag cursor, copy source and autofill target, and owns the visual
//! areas rendering them. Every mutation recomputes the header bands
//! before returning, so reads always see a consistent projection.

use tracing::debug;

use websheet_overlay::{Rect, Surface, VisualArea};
use websheet_range::Range;

use crate::header::{self, HeaderProjection};
use crate::style::SelectorStyle;

/// Which zone of the grid a selector instance governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    All,
    RowHeader,
    ColHeader,
    #[default]
    Body,
}

pub struct Selector<S: Surface> {
    surface: S,
    placement: Placement,
    style: SelectorStyle,

    ranges: Vec<Range>,
    row_header_ranges: Vec<Range>,
    col_header_ranges: Vec<Range>,
    areas: Vec<VisualArea<S::Element>>,

    focus: (usize, usize),
    focus_range: Option<Range>,
    focus_area: Option<VisualArea<S::Element>>,

    // Transient cursor while dragging; equals `focus` at drag start.
    move_cursor: (usize, usize),

    copy_range: Option<Range>,
    copy_areas: Vec<VisualArea<S::Element>>,

    autofill_range: Option<Range>,
    autofill_area: VisualArea<S::Element>,
}

impl<S: Surface> Selector<S> {
    /// Create the selector for one grid zone. The placement is fixed for
    /// the selector's lifetime.
    pub fn new(surface: S, placement: Placement, style: SelectorStyle) -> Self {
        let autofill_area =
            VisualArea::create(&surface, &style.class("selector-autofill"), false);
        Self {
            surface,
            placement,
            style,
            ranges: Vec::new(),
            row_header_ranges: Vec::new(),
            col_header_ranges: Vec::new(),
            areas: Vec::new(),
            focus: (0, 0),
            focus_range: None,
            focus_area: None,
            move_cursor: (0, 0),
            copy_range: None,
            copy_areas: Vec::new(),
            autofill_range: None,
            autofill_area,
        }
    }

    pub const fn placement(&self) -> Placement {
        self.placement
    }

    /// Selected ranges, in selection order (most recent last).
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    /// Merged row-header bands, ascending by start row.
    pub fn row_header_ranges(&self) -> &[Range] {
        &self.row_header_ranges
    }

    /// Merged column-header bands, ascending by start column.
    pub fn col_header_ranges(&self) -> &[Range] {
        &self.col_header_ranges
    }

    pub const fn focus(&self) -> (usize, usize) {
        self.focus
    }

    pub const fn focus_range(&self) -> Option<Range> {
        self.focus_range
    }

    pub const fn move_cursor(&self) -> (usize, usize) {
        self.move_cursor
    }

    pub const fn copy_range(&self) -> Option<Range> {
        self.copy_range
    }

    pub const fn autofill_range(&self) -> Option<Range> {
        self.autofill_range
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn copy_area_count(&self) -> usize {
        self.copy_areas.len()
    }

    /// Anchor the selection at a cell. Resets the drag cursor to the
    /// anchor; callers register the range itself via [`Self::add_range`].
    pub fn set_focus(&mut self, row: usize, col: usize, range: Range) -> &mut Self {
        self.focus = (row, col);
        self.focus_range = Some(range);
        self.move_cursor = (row, col);
        self
    }

    /// Move the transient drag cursor.
    pub fn set_move_cursor(&mut self, row: usize, col: usize) -> &mut Self {
        self.move_cursor = (row, col);
        self
    }

    /// Register a selected range. With `clear`, earlier ranges and their
    /// visuals are dropped first (single-selection mode); without it the
    /// range joins a multi-selection.
    pub fn add_range(&mut self, range: Range, clear: bool) -> &mut Self {
        if clear {
            self.ranges.clear();
            self.clear();
        }
        self.ranges.push(range);
        debug!(total = self.ranges.len(), "range added");
        self.update_header_ranges();
        self
    }

    /// Replace the most recent range with `union_range(focus_range)`,
    /// leaving earlier multi-selected ranges untouched. A no-op when no
    /// focus range is set.
    pub fn update_last_range<F>(&mut self, union_range: F) -> &mut Self
    where
        F: FnOnce(Range) -> Range,
    {
        if let Some(focus_range) = self.focus_range {
            let next = union_range(focus_range);
            match self.ranges.last_mut() {
                Some(last) => *last = next,
                None => self.ranges.push(next),
            }
            self.update_header_ranges();
        }
        self
    }

    /// Outline area around an active range, inset so the stroke centers on
    /// the cell boundary. Body selectors also get the corner drag handle.
    pub fn add_area_outline(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        let mut outline = VisualArea::create(&self.surface, &self.style.class("selector"), true);
        outline
            .rect(rect.border_inset(self.style.border_width))
            .target(target.clone(), true);
        if self.placement == Placement::Body {
            outline.append_child(&self.surface.create("corner"));
        }
        self.areas.push(outline);
        self
    }

    /// Filled highlight area over a range's cells.
    pub fn add_area(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        let mut area =
            VisualArea::create(&self.surface, &self.style.class("selector-area"), true);
        area.rect(rect).target(target.clone(), true);
        self.areas.push(area);
        self
    }

    pub fn add_row_header_area(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        let mut area = VisualArea::create(
            &self.surface,
            &self.style.class("selector-area row-header"),
            true,
        );
        area.rect(rect).target(target.clone(), true);
        self.areas.push(area);
        self
    }

    pub fn add_col_header_area(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        let mut area = VisualArea::create(
            &self.surface,
            &self.style.class("selector-area col-header"),
            true,
        );
        area.rect(rect).target(target.clone(), true);
        self.areas.push(area);
        self
    }

    /// Marching-highlight area around the copy source.
    pub fn add_copy_area(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        let mut area =
            VisualArea::create(&self.surface, &self.style.class("selector-copy"), true);
        area.rect(rect.border_inset(self.style.border_width))
            .target(target.clone(), true);
        self.copy_areas.push(area);
        self
    }

    /// Create or replace the focus highlight. The node is not attached
    /// automatically: the caller controls insertion order so the focus
    /// cell layers above other highlights.
    pub fn set_focus_area(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        let mut area = VisualArea::create(&self.surface, &self.style.class(""), true);
        area.rect(rect).target(target.clone(), false);
        self.focus_area = Some(area);
        self
    }

    /// The focus highlight's element, for the caller-controlled insertion.
    pub fn focus_area_node(&self) -> Option<&S::Element> {
        self.focus_area.as_ref().map(VisualArea::node)
    }

    /// Snapshot the most recent range as the copy source. The snapshot is
    /// independent of later selection changes.
    pub fn show_copy(&mut self) -> &mut Self {
        self.copy_range = self.ranges.last().copied();
        debug!(range = ?self.copy_range, "copy source set");
        self
    }

    /// Drop the copy source and its visuals.
    pub fn clear_copy(&mut self) -> &mut Self {
        self.copy_range = None;
        for area in &mut self.copy_areas {
            area.clear();
        }
        self.copy_areas.clear();
        self
    }

    pub fn set_autofill_range(&mut self, range: Option<Range>) -> &mut Self {
        self.autofill_range = range;
        self
    }

    /// Reposition the singleton autofill area.
    pub fn set_autofill_area(&mut self, rect: Rect, target: &S::Element) -> &mut Self {
        self.autofill_area.rect(rect).target(target.clone(), true);
        self.autofill_area.show();
        self
    }

    /// Detach every selection and copy visual. Logical state (`ranges`,
    /// focus, copy and autofill ranges) is untouched; callers re-render
    /// from it afterwards.
    pub fn clear(&mut self) -> &mut Self {
        debug!(
            areas = self.areas.len(),
            copy_areas = self.copy_areas.len(),
            "visuals cleared"
        );
        for area in self.areas.iter_mut().chain(self.copy_areas.iter_mut()) {
            area.clear();
        }
        self.areas.clear();
        self.copy_areas.clear();
        self
    }

    fn update_header_ranges(&mut self) {
        let HeaderProjection {
            row_ranges,
            col_ranges,
        } = header::project(&self.ranges);
        self.row_header_ranges = row_ranges;
        self.col_header_ranges = col_ranges;
    }
}
