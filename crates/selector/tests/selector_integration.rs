mod common;

use websheet_overlay::{Element, Rect};
use websheet_range::Range;
use websheet_selector::Placement;

#[test]
fn test_add_range_clear_semantics() {
    let (mut selector, _sheet) = common::body_selector();
    let r1 = Range::new(0, 0, 1, 1);
    let r2 = Range::new(3, 3, 4, 4);

    selector.add_range(r1, true);
    selector.add_range(r2, true);
    assert_eq!(selector.ranges(), &[r2]);

    selector.add_range(r1, false);
    assert_eq!(selector.ranges(), &[r2, r1]);
}

#[test]
fn test_header_ranges_follow_every_mutation() {
    let (mut selector, _sheet) = common::body_selector();
    selector.add_range(Range::cell(0, 0), true);
    selector.add_range(Range::cell(2, 2), false);

    assert_eq!(
        selector.row_header_ranges(),
        &[Range::new(0, 0, 0, 0), Range::new(2, 0, 2, 0)]
    );
    assert_eq!(
        selector.col_header_ranges(),
        &[Range::new(0, 0, 0, 0), Range::new(0, 2, 0, 2)]
    );

    // Extending the last range re-projects immediately
    selector.set_focus(2, 2, Range::cell(2, 2));
    selector.update_last_range(|focus| focus.union(Range::cell(0, 0)));
    assert_eq!(selector.row_header_ranges(), &[Range::new(0, 0, 2, 0)]);
    assert_eq!(selector.col_header_ranges(), &[Range::new(0, 0, 0, 2)]);
}

#[test]
fn test_update_last_range_preserves_earlier_ranges() {
    let (mut selector, _sheet) = common::body_selector();
    let r1 = Range::cell(0, 0);
    let r2 = Range::cell(3, 3);

    selector.add_range(r1, true);
    selector.add_range(r2, false);
    selector.set_focus(3, 3, r2);
    selector.update_last_range(|focus| focus.union(Range::cell(5, 5)));

    assert_eq!(selector.ranges(), &[r1, Range::new(3, 3, 5, 5)]);
}

#[test]
fn test_update_last_range_without_focus_is_noop() {
    let (mut selector, _sheet) = common::body_selector();
    let r1 = Range::cell(1, 1);
    selector.add_range(r1, true);

    selector.update_last_range(|focus| focus.union(Range::cell(9, 9)));
    assert_eq!(selector.ranges(), &[r1]);
}

#[test]
fn test_copy_snapshot_survives_reselection() {
    let (mut selector, _sheet) = common::body_selector();
    let r1 = Range::new(0, 0, 1, 1);
    let r2 = Range::new(5, 5, 6, 6);

    selector.add_range(r1, true);
    selector.show_copy();
    assert_eq!(selector.copy_range(), Some(r1));

    // Re-selecting does not disturb the copy source
    selector.add_range(r2, true);
    assert_eq!(selector.copy_range(), Some(r1));

    selector.clear_copy();
    assert_eq!(selector.copy_range(), None);
}

#[test]
fn test_clear_detaches_all_areas() {
    let (mut selector, sheet) = common::body_selector();
    selector.add_area(Rect::new(0.0, 0.0, 100.0, 25.0), &sheet);
    selector.add_area_outline(Rect::new(0.0, 0.0, 100.0, 25.0), &sheet);
    selector.add_copy_area(Rect::new(0.0, 0.0, 100.0, 25.0), &sheet);
    assert_eq!(sheet.child_count(), 3);

    selector.clear();
    assert_eq!(sheet.child_count(), 0);
    assert_eq!(selector.area_count(), 0);
    assert_eq!(selector.copy_area_count(), 0);

    // Clearing again is a no-op
    selector.clear();
    assert_eq!(sheet.child_count(), 0);
}

#[test]
fn test_clear_keeps_logical_state() {
    let (mut selector, sheet) = common::body_selector();
    let r1 = Range::new(0, 0, 2, 2);
    selector.add_range(r1, true);
    selector.show_copy();
    selector.set_autofill_range(Some(Range::new(3, 0, 5, 2)));
    selector.add_area(Rect::new(0.0, 0.0, 10.0, 10.0), &sheet);

    selector.clear();
    assert_eq!(selector.ranges(), &[r1]);
    assert_eq!(selector.copy_range(), Some(r1));
    assert_eq!(selector.autofill_range(), Some(Range::new(3, 0, 5, 2)));
}

#[test]
fn test_outline_corner_handle_only_for_body() {
    let (mut body, sheet) = common::body_selector();
    body.add_area_outline(Rect::new(0.0, 0.0, 100.0, 30.0), &sheet);
    let children = sheet.children();
    let outline = &children[0];
    assert_eq!(outline.child_count(), 1);
    assert_eq!(outline.children()[0].class(), "corner");
    // Stroke centered on the cell boundary via the border inset
    assert_eq!(outline.rect(), Some(Rect::new(-1.0, -1.0, 98.0, 28.0)));

    let (mut header, header_sheet) = common::selector_for(Placement::RowHeader);
    header.add_area_outline(Rect::new(0.0, 0.0, 100.0, 30.0), &header_sheet);
    assert_eq!(header_sheet.children()[0].child_count(), 0);
}

#[test]
fn test_focus_area_is_not_auto_attached() {
    let (mut selector, sheet) = common::body_selector();
    selector.set_focus_area(Rect::new(0.0, 0.0, 100.0, 25.0), &sheet);
    assert_eq!(sheet.child_count(), 0);

    // The caller layers the focus node above other highlights
    let node = selector.focus_area_node().unwrap().clone();
    sheet.append(&node);
    assert_eq!(sheet.child_count(), 1);
    assert_eq!(node.class(), "websheet");
}

#[test]
fn test_autofill_area_is_reused() {
    let (mut selector, sheet) = common::body_selector();
    let first = Rect::new(0.0, 0.0, 50.0, 20.0);
    let second = Rect::new(0.0, 20.0, 50.0, 40.0);

    selector.set_autofill_area(first, &sheet);
    assert_eq!(sheet.child_count(), 1);

    selector.set_autofill_area(second, &sheet);
    assert_eq!(sheet.child_count(), 1);
    assert_eq!(sheet.children()[0].rect(), Some(second));

    selector.set_autofill_range(Some(Range::new(0, 0, 3, 1)));
    assert_eq!(selector.autofill_range(), Some(Range::new(0, 0, 3, 1)));
    selector.set_autofill_range(None);
    assert_eq!(selector.autofill_range(), None);
}

#[test]
fn test_focus_resets_move_cursor() {
    let (mut selector, _sheet) = common::body_selector();
    selector.set_focus(2, 3, Range::cell(2, 3));
    assert_eq!(selector.focus(), (2, 3));
    assert_eq!(selector.move_cursor(), (2, 3));
    assert_eq!(selector.focus_range(), Some(Range::cell(2, 3)));

    // Dragging moves the cursor but not the anchor
    selector.set_move_cursor(5, 6);
    assert_eq!(selector.move_cursor(), (5, 6));
    assert_eq!(selector.focus(), (2, 3));
}
