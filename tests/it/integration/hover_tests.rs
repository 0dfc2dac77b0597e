//! Hover preview and event-flow integration tests.

use crate::helpers::{drag_to, hover, press, release, small_canvas};
use pixelboard::constants::PRIMARY_BUTTON;
use pixelboard::{Cell, PaintedCell};

#[test]
fn test_hover_tracks_the_pointer() {
    let mut canvas = small_canvas();
    hover(&mut canvas, 35.0, 45.0);

    assert!(canvas.input_state().is_hovering());
    assert_eq!(canvas.input_state().hover_cell(), Some(Cell::new(3, 4)));

    hover(&mut canvas, 55.0, 45.0);
    assert_eq!(canvas.input_state().hover_cell(), Some(Cell::new(5, 4)));
}

#[test]
fn test_hover_appears_last_in_display_list() {
    let mut canvas = small_canvas();

    press(&mut canvas, 5.0, 5.0, PRIMARY_BUTTON);
    release(&mut canvas, 5.0, 5.0);
    hover(&mut canvas, 35.0, 45.0);

    let list = canvas.display_list();
    assert_eq!(list.len(), 2);
    assert_eq!(
        list.last(),
        Some(&PaintedCell::new(Cell::new(3, 4), "#d3d3d3"))
    );
}

#[test]
fn test_pointer_leaving_bounds_clears_hover() {
    let mut canvas = small_canvas();
    hover(&mut canvas, 35.0, 45.0);
    assert!(canvas.input_state().is_hovering());

    hover(&mut canvas, 150.0, 45.0);
    assert!(canvas.input_state().is_idle());
    assert!(canvas.display_list().is_empty());
}

#[test]
fn test_hover_clears_on_draw() {
    let mut canvas = small_canvas();
    hover(&mut canvas, 35.0, 45.0);
    assert!(canvas.input_state().hover_cell().is_some());

    press(&mut canvas, 35.0, 45.0, PRIMARY_BUTTON);

    assert_eq!(canvas.input_state().hover_cell(), None);
    // The only hover-colored entry is gone; the committed cell uses the pen
    // color.
    let list = canvas.display_list();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0], PaintedCell::new(Cell::new(3, 4), "#000000"));
}

#[test]
fn test_hover_stays_cleared_while_dragging() {
    let mut canvas = small_canvas();
    press(&mut canvas, 5.0, 5.0, PRIMARY_BUTTON);
    drag_to(&mut canvas, 25.0, 5.0, PRIMARY_BUTTON);

    assert_eq!(canvas.input_state().hover_cell(), None);
}

#[test]
fn test_release_restores_hover_at_release_position() {
    let mut canvas = small_canvas();
    press(&mut canvas, 5.0, 5.0, PRIMARY_BUTTON);
    drag_to(&mut canvas, 75.0, 75.0, PRIMARY_BUTTON);
    release(&mut canvas, 75.0, 75.0);

    assert!(canvas.input_state().is_hovering());
    assert_eq!(canvas.input_state().hover_cell(), Some(Cell::new(7, 7)));
    assert_eq!(canvas.input_state().drag_anchor(), None);
}

#[test]
fn test_release_out_of_bounds_goes_idle() {
    let mut canvas = small_canvas();
    press(&mut canvas, 5.0, 5.0, PRIMARY_BUTTON);
    release(&mut canvas, -10.0, 5.0);

    assert!(canvas.input_state().is_idle());
    assert_eq!(canvas.input_state().drag_anchor(), None);
}

#[test]
fn test_resize_notification_is_bookkeeping_only() {
    let mut canvas = small_canvas();
    press(&mut canvas, 5.0, 5.0, PRIMARY_BUTTON);

    assert_eq!(canvas.container_size(), None);
    canvas.handle_resize(640.0, 480.0);
    assert_eq!(canvas.container_size(), Some((640.0, 480.0)));

    // Grid semantics unaffected: the stroke continues as before
    drag_to(&mut canvas, 15.0, 5.0, PRIMARY_BUTTON);
    assert_eq!(canvas.pixels().len(), 2);
}

#[test]
fn test_display_rects_for_committed_and_hover_cells() {
    let mut canvas = small_canvas();
    press(&mut canvas, 5.0, 5.0, PRIMARY_BUTTON);
    release(&mut canvas, 5.0, 5.0);
    hover(&mut canvas, 35.0, 45.0);

    let rects = canvas.display_rects();
    assert_eq!(rects.len(), 2);

    let hover_rect = rects.last().unwrap();
    assert_eq!((hover_rect.x, hover_rect.y), (30.0, 40.0));
    assert_eq!(hover_rect.size, 10.0);
    assert_eq!(hover_rect.color, "#d3d3d3");
}
