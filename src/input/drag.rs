//! Pointer-move handling - hover preview and stroke continuation.
//!
//! ## Performance Notes
//!
//! Pointer move fires very frequently during a drag (60+ times per second).
//! The handlers stay allocation-free on the hover path and only clone the
//! pixel map when a gap needs bulk interpolation.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.
//!
//! Move events also arrive sparser than the stroke's geometric path when the
//! pointer is fast: consecutive samples can land several cells apart. The
//! stroke continuation detects that gap against the last committed cell and
//! fills it through the line rasterizer, so strokes stay continuous.

use crate::canvas::PixelCanvas;
use crate::profile_scope;
use crate::types::{PenMode, PointerEvent};

impl PixelCanvas {
    pub fn handle_mouse_move(&mut self, event: &PointerEvent) {
        profile_scope!("handle_mouse_move");

        match PenMode::from_buttons(event.buttons) {
            // No button held (or an unknown bitmask): hover preview only
            None => self.update_hover(event.x, event.y),
            Some(mode) => self.continue_stroke(mode, event.x, event.y),
        }
    }

    /// Recompute the hover preview from the current pointer position,
    /// dropping any stale drag anchor.
    pub(crate) fn update_hover(&mut self, x: f32, y: f32) {
        match self.mapper.to_cell(x, y) {
            Some(cell) => self.input_state.start_hovering(cell),
            None => self.input_state.reset(),
        }
    }

    /// Commit a paint/erase at the pointer position and advance the stroke.
    ///
    /// Shared by press and button-held move events: the first in-bounds
    /// commit of a press paints a single cell and seeds the anchor; later
    /// commits either paint directly (adjacent sample) or rasterize the line
    /// from the anchor (gap detected).
    pub(crate) fn continue_stroke(&mut self, mode: PenMode, x: f32, y: f32) {
        self.input_state.start_drawing(mode);

        let Some(cell) = self.mapper.to_cell(x, y) else {
            // Out of bounds mid-stroke: no mutation, and the anchor stays
            // where the last in-bounds commit happened so the stroke
            // reconnects when the pointer re-enters.
            return;
        };

        match self.input_state.drag_anchor() {
            Some(anchor) if !anchor.is_adjacent(cell) => {
                tracing::trace!(from = ?anchor, to = ?cell, mode = mode.label(), "interpolating stroke gap");
                self.pixels = self
                    .pixels
                    .apply_line(anchor, cell, &self.pen_color, mode.is_erase());
            }
            _ => match mode {
                PenMode::Paint => self.pixels.add(cell, self.pen_color.clone()),
                PenMode::Erase => self.pixels.remove(cell),
            },
        }

        self.input_state.set_anchor(cell);
    }
}
