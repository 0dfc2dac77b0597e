//! Pointer-up event handling - stroke end, hover re-evaluation.

use crate::canvas::PixelCanvas;
use crate::profile_scope;
use crate::types::PointerEvent;

impl PixelCanvas {
    pub fn handle_mouse_up(&mut self, event: &PointerEvent) {
        profile_scope!("handle_mouse_up");

        // Releasing the button is the only cancellation signal: the stroke
        // ends here. Re-evaluating as a zero-button event drops the drag
        // anchor and restores the hover preview at the release position
        // (or Idle when the pointer left the canvas).
        self.update_hover(event.x, event.y);
    }
}
