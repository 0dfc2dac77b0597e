//! Pointer-down event handling - stroke start.

use crate::canvas::PixelCanvas;
use crate::profile_scope;
use crate::types::{PenMode, PointerEvent};

impl PixelCanvas {
    pub fn handle_mouse_down(&mut self, event: &PointerEvent) {
        profile_scope!("handle_mouse_down");

        match PenMode::from_buttons(event.buttons) {
            // A fresh press commits its first cell immediately; the shared
            // stroke path seeds the drag anchor from it.
            Some(mode) => self.continue_stroke(mode, event.x, event.y),
            // A press reporting no decodable button (unknown bitmask, both
            // buttons at once) must not corrupt the anchor with a guessed
            // mode; treat it as a hover event.
            None => self.update_hover(event.x, event.y),
        }
    }
}
