//! Input state machine - unified state management for pointer interaction.
//!
//! A single explicit state machine tracks the current interaction mode,
//! making impossible states unrepresentable: a hover preview can only exist
//! while no button is held, and a drag anchor can only exist while one is.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Hovering        (pointer moves in bounds, no button)
//! Idle -> Drawing         (button press / button-held move)
//! Hovering -> Drawing     (button press - hover preview is dropped)
//! Drawing -> Hovering     (button release in bounds)
//! Any -> Idle             (pointer out of bounds with no button)
//! ```

use crate::types::{Cell, PenMode};

/// Unified interaction state for the drawing surface.
///
/// The hover cell and the drag anchor live inside the variants rather than
/// as independent optional fields, so the invariants "hover only while not
/// drawing" and "anchor only while a button is held" hold by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputState {
    /// No button held, pointer not over the canvas
    #[default]
    Idle,

    /// No button held, pointer inside bounds
    Hovering {
        /// The cell under the pointer, previewed but not committed
        cell: Cell,
    },

    /// A paint or erase button is held
    Drawing {
        /// Active mode, decoded from the triggering event's buttons
        mode: PenMode,
        /// Last cell a paint/erase was committed at during this stroke.
        /// `None` until the first in-bounds commit of the press.
        anchor: Option<Cell>,
    },
}

impl InputState {
    /// Returns true if a stroke is in progress
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// Returns true if the pointer is hovering without a button held
    pub fn is_hovering(&self) -> bool {
        matches!(self, Self::Hovering { .. })
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Get the hover preview cell, if hovering
    pub fn hover_cell(&self) -> Option<Cell> {
        match self {
            Self::Hovering { cell } => Some(*cell),
            _ => None,
        }
    }

    /// Get the active pen mode, if drawing
    pub fn pen_mode(&self) -> Option<PenMode> {
        match self {
            Self::Drawing { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    /// Get the last committed cell of the current stroke, if any
    pub fn drag_anchor(&self) -> Option<Cell> {
        match self {
            Self::Drawing { anchor, .. } => *anchor,
            _ => None,
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Enter the hover state for `cell`, dropping any stale drag anchor
    pub fn start_hovering(&mut self, cell: Cell) {
        *self = Self::Hovering { cell };
    }

    /// Enter the drawing state, keeping the anchor only when already drawing
    /// (a continued stroke); a fresh press starts without one.
    pub fn start_drawing(&mut self, mode: PenMode) {
        let anchor = self.drag_anchor();
        *self = Self::Drawing { mode, anchor };
    }

    /// Record a committed cell as the new drag anchor.
    /// No-op unless currently drawing.
    pub fn set_anchor(&mut self, cell: Cell) {
        if let Self::Drawing { anchor, .. } = self {
            *anchor = Some(cell);
        }
    }
}
