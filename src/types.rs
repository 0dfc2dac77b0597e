//! Core types for the Pixelboard drawing surface.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: grid cells, painted cells, pen modes, and the pointer events the
//! host surface feeds into the engine.

use crate::constants::{PRIMARY_BUTTON, SECONDARY_BUTTON};
use serde::{Deserialize, Serialize};

/// An opaque display-color token, stored as a hex string (e.g. "#c0c0c0").
///
/// The engine never inspects color values; it only carries them from the
/// configuration into the display list.
pub type Color = String;

/// One discrete grid unit, addressed by integer coordinates.
///
/// Equality is structural and `Cell` hashes by both coordinates, so it is
/// usable directly as a map key without any composite-key encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true if `other` is within one cell of `self` on both axes
    /// (including `self` itself). Consecutive pointer samples that are not
    /// adjacent need line interpolation to avoid a dotted stroke.
    pub fn is_adjacent(&self, other: Cell) -> bool {
        let max_dist = crate::constants::ADJACENT_CELL_DISTANCE;
        (self.x - other.x).abs() <= max_dist && (self.y - other.y).abs() <= max_dist
    }
}

/// A cell together with the color it is (or would be) drawn in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaintedCell {
    pub cell: Cell,
    pub color: Color,
}

impl PaintedCell {
    pub fn new(cell: Cell, color: impl Into<Color>) -> Self {
        Self {
            cell,
            color: color.into(),
        }
    }
}

/// The two interaction modes a held pointer button selects.
///
/// Derived once per event from the raw button bitmask, so the mutation paths
/// never compare numeric button codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PenMode {
    /// Primary button: paint cells with the pen color
    Paint,
    /// Secondary button: erase painted cells
    Erase,
}

impl PenMode {
    /// Decode a pointer-event button bitmask into a pen mode.
    ///
    /// Returns `None` for no buttons and for any unknown combination
    /// (including both buttons held), which the state machine treats as a
    /// hover-only event rather than guessing a draw mode.
    pub fn from_buttons(buttons: u8) -> Option<Self> {
        match buttons {
            PRIMARY_BUTTON => Some(Self::Paint),
            SECONDARY_BUTTON => Some(Self::Erase),
            _ => None,
        }
    }

    pub fn is_erase(&self) -> bool {
        matches!(self, Self::Erase)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Paint => "paint",
            Self::Erase => "erase",
        }
    }
}

/// Kind of pointer event delivered by the host surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Move,
    Down,
    Up,
}

/// A pointer event in device-pixel coordinates relative to the canvas origin.
///
/// `buttons` is the raw button bitmask as reported by the host (0 = none,
/// 1 = primary, 2 = secondary). The engine decodes it via
/// [`PenMode::from_buttons`] and treats anything unknown as no button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
    pub buttons: u8,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32, buttons: u8) -> Self {
        Self { kind, x, y, buttons }
    }

    /// A move event with the given button state.
    pub fn moved(x: f32, y: f32, buttons: u8) -> Self {
        Self::new(PointerEventKind::Move, x, y, buttons)
    }

    /// A button-press event.
    pub fn down(x: f32, y: f32, buttons: u8) -> Self {
        Self::new(PointerEventKind::Down, x, y, buttons)
    }

    /// A button-release event. Release events carry the post-release button
    /// state, which is no buttons for a single-button interaction.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y, 0)
    }
}
