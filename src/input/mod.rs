//! Pointer input handling for the drawing surface.
//!
//! This module implements all pointer interaction logic for the pixel grid:
//! hover preview, single-cell paint/erase, and continuous strokes with gap
//! interpolation.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. The hover preview and the drag anchor live
//! inside its variants, which makes impossible states unrepresentable.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `coords` - Pointer-space to grid-space conversion
//! - `mouse_down` - Pointer down event handling (stroke start)
//! - `mouse_up` - Pointer up event handling (stroke end, hover re-eval)
//! - `drag` - Pointer move handling (hover, stroke continuation, gap fill)

pub mod coords;
mod state;
mod mouse_down;
mod mouse_up;
mod drag;

pub use coords::CellMapper;
pub use state::InputState;
