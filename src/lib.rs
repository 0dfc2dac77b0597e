//! Pixelboard - a fixed-resolution pixel-art drawing surface engine.
//!
//! The crate maps continuous pointer coordinates to discrete grid cells,
//! maintains the stateful pixel set, interprets pointer-event sequences
//! into hover previews, single-cell edits, and continuous strokes (with
//! line interpolation for skipped cells), and projects the result into a
//! display list of colored rectangles.
//!
//! The host rendering surface stays external: it supplies pointer and
//! resize events and draws the display list. The engine owns everything in
//! between and is independent of any UI framework.
//!
//! ## Modules
//!
//! - `canvas` - Pixel storage, line rasterization, projection, the engine
//! - `input` - Pointer handling and the interaction state machine
//! - `config` - Static canvas configuration with fail-fast validation
//! - `types` - Cells, colors, pen modes, pointer events
//! - `constants` - Defaults and caps
//! - `logging` - tracing subscriber setup
//! - `perf` - Feature-gated profiling instrumentation

pub mod canvas;
pub mod config;
pub mod constants;
pub mod input;
pub mod logging;
pub mod perf;
pub mod types;

pub use canvas::{CellRect, PixelCanvas, PixelSet};
pub use config::{CanvasConfig, ConfigError};
pub use input::{CellMapper, InputState};
pub use types::{Cell, Color, PaintedCell, PenMode, PointerEvent, PointerEventKind};
