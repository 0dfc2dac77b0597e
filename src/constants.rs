//! Application-wide constants.
//!
//! Centralizes magic numbers and default values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Grid Defaults
// ============================================================================

/// Default grid width in cells
pub const DEFAULT_GRID_WIDTH: u32 = 128;

/// Default grid height in cells
pub const DEFAULT_GRID_HEIGHT: u32 = 128;

/// Default edge length of one cell in device pixels
pub const DEFAULT_CELL_SIZE_PX: u32 = 10;

/// Sanity cap on grid dimensions (cells per axis)
pub const MAX_GRID_DIMENSION: u32 = 4096;

/// Sanity cap on cell size in device pixels
pub const MAX_CELL_SIZE_PX: u32 = 256;

// ============================================================================
// Colors (default hex values)
// ============================================================================

/// Default canvas background color (light gray)
pub const DEFAULT_BACKGROUND_COLOR: &str = "#c0c0c0";

/// Default hover preview color (lighter gray)
pub const DEFAULT_HOVER_COLOR: &str = "#d3d3d3";

/// Default pen color (black)
pub const DEFAULT_PEN_COLOR: &str = "#000000";

// ============================================================================
// Pointer Buttons
// ============================================================================

/// Button bitmask value for the primary (paint) button
pub const PRIMARY_BUTTON: u8 = 1;

/// Button bitmask value for the secondary (erase) button
pub const SECONDARY_BUTTON: u8 = 2;

// ============================================================================
// Stroke Interpolation
// ============================================================================

/// Maximum per-axis cell distance between consecutive pointer samples that
/// still counts as adjacent; anything farther triggers line interpolation
pub const ADJACENT_CELL_DISTANCE: i32 = 1;
