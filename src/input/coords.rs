//! Coordinate conversion between pointer space and grid space.
//!
//! This module is the single source of truth for pointer-to-cell conversion.
//! Hover, paint, and erase all resolve coordinates through the same
//! function, so the three paths stay visually consistent.

use crate::config::CanvasConfig;
use crate::types::Cell;

/// Immutable grid geometry: cell size in device pixels plus grid dimensions
/// in cells. Used only for coordinate validation and conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMapper {
    grid_width: u32,
    grid_height: u32,
    cell_size: u32,
}

impl CellMapper {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            cell_size: config.cell_size_px,
        }
    }

    /// Convert pointer coordinates (device pixels, canvas-origin relative)
    /// to the grid cell under them.
    ///
    /// Returns `None` when either coordinate is negative or exceeds the
    /// canvas pixel extent. The extent itself is accepted, matching the
    /// inclusive right/bottom edge check of the host hit-testing this was
    /// built against; a coordinate exactly on the far edge floors to the
    /// one-past-the-last cell index. No side effects.
    #[inline]
    pub fn to_cell(&self, x: f32, y: f32) -> Option<Cell> {
        let (extent_x, extent_y) = self.pixel_extent();
        if x < 0.0 || y < 0.0 || x > extent_x || y > extent_y {
            return None;
        }
        let size = self.cell_size as f32;
        Some(Cell::new(
            (x / size).floor() as i32,
            (y / size).floor() as i32,
        ))
    }

    /// Top-left corner of a cell in device pixels.
    #[inline]
    pub fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        let size = self.cell_size as f32;
        (cell.x as f32 * size, cell.y as f32 * size)
    }

    /// Canvas extent in device pixels.
    #[inline]
    pub fn pixel_extent(&self) -> (f32, f32) {
        (
            (self.grid_width * self.cell_size) as f32,
            (self.grid_height * self.cell_size) as f32,
        )
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
}
