//! Canvas configuration.
//!
//! The configuration is supplied once at engine construction and is static
//! afterward. Invalid grid geometry is rejected at construction time rather
//! than producing silently broken coordinate math.

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_HOVER_COLOR, DEFAULT_PEN_COLOR, MAX_CELL_SIZE_PX, MAX_GRID_DIMENSION,
};
use crate::types::Color;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised by configuration validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions must be positive on both axes
    #[error("invalid grid size: {width}x{height} (both axes must be positive)")]
    InvalidGridSize { width: u32, height: u32 },

    /// Grid dimensions above the sanity cap
    #[error("grid too large: {width}x{height} (max {max} per axis)")]
    GridTooLarge { width: u32, height: u32, max: u32 },

    /// Cell size must be positive
    #[error("invalid cell size: {0}px (must be positive)")]
    InvalidCellSize(u32),

    /// Cell size above the sanity cap
    #[error("cell size too large: {0}px (max {1}px)")]
    CellSizeTooLarge(u32, u32),
}

/// Static configuration for a [`PixelCanvas`](crate::canvas::PixelCanvas).
///
/// All fields have sensible defaults, so partial JSON configuration files
/// work; unknown fields are rejected to catch typos early.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Fill color of the empty canvas, drawn by the host surface
    pub background_color: Color,
    /// Color of the hover preview cell
    pub hover_color: Color,
    /// Initial pen color for painted cells
    pub pen_color: Color,
    /// Grid width in cells
    pub grid_width: u32,
    /// Grid height in cells
    pub grid_height: u32,
    /// Edge length of one cell in device pixels
    pub cell_size_px: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            hover_color: DEFAULT_HOVER_COLOR.to_string(),
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size_px: DEFAULT_CELL_SIZE_PX,
        }
    }
}

impl CanvasConfig {
    /// Validate the grid geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::InvalidGridSize {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_DIMENSION || self.grid_height > MAX_GRID_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_DIMENSION,
            });
        }
        if self.cell_size_px == 0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size_px));
        }
        if self.cell_size_px > MAX_CELL_SIZE_PX {
            return Err(ConfigError::CellSizeTooLarge(
                self.cell_size_px,
                MAX_CELL_SIZE_PX,
            ));
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("failed to parse canvas config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read canvas config from {}", path.display()))?;
        let config = Self::from_json(&contents)?;
        tracing::info!("loaded canvas config from {}", path.display());
        Ok(config)
    }

    /// Canvas pixel extent: `(grid_width * cell_size, grid_height * cell_size)`.
    pub fn pixel_extent(&self) -> (f32, f32) {
        (
            (self.grid_width * self.cell_size_px) as f32,
            (self.grid_height * self.cell_size_px) as f32,
        )
    }
}
