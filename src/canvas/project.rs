//! Display-list projection.
//!
//! Maps the current pixel set (plus an optional transient hover cell) into
//! the list the host surface draws. Purely derived - recomputed on every
//! state change, never a storage location.

use crate::canvas::pixels::PixelSet;
use crate::input::coords::CellMapper;
use crate::types::{Color, PaintedCell};
use serde::{Deserialize, Serialize};

/// An axis-aligned colored rectangle in device pixels, one cell in size.
///
/// This is the outbound shape the host rendering surface consumes: cell
/// position times cell size, plus a fill color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

/// Project the pixel set and hover preview into an ordered display list.
///
/// One entry per painted cell, in unspecified order, followed - if present -
/// by the hover cell as the final entry so it visually overlays committed
/// pixels.
pub fn project(pixels: &PixelSet, hover: Option<PaintedCell>) -> Vec<PaintedCell> {
    let mut list: Vec<PaintedCell> = pixels
        .iter()
        .map(|(cell, color)| PaintedCell::new(*cell, color.clone()))
        .collect();
    if let Some(hover) = hover {
        list.push(hover);
    }
    list
}

/// Convert a projected display list into device-pixel rectangles.
pub fn to_rects(list: &[PaintedCell], mapper: &CellMapper) -> Vec<CellRect> {
    list.iter()
        .map(|painted| {
            let (x, y) = mapper.cell_origin(painted.cell);
            CellRect {
                x,
                y,
                size: mapper.cell_size() as f32,
                color: painted.color.clone(),
            }
        })
        .collect()
}
