//! The pixel set - the authoritative mapping from grid cell to paint state.
//!
//! A cell that is present in the set always has a defined color; removing a
//! cell deletes the mapping entirely, so "painted but colorless" entries
//! cannot exist. Iteration order is unspecified - cells do not overlap, so
//! the display list may emit them in any order.

use crate::canvas::raster::line_cells;
use crate::types::{Cell, Color};
use std::collections::HashMap;

/// Mapping from grid cell to paint color.
///
/// Keys are [`Cell`] values hashed by both coordinates, which keeps the key
/// derivation injective over all integer cell coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PixelSet {
    cells: HashMap<Cell, Color>,
}

impl PixelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint a cell. Painting an already-present cell overwrites its color
    /// (last write wins).
    pub fn add(&mut self, cell: Cell, color: Color) {
        self.cells.insert(cell, color);
    }

    /// Erase a cell. Erasing an absent cell is a no-op.
    pub fn remove(&mut self, cell: Cell) {
        self.cells.remove(&cell);
    }

    /// Look up the color a cell is painted with, if any.
    pub fn get(&self, cell: Cell) -> Option<&Color> {
        self.cells.get(&cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over painted cells in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Cell, &Color)> {
        self.cells.iter()
    }

    /// Remove all painted cells.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Apply a rasterized line to a copy of this set and return the new
    /// state, leaving `self` untouched.
    ///
    /// The line runs from `from` (exclusive - the caller already committed
    /// it) to `to` (inclusive). With `erase` false the result is the union
    /// of the line's cells with the prior set, all painted `color`; with
    /// `erase` true it is the set difference.
    pub fn apply_line(&self, from: Cell, to: Cell, color: &Color, erase: bool) -> Self {
        let mut next = self.clone();
        for cell in line_cells(from, to) {
            if erase {
                next.remove(cell);
            } else {
                next.add(cell, color.clone());
            }
        }
        next
    }
}
