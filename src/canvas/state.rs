//! The pixel canvas engine - owned state and construction.
//!
//! `PixelCanvas` is the single interaction engine instance: it owns the
//! pixel set, the input state machine, and the grid geometry, and processes
//! one pointer event at a time to completion. It is independent of any UI
//! framework; the host surface feeds events in and draws the display list
//! out.

use crate::canvas::pixels::PixelSet;
use crate::canvas::project::{self, CellRect};
use crate::config::{CanvasConfig, ConfigError};
use crate::input::{CellMapper, InputState};
use crate::types::{Color, PaintedCell, PointerEvent, PointerEventKind};

/// The pixel-grid interaction engine.
pub struct PixelCanvas {
    pub(crate) config: CanvasConfig,
    pub(crate) mapper: CellMapper,
    pub(crate) pixels: PixelSet,
    pub(crate) input_state: InputState,
    pub(crate) pen_color: Color,
    /// Host container bounds from the last resize notification. Display
    /// scaling bookkeeping only; grid semantics never depend on it.
    container_size: Option<(f32, f32)>,
}

impl PixelCanvas {
    /// Create an engine from a validated configuration.
    ///
    /// Fails fast on configuration contract violations (non-positive grid
    /// dimensions or cell size) rather than producing silently broken
    /// coordinate math later.
    pub fn new(config: CanvasConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(
            grid_width = config.grid_width,
            grid_height = config.grid_height,
            cell_size_px = config.cell_size_px,
            "created pixel canvas"
        );
        let mapper = CellMapper::new(&config);
        let pen_color = config.pen_color.clone();
        Ok(Self {
            config,
            mapper,
            pixels: PixelSet::new(),
            input_state: InputState::Idle,
            pen_color,
            container_size: None,
        })
    }

    /// Dispatch a pointer event to its handler. All state transitions run
    /// synchronously inside this call, to completion.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        match event.kind {
            PointerEventKind::Move => self.handle_mouse_move(event),
            PointerEventKind::Down => self.handle_mouse_down(event),
            PointerEventKind::Up => self.handle_mouse_up(event),
        }
    }

    /// Record the host container bounds from a resize notification.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        tracing::trace!(width, height, "container resized");
        self.container_size = Some((width, height));
    }

    /// Host container bounds from the last resize notification, if any.
    pub fn container_size(&self) -> Option<(f32, f32)> {
        self.container_size
    }

    /// Change the pen color for subsequent paints. Already-painted cells
    /// keep the color they were committed with.
    pub fn set_pen_color(&mut self, color: impl Into<Color>) {
        self.pen_color = color.into();
    }

    pub fn pen_color(&self) -> &Color {
        &self.pen_color
    }

    /// Project the current state into the display list: one entry per
    /// painted cell, hover preview last so it overlays.
    pub fn display_list(&self) -> Vec<PaintedCell> {
        let hover = self
            .input_state
            .hover_cell()
            .map(|cell| PaintedCell::new(cell, self.config.hover_color.clone()));
        project::project(&self.pixels, hover)
    }

    /// The display list as device-pixel rectangles, ready to draw.
    pub fn display_rects(&self) -> Vec<CellRect> {
        project::to_rects(&self.display_list(), &self.mapper)
    }

    /// Erase every painted cell, leaving interaction state intact.
    pub fn clear(&mut self) {
        self.pixels.clear();
    }

    pub fn pixels(&self) -> &PixelSet {
        &self.pixels
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn mapper(&self) -> &CellMapper {
        &self.mapper
    }
}
