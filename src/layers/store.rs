//! Layer storage
//!
//! A fixed `pixels x layers` table of [`Cell`]s, allocated once. Cells are
//! stored pixel-major so a pixel's whole stack is one contiguous slice,
//! ordered top (layer 0) to bottom.

use crate::color::Rgb;
use crate::error::{Result, StripError};

use super::cell::{validate_alpha, Cell};

/// Validated storage for every (pixel, layer) cell
#[derive(Debug, Clone, PartialEq)]
pub struct LayerStore {
    pixel_count: usize,
    layer_count: usize,
    cells: Vec<Cell>,
}

impl LayerStore {
    /// Allocate a store with every cell transparent
    pub fn new(pixel_count: usize, layer_count: usize) -> Self {
        Self {
            pixel_count,
            layer_count,
            cells: vec![Cell::TRANSPARENT; pixel_count * layer_count],
        }
    }

    /// Number of addressable pixels (N)
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Number of addressable layers (L)
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Overwrite one cell
    ///
    /// Nothing is written unless the pixel, layer and alpha are all valid.
    pub fn set_cell(&mut self, pixel: usize, layer: usize, color: Rgb, alpha: f64) -> Result<()> {
        let index = self.index_of(pixel, layer)?;
        validate_alpha(alpha)?;
        self.cells[index] = Cell { color, alpha };
        Ok(())
    }

    /// Read back the raw stored cell, unblended
    pub fn cell(&self, pixel: usize, layer: usize) -> Result<Cell> {
        let index = self.index_of(pixel, layer)?;
        Ok(self.cells[index])
    }

    /// Reset one cell to the transparent default
    pub fn clear_cell(&mut self, pixel: usize, layer: usize) -> Result<()> {
        let index = self.index_of(pixel, layer)?;
        self.cells[index] = Cell::TRANSPARENT;
        Ok(())
    }

    /// All layers of one pixel, topmost first
    pub fn stack(&self, pixel: usize) -> Result<&[Cell]> {
        self.check_pixel(pixel)?;
        Ok(self.stack_at(pixel))
    }

    /// Stack of a pixel already known to be in range
    pub(crate) fn stack_at(&self, pixel: usize) -> &[Cell] {
        debug_assert!(pixel < self.pixel_count, "pixel {} out of range", pixel);
        let start = pixel * self.layer_count;
        &self.cells[start..start + self.layer_count]
    }

    pub(crate) fn check_pixel(&self, pixel: usize) -> Result<()> {
        if pixel < self.pixel_count {
            Ok(())
        } else {
            Err(StripError::pixel_out_of_range(pixel, self.pixel_count))
        }
    }

    pub(crate) fn check_layer(&self, layer: usize) -> Result<()> {
        if layer < self.layer_count {
            Ok(())
        } else {
            Err(StripError::layer_out_of_range(layer, self.layer_count))
        }
    }

    /// Mutable view of one layer across every pixel
    pub(crate) fn layer_cells_mut(&mut self, layer: usize) -> impl Iterator<Item = &mut Cell> {
        self.cells
            .iter_mut()
            .skip(layer)
            .step_by(self.layer_count.max(1))
    }

    fn index_of(&self, pixel: usize, layer: usize) -> Result<usize> {
        self.check_pixel(pixel)?;
        self.check_layer(layer)?;
        Ok(pixel * self.layer_count + layer)
    }
}
