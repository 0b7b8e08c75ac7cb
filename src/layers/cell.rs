//! Per-pixel, per-layer color and alpha

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{Result, StripError};

/// One layer's contribution to one pixel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub color: Rgb,
    /// Blend weight: 1.0 replaces everything below, 0.0 is invisible
    pub alpha: f64,
}

impl Cell {
    /// The state every cell starts in and returns to when relinquished
    pub const TRANSPARENT: Cell = Cell {
        color: Rgb::BLACK,
        alpha: 0.0,
    };

    /// The implicit layer under every stack: opaque black.
    pub const BACKGROUND: Cell = Cell {
        color: Rgb::BLACK,
        alpha: 1.0,
    };

    /// Create a cell, rejecting alpha outside `[0.0, 1.0]` (including NaN)
    pub fn new(color: Rgb, alpha: f64) -> Result<Self> {
        validate_alpha(alpha)?;
        Ok(Self { color, alpha })
    }

    /// Whether this cell contributes nothing to the composite
    pub fn is_transparent(&self) -> bool {
        self.alpha == 0.0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if (0.0..=1.0).contains(&alpha) {
        Ok(())
    } else {
        Err(StripError::InvalidAlpha { alpha })
    }
}
