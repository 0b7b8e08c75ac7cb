//! Bulk layer clearing and fading
//!
//! These always operate on every pixel of the strip. Layer arguments are
//! validated before anything is touched.

use crate::error::{Result, StripError};

use super::cell::Cell;
use super::store::LayerStore;

/// Reset one layer to transparent on every pixel
pub fn relinquish_layer(store: &mut LayerStore, layer: usize) -> Result<()> {
    store.check_layer(layer)?;
    for cell in store.layer_cells_mut(layer) {
        *cell = Cell::TRANSPARENT;
    }
    Ok(())
}

/// Reset every layer strictly above `layer` (indexes `0..layer`).
///
/// `layer` itself is kept; `layer == 0` clears nothing.
pub fn relinquish_above(store: &mut LayerStore, layer: usize) -> Result<()> {
    store.check_layer(layer)?;
    for above in 0..layer {
        relinquish_layer(store, above)?;
    }
    Ok(())
}

/// Make one layer more transparent on every pixel.
///
/// Each alpha is multiplied by `1 - scale`, floored at zero, so `0.1` dims
/// the layer by 10% and anything from `1.0` up clears its contribution.
/// Colors are kept.
pub fn fade_layer(store: &mut LayerStore, layer: usize, scale: f64) -> Result<()> {
    store.check_layer(layer)?;
    if !scale.is_finite() || scale < 0.0 {
        return Err(StripError::InvalidScale { scale });
    }

    let keep = (1.0 - scale).max(0.0);
    for cell in store.layer_cells_mut(layer) {
        cell.alpha *= keep;
    }
    Ok(())
}
