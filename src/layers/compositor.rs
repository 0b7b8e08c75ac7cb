//! Alpha compositing of a pixel's layer stack
//!
//! Layers are folded bottom to top ("painter's algorithm"), starting from the
//! constant background cell:
//!
//! ```text
//! acc = color * alpha + acc * (1 - alpha)
//! ```
//!
//! An opaque layer therefore hides everything below it and a transparent one
//! leaves the accumulated color untouched. Callers wanting strict priority
//! semantics always write alpha 1.0.

use std::iter;

use crate::color::Rgb;
use crate::error::Result;

use super::cell::Cell;
use super::store::LayerStore;

/// Blend a stack ordered topmost first into one opaque color
pub fn composite_stack(stack: &[Cell]) -> Rgb {
    let blended = iter::once(&Cell::BACKGROUND)
        .chain(stack.iter().rev())
        .fold([0.0f64; 3], |acc, cell| {
            let alpha = cell.alpha;
            let color = cell.color.to_f64_array();
            [
                color[0] * alpha + acc[0] * (1.0 - alpha),
                color[1] * alpha + acc[1] * (1.0 - alpha),
                color[2] * alpha + acc[2] * (1.0 - alpha),
            ]
        });
    Rgb::from_f64_array(blended)
}

/// Final color of one pixel
pub fn composite(store: &LayerStore, pixel: usize) -> Result<Rgb> {
    Ok(composite_stack(store.stack(pixel)?))
}

/// Final colors of every pixel, in strip order
pub fn composite_all(store: &LayerStore) -> Vec<Rgb> {
    (0..store.pixel_count())
        .map(|pixel| composite_stack(store.stack_at(pixel)))
        .collect()
}
