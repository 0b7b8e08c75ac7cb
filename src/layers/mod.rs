//! Layer Model Module
//!
//! Implements the layered pixel model:
//! - Cell storage per (pixel, layer), with validated access
//! - Compositing of a pixel's stack over an opaque black background
//! - Bulk relinquish and fade of whole layers
//!
//! Layer 0 is the topmost layer and wins over every layer below it.

pub mod compositor;
pub mod relinquish;

mod cell;
mod store;

pub use cell::Cell;
pub use compositor::{composite, composite_all, composite_stack};
pub use relinquish::{fade_layer, relinquish_above, relinquish_layer};
pub use store::LayerStore;
