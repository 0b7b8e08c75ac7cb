//! Sink Module
//!
//! The device boundary: something that accepts final RGB values for a strip
//! and displays them. Physical drivers live outside this crate; the sinks
//! here cover tests and terminal previews.

mod memory;
mod terminal;

pub use memory::MemorySink;
pub use terminal::{TerminalSink, TerminalStyle};

use crate::color::Rgb;

/// A pixel device that composited colors are pushed to
///
/// Implementations are treated as synchronous and always available: staging
/// and showing cannot fail from the caller's point of view.
pub trait Sink {
    /// Number of addressable pixels
    fn len(&self) -> usize;

    /// Check if the device has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage one pixel's final color; `index` is below [`Sink::len`]
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Flush staged colors to the device
    fn show(&mut self);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel(index, color);
    }

    fn show(&mut self) {
        (**self).show();
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        (**self).set_pixel(index, color);
    }

    fn show(&mut self) {
        (**self).show();
    }
}
