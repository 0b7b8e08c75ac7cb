//! In-memory sink that records everything pushed to it

use crate::color::Rgb;

use super::Sink;

/// A virtual strip keeping staged pixels and every shown frame
///
/// History is never trimmed on its own: a long-running strip keeps one frame
/// per `show` and one entry per `set_pixel`. Call
/// [`clear_history`](Self::clear_history) periodically outside of tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    staged: Vec<Rgb>,
    frames: Vec<Vec<Rgb>>,
    pixel_writes: Vec<(usize, Rgb)>,
}

impl MemorySink {
    /// Create a strip of `len` black pixels
    pub fn new(len: usize) -> Self {
        Self {
            staged: vec![Rgb::BLACK; len],
            frames: Vec::new(),
            pixel_writes: Vec::new(),
        }
    }

    /// Currently staged colors (shown or not)
    pub fn staged(&self) -> &[Rgb] {
        &self.staged
    }

    /// Every frame passed to `show`, oldest first
    pub fn frames(&self) -> &[Vec<Rgb>] {
        &self.frames
    }

    /// The most recently shown frame
    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Number of `show` calls so far
    pub fn show_count(&self) -> usize {
        self.frames.len()
    }

    /// Every `set_pixel` call, oldest first
    pub fn pixel_writes(&self) -> &[(usize, Rgb)] {
        &self.pixel_writes
    }

    /// Forget recorded history, keeping the staged colors
    pub fn clear_history(&mut self) {
        self.frames.clear();
        self.pixel_writes.clear();
    }
}

impl Sink for MemorySink {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.staged.get_mut(index) {
            *slot = color;
            self.pixel_writes.push((index, color));
        }
    }

    fn show(&mut self) {
        self.frames.push(self.staged.clone());
    }
}
