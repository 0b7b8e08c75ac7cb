//! Terminal preview of a strip
//!
//! Each `show` prints one line: a 24-bit ANSI colored block per pixel, or the
//! `#rrggbb` value of each pixel in plain mode.

use std::fmt::Write as _;
use std::io::Write;

use log::warn;

use crate::color::Rgb;

use super::Sink;

/// How a [`TerminalSink`] renders a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalStyle {
    /// Truecolor background blocks
    #[default]
    Ansi,
    /// Space-separated hex values, for logs and pipes
    Plain,
}

/// A virtual strip drawn onto any writer
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    out: W,
    style: TerminalStyle,
    staged: Vec<Rgb>,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, len: usize, style: TerminalStyle) -> Self {
        Self {
            out,
            style,
            staged: vec![Rgb::BLACK; len],
        }
    }

    /// Render the staged pixels as one line, without the newline
    pub fn render_line(&self) -> String {
        let mut line = String::new();
        match self.style {
            TerminalStyle::Ansi => {
                for c in &self.staged {
                    let _ = write!(line, "\x1b[48;2;{};{};{}m  ", c.r, c.g, c.b);
                }
                line.push_str("\x1b[0m");
            }
            TerminalStyle::Plain => {
                let hex: Vec<String> = self.staged.iter().map(Rgb::to_string).collect();
                line.push_str(&hex.join(" "));
            }
        }
        line
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for TerminalSink<W> {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.staged.get_mut(index) {
            *slot = color;
        }
    }

    fn show(&mut self) {
        let line = self.render_line();
        if let Err(e) = writeln!(self.out, "{}", line).and_then(|_| self.out.flush()) {
            warn!("Dropped frame, terminal write failed: {}", e);
        }
    }
}
