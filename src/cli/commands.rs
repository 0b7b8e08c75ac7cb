//! CLI Command Implementations
//!
//! Each command drives a [`TerminalSink`] over any writer, so the binary
//! prints to stdout while tests capture the frames.

use std::io::Write;
use std::path::Path;

use log::info;

use crate::color::Rgb;
use crate::config::StripConfig;
use crate::error::Result;
use crate::script::Script;
use crate::sink::{TerminalSink, TerminalStyle};
use crate::strip::{LayeredStrip, SetOptions};

fn style(plain: bool) -> TerminalStyle {
    if plain {
        TerminalStyle::Plain
    } else {
        TerminalStyle::Ansi
    }
}

/// Two layers: opaque green underneath, half red on top, then relinquish
/// them from the top down. Shows a frame after every step.
pub fn demo<W: Write>(out: W, pixels: usize, plain: bool) -> Result<W> {
    info!("Running demo on {} pixels", pixels);

    let sink = TerminalSink::new(out, pixels, style(plain));
    let mut strip = LayeredStrip::with_layers(sink, 2)?;

    for pixel in 0..pixels {
        strip.set(pixel, Rgb::GREEN, SetOptions::on_layer(1))?;
    }
    strip.write();

    for pixel in 0..pixels {
        strip.set(pixel, Rgb::RED, SetOptions::on_layer(0).alpha(0.5))?;
    }
    strip.write();

    strip.relinquishw(0)?;
    // keeps layer 1
    strip.relinquishtow(1)?;
    strip.relinquishw(1)?;

    Ok(strip.into_sink().into_inner())
}

/// Replay a script file, then show the final frame
pub fn run<W: Write>(
    out: W,
    script_path: &Path,
    pixels: usize,
    config_path: Option<&Path>,
    plain: bool,
) -> Result<W> {
    let config = match config_path {
        Some(path) => {
            info!("Loading strip config: {}", path.display());
            StripConfig::from_json_file(path)?
        }
        None => StripConfig::default(),
    };

    info!("Loading script: {}", script_path.display());
    let script = Script::from_json_file(script_path)?;

    let sink = TerminalSink::new(out, pixels, style(plain));
    let mut strip = LayeredStrip::new(sink, config)?;
    script.apply(&mut strip)?;
    strip.write();

    info!("Replayed {} operations", script.len());
    Ok(strip.into_sink().into_inner())
}
