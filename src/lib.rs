//! Layerstrip - Layered Alpha Compositing for LED Strips
//!
//! Several independent producers (animations, status indicators, user
//! overrides) each own a layer of per-pixel color and alpha. A deterministic
//! blend decides what the strip actually shows.
//!
//! # Architecture
//!
//! - [`layers`]: cell storage, compositing and bulk relinquish
//! - [`strip`]: the [`LayeredStrip`] facade sequencing mutation and pushes
//! - [`sink`]: the device boundary ([`Sink`]) and in-crate virtual strips
//! - [`config`], [`script`], [`cli`]: configuration, operation replay and
//!   the terminal preview tool
//!
//! Layer 0 is the topmost layer. Under the last layer sits an implicit opaque
//! black background, so every pixel always composites to a defined color.

pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod layers;
pub mod script;
pub mod sink;
pub mod strip;

pub use color::Rgb;
pub use config::StripConfig;
pub use error::{IndexAxis, Result, StripError};
pub use layers::{Cell, LayerStore};
pub use sink::{MemorySink, Sink, TerminalSink, TerminalStyle};
pub use strip::{LayeredStrip, SetOptions};
