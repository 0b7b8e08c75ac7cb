//! Layered strip facade
//!
//! [`LayeredStrip`] owns the layer store and the sink. Plain operations only
//! change in-memory layers; the `*w` variants and [`LayeredStrip::write`] are
//! the only calls that push to the sink, so many changes can be batched into
//! a single hardware update.
//!
//! ```
//! use layerstrip::{LayeredStrip, MemorySink, Rgb, SetOptions};
//!
//! let mut strip = LayeredStrip::with_layers(MemorySink::new(1), 2).unwrap();
//! strip.set(0, Rgb::GREEN, SetOptions::on_layer(1)).unwrap();
//! strip.set(0, Rgb::RED, SetOptions::on_layer(0).alpha(0.5)).unwrap();
//! strip.write();
//! assert_eq!(strip.sink().last_frame(), Some(&[Rgb::new(128, 128, 0)][..]));
//! ```

use log::{debug, trace};

use crate::color::Rgb;
use crate::config::StripConfig;
use crate::error::Result;
use crate::layers::{self, Cell, LayerStore};
use crate::sink::Sink;

/// Arguments for [`LayeredStrip::set`] and [`LayeredStrip::setw`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SetOptions {
    /// Blend weight in `[0.0, 1.0]`, default 1.0 (opaque)
    pub alpha: f64,
    /// Target layer; `None` uses the strip's default layer
    pub layer: Option<usize>,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            layer: None,
        }
    }
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque write to a specific layer
    pub fn on_layer(layer: usize) -> Self {
        Self {
            layer: Some(layer),
            ..Self::default()
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn layer(mut self, layer: usize) -> Self {
        self.layer = Some(layer);
        self
    }
}

/// A strip of pixels composited from several layers
///
/// Not synchronized: share it between threads only behind a lock around the
/// whole strip.
#[derive(Debug)]
pub struct LayeredStrip<S: Sink> {
    store: LayerStore,
    sink: S,
    default_layer: usize,
}

impl<S: Sink> LayeredStrip<S> {
    /// Build a strip over `sink`; the pixel count is the sink's length
    pub fn new(sink: S, config: StripConfig) -> Result<Self> {
        config.validate()?;
        let store = LayerStore::new(sink.len(), config.layer_count);
        debug!(
            "Layered strip ready: {} pixels, {} layers",
            store.pixel_count(),
            store.layer_count()
        );
        Ok(Self {
            store,
            sink,
            default_layer: config.default_layer,
        })
    }

    /// Build a strip with `layer_count` layers and default options
    pub fn with_layers(sink: S, layer_count: usize) -> Result<Self> {
        Self::new(sink, StripConfig::with_layers(layer_count))
    }

    pub fn pixel_count(&self) -> usize {
        self.store.pixel_count()
    }

    pub fn layer_count(&self) -> usize {
        self.store.layer_count()
    }

    /// Layer used when [`SetOptions::layer`] is `None`
    pub fn default_layer(&self) -> usize {
        self.default_layer
    }

    /// Change the layer used when [`SetOptions::layer`] is `None`
    pub fn set_layer(&mut self, layer: usize) -> Result<()> {
        self.store.check_layer(layer)?;
        self.default_layer = layer;
        Ok(())
    }

    /// Raw stored cell, unblended
    pub fn cell(&self, pixel: usize, layer: usize) -> Result<Cell> {
        self.store.cell(pixel, layer)
    }

    /// The layer table
    pub fn store(&self) -> &LayerStore {
        &self.store
    }

    /// Final color of one pixel, as [`write`](Self::write) would show it
    pub fn composite(&self, pixel: usize) -> Result<Rgb> {
        layers::composite(&self.store, pixel)
    }

    /// Final colors of the whole strip
    pub fn composite_all(&self) -> Vec<Rgb> {
        layers::composite_all(&self.store)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tear the strip down, returning the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Store one pixel's color on a layer, without touching the sink
    pub fn set(&mut self, pixel: usize, color: Rgb, opts: SetOptions) -> Result<()> {
        let layer = opts.layer.unwrap_or(self.default_layer);
        self.store.set_cell(pixel, layer, color, opts.alpha)
    }

    /// [`set`](Self::set), then push just that pixel to the sink
    pub fn setw(&mut self, pixel: usize, color: Rgb, opts: SetOptions) -> Result<()> {
        self.set(pixel, color, opts)?;
        let shown = self.composite(pixel)?;
        trace!("Pushing pixel {} as {}", pixel, shown);
        self.sink.set_pixel(pixel, shown);
        self.sink.show();
        Ok(())
    }

    /// Composite every pixel and push the whole frame to the sink
    pub fn write(&mut self) {
        let frame = self.composite_all();
        trace!("Pushing frame of {} pixels", frame.len());
        for (index, color) in frame.into_iter().enumerate() {
            self.sink.set_pixel(index, color);
        }
        self.sink.show();
    }

    /// Clear one layer on every pixel
    pub fn relinquish(&mut self, layer: usize) -> Result<()> {
        layers::relinquish_layer(&mut self.store, layer)
    }

    /// [`relinquish`](Self::relinquish), then [`write`](Self::write)
    pub fn relinquishw(&mut self, layer: usize) -> Result<()> {
        self.relinquish(layer)?;
        self.write();
        Ok(())
    }

    /// Clear every layer above (not including) `layer`
    pub fn relinquishto(&mut self, layer: usize) -> Result<()> {
        layers::relinquish_above(&mut self.store, layer)
    }

    /// [`relinquishto`](Self::relinquishto), then [`write`](Self::write)
    pub fn relinquishtow(&mut self, layer: usize) -> Result<()> {
        self.relinquishto(layer)?;
        self.write();
        Ok(())
    }

    /// Make a whole layer more transparent; `0.1` dims it by 10%
    pub fn fade(&mut self, layer: usize, scale: f64) -> Result<()> {
        layers::fade_layer(&mut self.store, layer, scale)
    }

    /// [`fade`](Self::fade), then [`write`](Self::write)
    pub fn fadew(&mut self, layer: usize, scale: f64) -> Result<()> {
        self.fade(layer, scale)?;
        self.write();
        Ok(())
    }
}
