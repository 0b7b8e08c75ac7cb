//! Operation scripts
//!
//! A script is a JSON array of strip operations, replayed in order:
//!
//! ```json
//! [
//!   { "op": "set", "pixel": 0, "r": 0, "g": 255, "b": 0, "layer": 1 },
//!   { "op": "set", "pixel": 0, "r": 255, "g": 0, "b": 0, "alpha": 0.5, "layer": 0 },
//!   { "op": "write" },
//!   { "op": "relinquishw", "layer": 0 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{Result, StripError};
use crate::sink::Sink;
use crate::strip::{LayeredStrip, SetOptions};

fn default_alpha() -> f64 {
    1.0
}

/// One pixel write as it appears in a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixelWrite {
    pub pixel: usize,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<usize>,
}

impl PixelWrite {
    fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    fn options(&self) -> SetOptions {
        SetOptions {
            alpha: self.alpha,
            layer: self.layer,
        }
    }
}

/// A single strip operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Set(PixelWrite),
    Setw(PixelWrite),
    Write,
    Relinquish { layer: usize },
    Relinquishw { layer: usize },
    Relinquishto { layer: usize },
    Relinquishtow { layer: usize },
    Fade { layer: usize, scale: f64 },
    Fadew { layer: usize, scale: f64 },
    SetLayer { layer: usize },
}

impl Operation {
    /// Run this operation against a strip
    pub fn apply<S: Sink>(&self, strip: &mut LayeredStrip<S>) -> Result<()> {
        match self {
            Operation::Set(w) => strip.set(w.pixel, w.color(), w.options()),
            Operation::Setw(w) => strip.setw(w.pixel, w.color(), w.options()),
            Operation::Write => {
                strip.write();
                Ok(())
            }
            Operation::Relinquish { layer } => strip.relinquish(*layer),
            Operation::Relinquishw { layer } => strip.relinquishw(*layer),
            Operation::Relinquishto { layer } => strip.relinquishto(*layer),
            Operation::Relinquishtow { layer } => strip.relinquishtow(*layer),
            Operation::Fade { layer, scale } => strip.fade(*layer, *scale),
            Operation::Fadew { layer, scale } => strip.fadew(*layer, *scale),
            Operation::SetLayer { layer } => strip.set_layer(*layer),
        }
    }
}

/// An ordered list of operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub operations: Vec<Operation>,
}

impl Script {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self { operations }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Replay every operation in order, stopping at the first failure
    ///
    /// Operations before the failing step stay applied.
    pub fn apply<S: Sink>(&self, strip: &mut LayeredStrip<S>) -> Result<()> {
        for (step, op) in self.operations.iter().enumerate() {
            debug!("Script step {}: {:?}", step, op);
            op.apply(strip).map_err(|e| StripError::ScriptStep {
                step,
                source: Box::new(e),
            })?;
        }
        Ok(())
    }
}
