//! Error handling for layerstrip
//!
//! Validation errors carry the offending value so callers can report
//! exactly what was rejected.

use std::fmt;

use thiserror::Error;

/// Result type alias for layerstrip operations
pub type Result<T> = std::result::Result<T, StripError>;

/// Which index an [`StripError::IndexOutOfRange`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAxis {
    Pixel,
    Layer,
}

impl fmt::Display for IndexAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexAxis::Pixel => write!(f, "pixel"),
            IndexAxis::Layer => write!(f, "layer"),
        }
    }
}

/// Main error type for layerstrip operations
#[derive(Error, Debug)]
pub enum StripError {
    // Validation Errors
    #[error("{axis} index {index} out of range (must be below {limit})")]
    IndexOutOfRange {
        axis: IndexAxis,
        index: usize,
        limit: usize,
    },

    #[error("Invalid alpha {alpha}: must be within [0.0, 1.0]")]
    InvalidAlpha { alpha: f64 },

    #[error("Invalid fade scale {scale}: must be finite and non-negative")]
    InvalidScale { scale: f64 },

    // Setup Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Script step {step} failed: {source}")]
    ScriptStep {
        step: usize,
        #[source]
        source: Box<StripError>,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StripError {
    pub(crate) fn pixel_out_of_range(index: usize, limit: usize) -> Self {
        StripError::IndexOutOfRange {
            axis: IndexAxis::Pixel,
            index,
            limit,
        }
    }

    pub(crate) fn layer_out_of_range(index: usize, limit: usize) -> Self {
        StripError::IndexOutOfRange {
            axis: IndexAxis::Layer,
            index,
            limit,
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            StripError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            StripError::InvalidAlpha { .. } => "INVALID_ALPHA",
            StripError::InvalidScale { .. } => "INVALID_SCALE",
            StripError::InvalidConfig { .. } => "INVALID_CONFIG",
            StripError::ScriptStep { .. } => "SCRIPT_STEP_FAILED",
            StripError::Io(_) => "IO_ERROR",
            StripError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if this error was caused by an invalid argument to a strip operation
    ///
    /// Such errors leave the strip untouched, so the caller can simply retry
    /// with corrected arguments.
    pub fn is_caller_error(&self) -> bool {
        match self {
            StripError::IndexOutOfRange { .. }
            | StripError::InvalidAlpha { .. }
            | StripError::InvalidScale { .. } => true,
            StripError::ScriptStep { source, .. } => source.is_caller_error(),
            _ => false,
        }
    }
}
