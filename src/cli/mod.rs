//! CLI Module
//!
//! Command-line interface for previewing layered strips in a terminal.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Layerstrip - layered alpha compositing for LED strips
#[derive(Parser, Debug)]
#[command(name = "layerstrip")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the two-layer reference scenario
    #[command(name = "demo")]
    Demo {
        /// Number of pixels on the virtual strip
        #[arg(short, long, default_value_t = 1)]
        pixels: usize,

        /// Print hex values instead of colored blocks
        #[arg(long)]
        plain: bool,
    },

    /// Replay an operation script on a virtual strip
    #[command(name = "run")]
    Run {
        /// Path to the JSON operation script
        script: PathBuf,

        /// Number of pixels on the virtual strip
        #[arg(short, long, default_value_t = 8)]
        pixels: usize,

        /// JSON strip configuration (layer count, default layer)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print hex values instead of colored blocks
        #[arg(long)]
        plain: bool,
    },
}
