//! Layerstrip CLI - terminal preview of layered LED strips

use std::io;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use layerstrip::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Layerstrip v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    match cli.command {
        Commands::Demo { pixels, plain } => {
            commands::demo(stdout.lock(), pixels, plain).context("demo failed")?;
        }
        Commands::Run {
            script,
            pixels,
            config,
            plain,
        } => {
            commands::run(stdout.lock(), &script, pixels, config.as_deref(), plain)
                .with_context(|| format!("failed to replay {}", script.display()))?;
        }
    }

    Ok(())
}
