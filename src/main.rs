//! dzslicer - Slice an image into a Deep Zoom tile pyramid.
//!
//! This binary parses options, configures logging, and runs the slicer.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dzslicer::{Config, DeepZoomSlicer};

fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    let options = match config.slice_options() {
        Ok(options) => options,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let slicer = match DeepZoomSlicer::new(&config.source, options) {
        Ok(slicer) => slicer,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if config.remove {
        run_remove(&slicer)
    } else {
        run_slice(&slicer, &config)
    }
}

fn run_slice(slicer: &DeepZoomSlicer, config: &Config) -> ExitCode {
    info!("slicing {}", config.source.display());

    match slicer.slice() {
        Ok(report) => {
            info!(
                "done: {} tiles, levels 0..={}",
                report.tiles_written, report.max_level
            );
            info!("descriptor: {}", slicer.descriptor_path().display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("slicing failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_remove(slicer: &DeepZoomSlicer) -> ExitCode {
    match slicer.remove_artifacts() {
        Ok(true) => {
            info!("removed {}", slicer.levels_root().display());
            ExitCode::SUCCESS
        }
        Ok(false) => {
            info!("nothing to remove");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("cleanup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "dzslicer=debug"
    } else {
        "dzslicer=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
