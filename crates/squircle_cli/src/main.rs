//! Squircle CLI - compute squircle outlines from the command line
//!
//! Reads an optional `squircle.toml`, applies command line overrides and
//! writes the outline as SVG path data, a standalone SVG document or JSON.

mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use config::{OutputFormat, SquircleConfig};
use squircle_shape::{CornerSize, LayoutDirection};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Compute the outline of a squircle
#[derive(Parser, Debug)]
#[command(name = "squircle")]
#[command(about = "Compute squircle outlines as SVG path data, SVG documents or JSON")]
#[command(version)]
struct Args {
    /// Config file, or a directory containing squircle.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Shape width in pixels
    #[arg(long)]
    width: Option<f32>,

    /// Shape height in pixels
    #[arg(long)]
    height: Option<f32>,

    /// Size of all four corners (e.g. 25%, 16dp, 32px)
    #[arg(short, long)]
    radius: Option<CornerSize>,

    #[arg(long)]
    top_start: Option<CornerSize>,

    #[arg(long)]
    top_end: Option<CornerSize>,

    #[arg(long)]
    bottom_start: Option<CornerSize>,

    #[arg(long)]
    bottom_end: Option<CornerSize>,

    /// Corner smoothing, 0.0 (circular) to 1.0 (fully smoothed)
    #[arg(short, long)]
    smoothing: Option<f32>,

    /// Pixels per dp
    #[arg(long)]
    density: Option<f32>,

    /// Lay out right-to-left
    #[arg(long)]
    rtl: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Fill color for SVG output
    #[arg(long)]
    fill: Option<String>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            SquircleConfig::load(path)?
        }
        None => SquircleConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let text = if args.dump_config {
        config.to_toml()?
    } else {
        output::render(&config)?
    };

    match &args.output {
        Some(path) => write_output(path, &text)?,
        None => println!("{}", text),
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn apply_overrides(config: &mut SquircleConfig, args: &Args) {
    let shape = &mut config.shape;
    if let Some(radius) = args.radius {
        shape.top_start = radius;
        shape.top_end = radius;
        shape.bottom_start = radius;
        shape.bottom_end = radius;
    }
    if let Some(size) = args.top_start {
        shape.top_start = size;
    }
    if let Some(size) = args.top_end {
        shape.top_end = size;
    }
    if let Some(size) = args.bottom_start {
        shape.bottom_start = size;
    }
    if let Some(size) = args.bottom_end {
        shape.bottom_end = size;
    }
    if let Some(smoothing) = args.smoothing {
        shape.corner_smoothing = smoothing;
    }

    let canvas = &mut config.canvas;
    if let Some(width) = args.width {
        canvas.width = width;
    }
    if let Some(height) = args.height {
        canvas.height = height;
    }
    if let Some(density) = args.density {
        canvas.density = density;
    }
    if args.rtl {
        canvas.direction = LayoutDirection::Rtl;
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(fill) = &args.fill {
        config.output.fill = Some(fill.clone());
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}
