//! Outline computation and formatting for the CLI

use anyhow::{Context, Result};
use serde::Serialize;
use squircle_paint::{path_to_svg, path_to_svg_data, PathCommand, Size, SvgStyle};

use crate::config::{OutputFormat, SquircleConfig};

#[derive(Serialize)]
struct JsonOutline<'a> {
    width: f32,
    height: f32,
    rectangle: bool,
    commands: &'a [PathCommand],
}

/// Compute the configured outline and format it
pub fn render(config: &SquircleConfig) -> Result<String> {
    let canvas = &config.canvas;
    let size = Size::new(canvas.width, canvas.height);
    let outline = config
        .shape
        .create_outline(size, canvas.direction, canvas.density)
        .with_context(|| format!("Failed to compute outline for {}", config.shape))?;
    tracing::info!(
        rectangle = outline.is_rectangle(),
        "Computed outline for {}x{}",
        size.width,
        size.height
    );

    let rectangle = outline.is_rectangle();
    let path = outline.into_path();
    let text = match config.output.format {
        OutputFormat::Path => path_to_svg_data(&path),
        OutputFormat::Svg => {
            let style = config
                .output
                .fill
                .as_deref()
                .map(SvgStyle::fill)
                .unwrap_or_default();
            path_to_svg(&path, size.width, size.height, style)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&JsonOutline {
            width: size.width,
            height: size.height,
            rectangle,
            commands: path.commands(),
        })
        .context("Failed to serialize outline")?,
    };
    Ok(text)
}
