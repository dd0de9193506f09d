//! Squircle configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use squircle_shape::{LayoutDirection, SquircleShape};
use std::fs;
use std::path::Path;

/// Top-level configuration (squircle.toml)
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct SquircleConfig {
    #[serde(default = "default_shape")]
    pub shape: SquircleShape,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Uniform 16dp corners with medium smoothing
fn default_shape() -> SquircleShape {
    SquircleShape::dp(16.0)
}

impl Default for SquircleConfig {
    fn default() -> Self {
        Self {
            shape: default_shape(),
            canvas: CanvasConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Bounds and host environment the outline is computed for
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    #[serde(default = "default_dimension")]
    pub width: f32,
    #[serde(default = "default_dimension")]
    pub height: f32,
    /// Pixels per density-independent unit
    #[serde(default = "default_density")]
    pub density: f32,
    #[serde(default)]
    pub direction: LayoutDirection,
}

fn default_dimension() -> f32 {
    100.0
}

fn default_density() -> f32 {
    1.0
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_dimension(),
            height: default_dimension(),
            density: default_density(),
            direction: LayoutDirection::default(),
        }
    }
}

/// What to write
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Fill color for SVG documents
    #[serde(default)]
    pub fill: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// SVG path data (the `d` attribute)
    #[default]
    Path,
    /// Standalone SVG document
    Svg,
    /// Path commands as JSON
    Json,
}

impl SquircleConfig {
    /// Load configuration from a file, or from `squircle.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("squircle.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("No config found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}
