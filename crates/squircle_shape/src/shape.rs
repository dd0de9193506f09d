//! Squircle shape description
//!
//! [`SquircleShape`] is an immutable value: four logical corner sizes plus a
//! smoothing factor. It carries no geometry of its own; the host asks it for
//! an outline once the bounds, layout direction and density are known.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use squircle_paint::{Path, Size};

use crate::corner_size::{float_key, CornerSize};
use crate::direction::{LayoutDirection, LogicalCorners};
use crate::error::Result;
use crate::outline::{compute_outline, Outline};

/// Common corner smoothing presets
pub struct CornerSmoothing;

impl CornerSmoothing {
    /// Plain rounded rectangle
    pub const NONE: f32 = 0.0;
    /// Default, a gently smoothed rounded rectangle
    pub const MEDIUM: f32 = 0.55;
    /// Fully pronounced squircle
    pub const FULL: f32 = 1.0;
}

/// Rectangle with smoothed corners
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SquircleShape {
    #[serde(default)]
    pub top_start: CornerSize,
    #[serde(default)]
    pub top_end: CornerSize,
    #[serde(default)]
    pub bottom_start: CornerSize,
    #[serde(default)]
    pub bottom_end: CornerSize,
    /// 0 is a plain rounded rectangle, 1 a fully pronounced squircle
    #[serde(default = "default_smoothing", alias = "smoothing")]
    pub corner_smoothing: f32,
}

fn default_smoothing() -> f32 {
    CornerSmoothing::MEDIUM
}

impl SquircleShape {
    pub const fn new(
        top_start: CornerSize,
        top_end: CornerSize,
        bottom_start: CornerSize,
        bottom_end: CornerSize,
        corner_smoothing: f32,
    ) -> Self {
        Self {
            top_start,
            top_end,
            bottom_start,
            bottom_end,
            corner_smoothing,
        }
    }

    /// Same size on every corner, medium smoothing
    pub const fn uniform(corner: CornerSize) -> Self {
        Self::new(corner, corner, corner, corner, CornerSmoothing::MEDIUM)
    }

    /// Every corner at `percent` of the smaller dimension
    pub fn percent(percent: f32) -> Result<Self> {
        Ok(Self::uniform(CornerSize::percent(percent)?))
    }

    /// Every corner at a density-independent radius
    pub const fn dp(radius: f32) -> Self {
        Self::uniform(CornerSize::Dp(radius))
    }

    /// Every corner at a pixel radius
    pub const fn px(radius: f32) -> Self {
        Self::uniform(CornerSize::Px(radius))
    }

    /// Individually sized corners, medium smoothing
    pub const fn with_corners(
        top_start: CornerSize,
        top_end: CornerSize,
        bottom_start: CornerSize,
        bottom_end: CornerSize,
    ) -> Self {
        Self::new(
            top_start,
            top_end,
            bottom_start,
            bottom_end,
            CornerSmoothing::MEDIUM,
        )
    }

    pub const fn with_smoothing(self, corner_smoothing: f32) -> Self {
        Self {
            corner_smoothing,
            ..self
        }
    }

    pub fn corners(&self) -> LogicalCorners<CornerSize> {
        LogicalCorners::new(
            self.top_start,
            self.top_end,
            self.bottom_start,
            self.bottom_end,
        )
    }

    /// Resolve corner sizes to pixels and compute the outline
    pub fn create_outline(
        &self,
        size: Size,
        direction: LayoutDirection,
        density: f32,
    ) -> Result<Outline> {
        let pixels = self.corners().try_map(|corner| corner.to_px(size, density))?;
        compute_outline(size, pixels, self.corner_smoothing, direction)
    }

    /// Like [`create_outline`](Self::create_outline), always as a path
    pub fn compute_path(&self, size: Size, direction: LayoutDirection, density: f32) -> Result<Path> {
        self.create_outline(size, direction, density)
            .map(Outline::into_path)
    }
}

impl Default for SquircleShape {
    fn default() -> Self {
        Self::uniform(CornerSize::Percent(100.0))
    }
}

impl PartialEq for SquircleShape {
    fn eq(&self, other: &Self) -> bool {
        self.corners() == other.corners()
            && float_key(self.corner_smoothing) == float_key(other.corner_smoothing)
    }
}

impl Eq for SquircleShape {}

impl Hash for SquircleShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.corners().hash(state);
        float_key(self.corner_smoothing).hash(state);
    }
}

impl fmt::Display for SquircleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SquircleShape(top_start = {}, top_end = {}, bottom_start = {}, bottom_end = {}, \
             corner_smoothing = {})",
            self.top_start, self.top_end, self.bottom_start, self.bottom_end, self.corner_smoothing
        )
    }
}
