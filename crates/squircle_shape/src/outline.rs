//! Outline computation entry point
//!
//! `compute_outline` runs the whole pipeline on pixel radii: validation,
//! edge-pair scaling, the all-zero rectangle shortcut, per-corner clamping,
//! direction resolution, smoothing clamp and finally assembly.

use squircle_paint::{CornerRadius, Path, Rect, Size};

use crate::assemble::squircle_path;
use crate::clamp::{
    clamped_corner_radius, clamped_corner_smoothing, ensure_finite, ensure_non_negative,
    sanitize_size, scale_to_edges,
};
use crate::direction::{LayoutDirection, LogicalCorners};
use crate::error::Result;

/// Result of outline computation
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Every corner is sharp; the host may draw a plain rectangle
    Rectangle(Rect),
    /// Squircle contour
    Generic(Path),
}

impl Outline {
    /// The outline as a path; rectangles become a four-segment contour
    pub fn to_path(&self) -> Path {
        match self {
            Outline::Rectangle(rect) => rect.to_path(),
            Outline::Generic(path) => path.clone(),
        }
    }

    pub fn into_path(self) -> Path {
        match self {
            Outline::Rectangle(rect) => rect.to_path(),
            Outline::Generic(path) => path,
        }
    }

    /// Bounding box of the outline
    pub fn bounds(&self) -> Rect {
        match self {
            Outline::Rectangle(rect) => *rect,
            Outline::Generic(path) => path.bounds().unwrap_or_default(),
        }
    }

    pub fn is_rectangle(&self) -> bool {
        matches!(self, Outline::Rectangle(_))
    }
}

/// Compute the outline for pixel radii given in logical (start/end) corners.
///
/// Fails only when a radius is NaN, infinite or negative.
pub fn compute_outline(
    size: Size,
    corners: LogicalCorners<f32>,
    smoothing: f32,
    direction: LayoutDirection,
) -> Result<Outline> {
    ensure_finite(&corners)?;
    // Checked before scaling: a zero-length edge would turn -r into -0
    ensure_non_negative(&corners.resolve(direction))?;
    let size = sanitize_size(size);
    let scaled = scale_to_edges(corners, size);

    if scaled.sum() == 0.0 {
        tracing::trace!("All corners sharp, emitting rectangle");
        return Ok(Outline::Rectangle(size.to_rect()));
    }

    let clamped = LogicalCorners::new(
        clamped_corner_radius(scaled.top_start, size),
        clamped_corner_radius(scaled.top_end, size),
        clamped_corner_radius(scaled.bottom_start, size),
        clamped_corner_radius(scaled.bottom_end, size),
    );
    let radii: CornerRadius = clamped.resolve(direction);
    let smoothing = clamped_corner_smoothing(smoothing);
    tracing::debug!(?radii, smoothing, ?direction, "Assembling squircle");

    Ok(Outline::Generic(squircle_path(size, &radii, smoothing)))
}

/// Compute the closed squircle path.
///
/// All radii are pixels in the same unit as `size`. The returned path always
/// closes back onto its first point; when every radius is zero it is the
/// bounding rectangle traced clockwise from the origin.
pub fn compute_path(
    size: Size,
    top_start: f32,
    top_end: f32,
    bottom_start: f32,
    bottom_end: f32,
    smoothing: f32,
    direction: LayoutDirection,
) -> Result<Path> {
    let corners = LogicalCorners::new(top_start, top_end, bottom_start, bottom_end);
    compute_outline(size, corners, smoothing, direction).map(Outline::into_path)
}
