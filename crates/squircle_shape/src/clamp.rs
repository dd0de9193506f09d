//! Scalar clamping and input validation
//!
//! Radii sharing an edge are scaled down together so their sum never exceeds
//! the edge length. Scaling is uniform over the pair, never an independent
//! clip, so corner proportions survive.

use squircle_paint::{CornerRadius, Size};

use crate::direction::LogicalCorners;
use crate::error::{Result, ShapeError};

/// Replace NaN, infinite or negative dimensions with zero
pub fn sanitize_size(size: Size) -> Size {
    let width = sanitize_dimension(size.width);
    let height = sanitize_dimension(size.height);
    if width != size.width || height != size.height {
        tracing::warn!(
            "Invalid size {}x{} treated as {}x{}",
            size.width,
            size.height,
            width,
            height
        );
    }
    Size::new(width, height)
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Clamp the smoothing factor into `[0, 1]`; NaN becomes 0
pub fn clamped_corner_smoothing(smoothing: f32) -> f32 {
    if smoothing.is_nan() {
        tracing::warn!("NaN corner smoothing treated as 0");
        return 0.0;
    }
    smoothing.clamp(0.0, 1.0)
}

/// Limit a single (non-negative) radius to the smaller dimension of `size`
pub fn clamped_corner_radius(radius: f32, size: Size) -> f32 {
    radius.clamp(0.0, size.min_dimension())
}

/// Scale `a` and `b` by the same factor so that `a + b <= limit`
pub fn scale_pair(a: f32, b: f32, limit: f32) -> (f32, f32) {
    let sum = a + b;
    if sum > limit {
        let scale = limit / sum;
        tracing::trace!(a, b, limit, scale, "Scaling corner pair");
        (a * scale, b * scale)
    } else {
        (a, b)
    }
}

/// Fit every edge-sharing pair of radii into its edge.
///
/// Start/end pairs share the vertical edges and top/bottom pairs share the
/// horizontal ones; the pairing is the same in either layout direction, so the
/// result can be relabelled afterwards without breaking the invariant.
pub fn scale_to_edges(corners: LogicalCorners<f32>, size: Size) -> LogicalCorners<f32> {
    let (top_start, bottom_start) = scale_pair(corners.top_start, corners.bottom_start, size.height);
    let (top_end, bottom_end) = scale_pair(corners.top_end, corners.bottom_end, size.height);
    // A second pass can only shrink, so the vertical sums stay within height.
    let (top_start, top_end) = scale_pair(top_start, top_end, size.width);
    let (bottom_start, bottom_end) = scale_pair(bottom_start, bottom_end, size.width);
    LogicalCorners::new(top_start, top_end, bottom_start, bottom_end)
}

/// Reject NaN and infinite radii before any arithmetic touches them
pub fn ensure_finite(corners: &LogicalCorners<f32>) -> Result<()> {
    let named = [
        ("top_start", corners.top_start),
        ("top_end", corners.top_end),
        ("bottom_start", corners.bottom_start),
        ("bottom_end", corners.bottom_end),
    ];
    for (corner, value) in named {
        if !value.is_finite() {
            return Err(ShapeError::NonFiniteRadius { corner, value });
        }
    }
    Ok(())
}

/// Precondition: no radius may be negative once scaled
pub fn ensure_non_negative(radii: &CornerRadius) -> Result<()> {
    if radii.to_array().iter().any(|r| *r < 0.0) {
        return Err(ShapeError::NegativeRadius {
            top_left: radii.top_left,
            top_right: radii.top_right,
            bottom_right: radii.bottom_right,
            bottom_left: radii.bottom_left,
        });
    }
    Ok(())
}
