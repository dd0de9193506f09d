//! Per-corner smoothing curve parameters
//!
//! Every rounded corner is drawn as two cubics that meet on the corner's
//! diagonal. With no smoothing each cubic is the standard approximation of a
//! 45° circular arc. Smoothing pushes the curve's entry point further along
//! the edge (up to twice the radius) and stretches the handles towards the
//! proportions of a fully smoothed corner, where the circular part vanishes
//! and each half is a single continuous-curvature transition.
//!
//! Based on https://www.figma.com/blog/desperately-seeking-squircles/

use std::f32::consts::FRAC_1_SQRT_2;

use squircle_paint::{CornerRadius, Size};

/// Handle length of a cubic approximating a 45° arc of unit radius: `4/3 * tan(pi/16)`
pub const CIRCLE_HANDLE: f32 = 0.265_216_5;

/// Edge-side handle of a fully smoothed half corner: `4 / (3 * sqrt(2))`
const SMOOTH_EDGE_HANDLE: f32 = 0.942_809_04;

/// Diagonal-side handle of a fully smoothed half corner: `tan(pi/8)`
const SMOOTH_DIAGONAL_HANDLE: f32 = 0.414_213_56;

/// Distance of the diagonal point from both edges, per unit radius
const DIAGONAL_INSET: f32 = 1.0 - FRAC_1_SQRT_2;

/// Geometry of a single corner, all lengths in the path's unit
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerCurve {
    pub radius: f32,
    /// Distance from the corner vertex at which the curve leaves each edge
    pub length: f32,
    /// Smoothing actually applied after fitting `length` into the edges
    pub smoothing: f32,
    /// Handle length at the edge end of each cubic
    pub edge_handle: f32,
    /// Handle length at the diagonal end of each cubic
    pub diagonal_handle: f32,
    /// Offset of the diagonal point from both adjoining edges
    pub diagonal_inset: f32,
}

impl CornerCurve {
    pub const SHARP: CornerCurve = CornerCurve {
        radius: 0.0,
        length: 0.0,
        smoothing: 0.0,
        edge_handle: 0.0,
        diagonal_handle: 0.0,
        diagonal_inset: 0.0,
    };

    /// Edge length a corner would like to consume: `(1 + smoothing) * radius`
    pub fn requested_length(radius: f32, smoothing: f32) -> f32 {
        (1.0 + smoothing) * radius
    }

    /// Corner with its full requested length
    pub fn new(radius: f32, smoothing: f32) -> Self {
        Self::fitted(radius, smoothing, Self::requested_length(radius, smoothing))
    }

    /// Corner whose curve length was limited to `available`.
    ///
    /// The length never drops below the radius; any shortfall is taken from the
    /// smoothing, never from the circular part.
    pub fn fitted(radius: f32, smoothing: f32, available: f32) -> Self {
        if radius <= 0.0 {
            return Self::SHARP;
        }
        let smoothing = (available / radius - 1.0).min(smoothing).max(0.0);
        Self {
            radius,
            length: Self::requested_length(radius, smoothing),
            smoothing,
            edge_handle: radius * lerp(CIRCLE_HANDLE, SMOOTH_EDGE_HANDLE, smoothing),
            diagonal_handle: radius * lerp(CIRCLE_HANDLE, SMOOTH_DIAGONAL_HANDLE, smoothing),
            diagonal_inset: radius * DIAGONAL_INSET,
        }
    }

    pub fn is_sharp(&self) -> bool {
        self.radius <= 0.0
    }
}

/// Curves for all four physical corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerCurves {
    pub top_left: CornerCurve,
    pub top_right: CornerCurve,
    pub bottom_right: CornerCurve,
    pub bottom_left: CornerCurve,
}

impl CornerCurves {
    /// Fit each corner's requested length into the straight runs it shares.
    ///
    /// When two corners on one edge ask for more than the edge offers, both are
    /// shortened by the same factor. A corner touches two edges and takes the
    /// tighter of the two factors so it stays symmetric about its diagonal.
    pub fn fit(radii: &CornerRadius, size: Size, smoothing: f32) -> Self {
        let request = |radius: f32| CornerCurve::requested_length(radius, smoothing);
        let top_left = request(radii.top_left);
        let top_right = request(radii.top_right);
        let bottom_right = request(radii.bottom_right);
        let bottom_left = request(radii.bottom_left);

        let top = fit_factor(top_left + top_right, size.width);
        let bottom = fit_factor(bottom_left + bottom_right, size.width);
        let left = fit_factor(top_left + bottom_left, size.height);
        let right = fit_factor(top_right + bottom_right, size.height);

        Self {
            top_left: CornerCurve::fitted(radii.top_left, smoothing, top_left * top.min(left)),
            top_right: CornerCurve::fitted(radii.top_right, smoothing, top_right * top.min(right)),
            bottom_right: CornerCurve::fitted(
                radii.bottom_right,
                smoothing,
                bottom_right * bottom.min(right),
            ),
            bottom_left: CornerCurve::fitted(
                radii.bottom_left,
                smoothing,
                bottom_left * bottom.min(left),
            ),
        }
    }
}

fn fit_factor(requested: f32, available: f32) -> f32 {
    if requested > available {
        available / requested
    } else {
        1.0
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
