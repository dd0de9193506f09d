//! Squircle Shape
//!
//! Builds the outline of a rectangle whose corners blend from a circular
//! rounding into a smoother, superellipse-like profile.
//!
//! - **Corner sizes**: percent of the smaller side, density-independent units, or pixels
//! - **Layout direction**: corners are named `start`/`end` and mirrored for right-to-left
//! - **Smoothing**: 0 is an ordinary rounded rectangle, 1 a fully pronounced squircle
//!
//! # Example
//!
//! ```rust
//! use squircle_paint::Size;
//! use squircle_shape::{LayoutDirection, SquircleShape};
//!
//! let shape = SquircleShape::dp(16.0).with_smoothing(0.6);
//! let path = shape
//!     .compute_path(Size::new(120.0, 80.0), LayoutDirection::Ltr, 2.0)
//!     .unwrap();
//!
//! assert!(path.is_closed(1e-4));
//! assert_eq!(path.cubic_count(), 8);
//! ```

pub mod assemble;
pub mod clamp;
pub mod corner_size;
pub mod direction;
pub mod error;
pub mod outline;
pub mod shape;
pub mod smoothing;

pub use corner_size::CornerSize;
pub use direction::{LayoutDirection, LogicalCorners};
pub use error::{Result, ShapeError};
pub use outline::{compute_outline, compute_path, Outline};
pub use shape::{CornerSmoothing, SquircleShape};
pub use smoothing::{CornerCurve, CornerCurves};
