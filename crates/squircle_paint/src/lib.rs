//! Squircle Paint
//!
//! Plain 2D value types and vector path plumbing shared by the squircle crates.
//!
//! # Features
//!
//! - Geometry values (point, size, rect, per-corner radii)
//! - Path commands (move, line, cubic, close) and a path builder
//! - SVG path data and document export

pub mod path;
pub mod primitives;
pub mod svg;

pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use svg::{path_to_svg, path_to_svg_data, SvgDocument, SvgStyle};
