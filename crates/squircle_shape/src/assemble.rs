//! Whole-contour assembly
//!
//! Traces the outline clockwise from the top edge: top edge, top-right corner,
//! right edge, bottom-right corner, bottom edge, bottom-left corner, left edge,
//! top-left corner, close. Straight runs that corners have fully consumed are
//! skipped, and sharp corners are just the shared vertex of their two edges.

use std::f32::consts::FRAC_1_SQRT_2;

use squircle_paint::{CornerRadius, Path, PathBuilder, Point, Size};

use crate::smoothing::{CornerCurve, CornerCurves};

/// Straight runs shorter than this are not emitted
const MIN_EDGE_LENGTH: f32 = 1e-4;

/// One corner in traversal order
struct Corner {
    /// The rectangle's vertex
    apex: Point,
    /// Direction of travel along the incoming edge
    incoming: Point,
    /// Direction of travel along the outgoing edge
    outgoing: Point,
    curve: CornerCurve,
}

impl Corner {
    fn entry(&self) -> Point {
        self.apex - self.incoming * self.curve.length
    }

    fn exit(&self) -> Point {
        self.apex + self.outgoing * self.curve.length
    }

    /// Emit the two mirrored cubics, entry → diagonal → exit
    fn trace(&self, builder: PathBuilder) -> PathBuilder {
        if self.curve.is_sharp() {
            return builder;
        }
        let curve = &self.curve;
        let entry = self.entry();
        let exit = self.exit();
        let diagonal = self.apex + (self.outgoing - self.incoming) * curve.diagonal_inset;
        let tangent = (self.incoming + self.outgoing) * FRAC_1_SQRT_2;

        let c1 = entry + self.incoming * curve.edge_handle;
        let c2 = diagonal - tangent * curve.diagonal_handle;
        let c3 = diagonal + tangent * curve.diagonal_handle;
        let c4 = exit - self.outgoing * curve.edge_handle;

        builder
            .cubic_to(c1.x, c1.y, c2.x, c2.y, diagonal.x, diagonal.y)
            .cubic_to(c3.x, c3.y, c4.x, c4.y, exit.x, exit.y)
    }
}

fn line_to(builder: PathBuilder, to: Point) -> PathBuilder {
    if builder.current().distance(to) > MIN_EDGE_LENGTH {
        builder.line_to(to.x, to.y)
    } else {
        builder
    }
}

/// Build the closed squircle contour.
///
/// `radii` must already be non-negative and fit their edges, and `smoothing`
/// must lie in `[0, 1]`.
pub fn squircle_path(size: Size, radii: &CornerRadius, smoothing: f32) -> Path {
    let curves = CornerCurves::fit(radii, size, smoothing);
    let (width, height) = (size.width, size.height);

    let right = Point::new(1.0, 0.0);
    let down = Point::new(0.0, 1.0);
    let left = Point::new(-1.0, 0.0);
    let up = Point::new(0.0, -1.0);

    let corners = [
        Corner {
            apex: Point::new(width, 0.0),
            incoming: right,
            outgoing: down,
            curve: curves.top_right,
        },
        Corner {
            apex: Point::new(width, height),
            incoming: down,
            outgoing: left,
            curve: curves.bottom_right,
        },
        Corner {
            apex: Point::new(0.0, height),
            incoming: left,
            outgoing: up,
            curve: curves.bottom_left,
        },
        Corner {
            apex: Point::ZERO,
            incoming: up,
            outgoing: right,
            curve: curves.top_left,
        },
    ];

    // The top-left corner closes the loop, so its exit is the start point.
    let start = corners[3].exit();
    let mut builder = PathBuilder::new().move_to(start.x, start.y);
    for corner in &corners {
        builder = line_to(builder, corner.entry());
        builder = corner.trace(builder);
    }
    builder.close().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::CIRCLE_HANDLE;
    use squircle_paint::PathCommand;

    fn cubic_point(p0: Point, c1: Point, c2: Point, p3: Point, t: f32) -> Point {
        let mt = 1.0 - t;
        p0 * (mt * mt * mt) + c1 * (3.0 * mt * mt * t) + c2 * (3.0 * mt * t * t) + p3 * (t * t * t)
    }

    #[test]
    fn test_uniform_squircle_structure() {
        let path = squircle_path(Size::new(200.0, 100.0), &CornerRadius::uniform(20.0), 0.55);

        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert_eq!(path.line_count(), 4);
        assert_eq!(path.cubic_count(), 8);
        assert_eq!(path.len(), 14);
        assert!(path.is_closed(1e-4));
        let start = path.start_point().unwrap();
        assert!(start.approx_eq(Point::new(31.0, 0.0), 1e-4));
    }

    #[test]
    fn test_full_edge_consumption_skips_lines() {
        let path = squircle_path(Size::new(100.0, 100.0), &CornerRadius::uniform(50.0), 0.0);

        assert_eq!(path.line_count(), 0);
        assert_eq!(path.cubic_count(), 8);
        assert!(path.is_closed(1e-4));
    }

    #[test]
    fn test_sharp_corner_is_single_vertex() {
        let radii = CornerRadius::new(0.0, 10.0, 0.0, 0.0);
        let path = squircle_path(Size::new(100.0, 50.0), &radii, 0.0);

        assert_eq!(path.cubic_count(), 2);
        assert_eq!(path.start_point(), Some(Point::ZERO));
        let commands = path.commands();
        assert!(commands.contains(&PathCommand::LineTo(Point::new(100.0, 50.0))));
        assert!(commands.contains(&PathCommand::LineTo(Point::new(0.0, 50.0))));
        assert_eq!(commands[commands.len() - 2], PathCommand::LineTo(Point::ZERO));
        assert!(path.is_closed(0.0));
    }

    #[test]
    fn test_unsmoothed_corner_follows_circle() {
        let radius = 40.0;
        let size = Size::new(100.0, 100.0);
        let path = squircle_path(size, &CornerRadius::new(0.0, radius, 0.0, 0.0), 0.0);
        let center = Point::new(size.width - radius, radius);

        let mut pen = Point::ZERO;
        let mut cubics = 0;
        for command in path.commands() {
            match *command {
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    assert!((pen.distance(control1) - radius * CIRCLE_HANDLE).abs() < 1e-3);
                    assert!((end.distance(control2) - radius * CIRCLE_HANDLE).abs() < 1e-3);
                    for step in 0..=8 {
                        let t = step as f32 / 8.0;
                        let on_curve = cubic_point(pen, control1, control2, end, t);
                        assert!((on_curve.distance(center) - radius).abs() < 1e-2);
                    }
                    cubics += 1;
                    pen = end;
                }
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => pen = p,
                PathCommand::Close => {}
            }
        }
        assert_eq!(cubics, 2);
    }

    #[test]
    fn test_halves_are_tangent_continuous() {
        let path = squircle_path(Size::new(120.0, 120.0), &CornerRadius::uniform(30.0), 0.8);
        let commands = path.commands();

        // First corner is top-right: the two cubics follow the top edge line.
        let (PathCommand::CubicTo { control2, end: diagonal, .. }, PathCommand::CubicTo { control1, .. }) =
            (commands[2], commands[3])
        else {
            panic!("expected two cubics after the top edge, got {:?}", &commands[..4]);
        };
        let before = diagonal - control2;
        let after = control1 - diagonal;
        let cross = before.x * after.y - before.y * after.x;
        assert!(cross.abs() < 1e-3);
        assert!((before.x - before.y).abs() < 1e-3);
    }

    #[test]
    fn test_zero_height_emits_no_negative_lines() {
        let path = squircle_path(Size::new(50.0, 0.0), &CornerRadius::ZERO, 0.5);
        for command in path.commands() {
            if let Some(point) = command.end_point() {
                assert!(point.x.is_finite() && point.y.is_finite());
                assert!(point.x >= 0.0 && point.y >= 0.0);
            }
        }
        assert!(path.is_closed(0.0));
    }
}
