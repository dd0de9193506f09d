//! Path building and representation

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::primitives::Rect;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn lerp(self, other: Point, t: f32) -> Point {
        self + (other - self) * t
    }

    /// Component-wise comparison within `epsilon`
    pub fn approx_eq(self, other: Point, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

impl PathCommand {
    /// The point the pen rests on after this command, `None` for `Close`
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { end, .. } => Some(end),
            PathCommand::Close => None,
        }
    }
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Point of the first `MoveTo`
    pub fn start_point(&self) -> Option<Point> {
        self.commands.iter().find_map(|cmd| match cmd {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Last point drawn before any trailing `Close`
    pub fn last_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// Whether the path ends with `Close` and its last drawn point returns to the start
    pub fn is_closed(&self, epsilon: f32) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
            && match (self.start_point(), self.last_point()) {
                (Some(start), Some(last)) => start.approx_eq(last, epsilon),
                _ => false,
            }
    }

    /// Bounding box of every point in the path, control points included
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = self.commands.iter().flat_map(|cmd| {
            let points: SmallVec<[Point; 3]> = match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => smallvec::smallvec![p],
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => smallvec::smallvec![control1, control2, end],
                PathCommand::Close => SmallVec::new(),
            };
            points
        });

        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (
                Point::new(min.x.min(p.x), min.y.min(p.y)),
                Point::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::LineTo(_)))
            .count()
    }

    pub fn cubic_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::CubicTo { .. }))
            .count()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    /// Current pen position
    pub fn current(&self) -> Point {
        self.current
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn cubic_to(mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> Self {
        let end = Point::new(x, y);
        self.path.commands.push(PathCommand::CubicTo {
            control1: Point::new(c1x, c1y),
            control2: Point::new(c2x, c2y),
            end,
        });
        self.current = end;
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_ops() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        assert_eq!(a + b, Point::new(5.0, 8.0));
        assert_eq!(b - a, Point::new(3.0, 4.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(2.5, 4.0));
    }

    #[test]
    fn test_builder_tracks_current_point() {
        let builder = PathBuilder::new()
            .move_to(1.0, 1.0)
            .cubic_to(2.0, 1.0, 3.0, 2.0, 3.0, 3.0);
        assert_eq!(builder.current(), Point::new(3.0, 3.0));

        let path = builder.line_to(1.0, 1.0).close().build();
        assert_eq!(path.len(), 4);
        assert_eq!(path.line_count(), 1);
        assert_eq!(path.cubic_count(), 1);
    }

    #[test]
    fn test_bounds_include_control_points() {
        assert_eq!(Path::new().bounds(), None);

        let path = PathBuilder::new()
            .move_to(2.0, 1.0)
            .cubic_to(6.0, -1.0, 8.0, 3.0, 4.0, 5.0)
            .close()
            .build();
        assert_eq!(path.bounds(), Some(Rect::new(2.0, -1.0, 6.0, 6.0)));
    }

    #[test]
    fn test_closed_path() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .line_to(10.0, 10.0)
            .line_to(0.0, 0.0)
            .close()
            .build();

        assert_eq!(path.start_point(), Some(Point::ZERO));
        assert_eq!(path.last_point(), Some(Point::ZERO));
        assert!(path.is_closed(1e-6));
    }

    #[test]
    fn test_open_path_is_not_closed() {
        let unterminated = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .line_to(0.0, 0.0)
            .build();
        assert!(!unterminated.is_closed(1e-6));

        let gap = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(10.0, 0.0)
            .close()
            .build();
        assert!(!gap.is_closed(1e-6));

        assert!(!Path::new().is_closed(1e-6));
    }

    #[test]
    fn test_command_json_shape() {
        let json = serde_json::to_string(&PathCommand::LineTo(Point::new(1.0, 2.0))).unwrap();
        assert_eq!(json, r#"{"type":"line_to","x":1.0,"y":2.0}"#);

        let close: PathCommand = serde_json::from_str(r#"{"type":"close"}"#).unwrap();
        assert_eq!(close, PathCommand::Close);
    }
}
