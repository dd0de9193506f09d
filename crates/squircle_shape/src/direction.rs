//! Layout direction and logical corner naming
//!
//! Corners are specified relative to the reading direction (`start`/`end`) and
//! only mapped onto physical corners (`left`/`right`) as the last step before
//! path assembly.

use serde::{Deserialize, Serialize};
use squircle_paint::CornerRadius;

/// Horizontal layout direction of the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutDirection {
    /// Left-to-right: start is left
    #[default]
    Ltr,
    /// Right-to-left: start is right
    Rtl,
}

impl LayoutDirection {
    pub fn is_ltr(self) -> bool {
        self == LayoutDirection::Ltr
    }

    pub fn flipped(self) -> Self {
        match self {
            LayoutDirection::Ltr => LayoutDirection::Rtl,
            LayoutDirection::Rtl => LayoutDirection::Ltr,
        }
    }
}

/// Per-corner values named relative to the layout direction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LogicalCorners<T> {
    pub top_start: T,
    pub top_end: T,
    pub bottom_start: T,
    pub bottom_end: T,
}

impl<T> LogicalCorners<T> {
    pub const fn new(top_start: T, top_end: T, bottom_start: T, bottom_end: T) -> Self {
        Self {
            top_start,
            top_end,
            bottom_start,
            bottom_end,
        }
    }

    /// Apply a fallible conversion to every corner
    pub fn try_map<U, E>(self, mut f: impl FnMut(T) -> Result<U, E>) -> Result<LogicalCorners<U>, E> {
        Ok(LogicalCorners {
            top_start: f(self.top_start)?,
            top_end: f(self.top_end)?,
            bottom_start: f(self.bottom_start)?,
            bottom_end: f(self.bottom_end)?,
        })
    }

    /// Swap start and end on both rows
    pub fn mirrored(self) -> Self {
        Self {
            top_start: self.top_end,
            top_end: self.top_start,
            bottom_start: self.bottom_end,
            bottom_end: self.bottom_start,
        }
    }
}

impl LogicalCorners<f32> {
    pub fn sum(&self) -> f32 {
        self.top_start + self.top_end + self.bottom_start + self.bottom_end
    }

    /// Relabel onto physical corners.
    ///
    /// Ltr maps start to left and end to right; Rtl swaps every start/end pair.
    pub fn resolve(self, direction: LayoutDirection) -> CornerRadius {
        match direction {
            LayoutDirection::Ltr => CornerRadius {
                top_left: self.top_start,
                top_right: self.top_end,
                bottom_right: self.bottom_end,
                bottom_left: self.bottom_start,
            },
            LayoutDirection::Rtl => CornerRadius {
                top_left: self.top_end,
                top_right: self.top_start,
                bottom_right: self.bottom_start,
                bottom_left: self.bottom_end,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltr_resolution() {
        let corners = LogicalCorners::new(1.0, 2.0, 3.0, 4.0);
        let physical = corners.resolve(LayoutDirection::Ltr);

        assert_eq!(physical.top_left, 1.0);
        assert_eq!(physical.top_right, 2.0);
        assert_eq!(physical.bottom_left, 3.0);
        assert_eq!(physical.bottom_right, 4.0);
    }

    #[test]
    fn test_rtl_resolution_swaps_start_and_end() {
        let corners = LogicalCorners::new(1.0, 2.0, 3.0, 4.0);
        let physical = corners.resolve(LayoutDirection::Rtl);

        assert_eq!(physical.top_left, 2.0);
        assert_eq!(physical.top_right, 1.0);
        assert_eq!(physical.bottom_left, 4.0);
        assert_eq!(physical.bottom_right, 3.0);
    }

    #[test]
    fn test_mirror_equivalence() {
        let corners = LogicalCorners::new(1.0, 2.0, 3.0, 4.0);
        for direction in [LayoutDirection::Ltr, LayoutDirection::Rtl] {
            assert_eq!(
                corners.resolve(direction),
                corners.mirrored().resolve(direction.flipped())
            );
        }
    }

    #[test]
    fn test_try_map_short_circuits() {
        let corners = LogicalCorners::new(1, 2, 3, 4);
        let doubled: Result<_, ()> = corners.try_map(|v| Ok(v * 2));
        assert_eq!(doubled, Ok(LogicalCorners::new(2, 4, 6, 8)));

        let failed = corners.try_map(|v| if v == 3 { Err(v) } else { Ok(v) });
        assert_eq!(failed, Err(3));
    }

    #[test]
    fn test_direction_serde() {
        let rtl: LayoutDirection = serde_json::from_str("\"rtl\"").unwrap();
        assert_eq!(rtl, LayoutDirection::Rtl);
        assert!(!rtl.is_ltr());
        assert_eq!(LayoutDirection::default(), LayoutDirection::Ltr);
    }
}
