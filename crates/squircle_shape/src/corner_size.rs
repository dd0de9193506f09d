//! Corner size specifications
//!
//! A corner is given either as a percentage of the shape's smaller dimension,
//! as a density-independent length, or in raw pixels. Everything downstream
//! works in pixels, so a [`CornerSize`] is resolved once per outline.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use squircle_paint::Size;

use crate::error::{Result, ShapeError};

/// Radius of a single corner
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerSize {
    /// Percent (0..=100) of the smaller of width and height
    Percent(f32),
    /// Density-independent length, multiplied by the density scale
    Dp(f32),
    /// Raw pixels
    Px(f32),
}

impl CornerSize {
    pub const ZERO: CornerSize = CornerSize::Px(0.0);

    /// Percentage corner, rejecting values outside 0..=100
    pub fn percent(percent: f32) -> Result<Self> {
        check_percent(percent)?;
        Ok(CornerSize::Percent(percent))
    }

    pub const fn dp(value: f32) -> Self {
        CornerSize::Dp(value)
    }

    pub const fn px(value: f32) -> Self {
        CornerSize::Px(value)
    }

    /// Resolve to pixels for a shape of `size` on a display with scale `density`
    pub fn to_px(&self, size: Size, density: f32) -> Result<f32> {
        match *self {
            CornerSize::Percent(percent) => {
                check_percent(percent)?;
                Ok(size.min_dimension() * (percent / 100.0))
            }
            CornerSize::Dp(value) => {
                if !(density.is_finite() && density > 0.0) {
                    return Err(ShapeError::InvalidDensity(density));
                }
                Ok(value * density)
            }
            CornerSize::Px(value) => Ok(value),
        }
    }

    fn key(&self) -> (u8, u32) {
        match *self {
            CornerSize::Percent(v) => (0, float_key(v)),
            CornerSize::Dp(v) => (1, float_key(v)),
            CornerSize::Px(v) => (2, float_key(v)),
        }
    }
}

impl Default for CornerSize {
    fn default() -> Self {
        CornerSize::ZERO
    }
}

/// Value equality over the unit and the amount; NaN equals NaN and -0 equals 0
impl PartialEq for CornerSize {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CornerSize {}

impl Hash for CornerSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for CornerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerSize::Percent(v) => write!(f, "CornerSize(size = {}%)", v),
            CornerSize::Dp(v) => write!(f, "CornerSize(size = {}.dp)", v),
            CornerSize::Px(v) => write!(f, "CornerSize(size = {}.px)", v),
        }
    }
}

/// Parses `25%`, `16dp`, `32px`; a bare number is pixels
impl FromStr for CornerSize {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let invalid = || ShapeError::InvalidCornerSize(s.to_string());
        let number = |value: &str| value.trim().parse::<f32>().map_err(|_| invalid());

        if let Some(value) = text.strip_suffix('%') {
            CornerSize::percent(number(value)?)
        } else if let Some(value) = text.strip_suffix("dp") {
            Ok(CornerSize::Dp(number(value)?))
        } else if let Some(value) = text.strip_suffix("px") {
            Ok(CornerSize::Px(number(value)?))
        } else {
            Ok(CornerSize::Px(number(text)?))
        }
    }
}

fn check_percent(percent: f32) -> Result<()> {
    if (0.0..=100.0).contains(&percent) {
        Ok(())
    } else {
        Err(ShapeError::PercentOutOfRange(percent))
    }
}

/// Bit pattern used for equality and hashing of float fields
pub(crate) fn float_key(value: f32) -> u32 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f32::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_percent_resolves_against_min_dimension() {
        let size = Size::new(200.0, 80.0);
        let corner = CornerSize::percent(25.0).unwrap();
        assert_eq!(corner.to_px(size, 3.0).unwrap(), 20.0);
        assert_eq!(CornerSize::percent(100.0).unwrap().to_px(size, 1.0).unwrap(), 80.0);
    }

    #[test]
    fn test_percent_range() {
        assert_eq!(
            CornerSize::percent(120.0),
            Err(ShapeError::PercentOutOfRange(120.0))
        );
        assert!(CornerSize::percent(-1.0).is_err());
        assert!(CornerSize::percent(f32::NAN).is_err());
        assert!(CornerSize::Percent(101.0)
            .to_px(Size::new(10.0, 10.0), 1.0)
            .is_err());
    }

    #[test]
    fn test_dp_uses_density() {
        let size = Size::new(10.0, 10.0);
        assert_eq!(CornerSize::dp(16.0).to_px(size, 2.5).unwrap(), 40.0);
        assert_eq!(
            CornerSize::dp(16.0).to_px(size, 0.0),
            Err(ShapeError::InvalidDensity(0.0))
        );
        assert_eq!(CornerSize::px(16.0).to_px(size, 0.0).unwrap(), 16.0);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(CornerSize::px(4.0), CornerSize::px(4.0));
        assert_ne!(CornerSize::px(4.0), CornerSize::dp(4.0));
        assert_eq!(CornerSize::px(0.0), CornerSize::px(-0.0));
        assert_eq!(CornerSize::px(f32::NAN), CornerSize::px(f32::NAN));

        let set: HashSet<_> = [CornerSize::px(0.0), CornerSize::px(-0.0), CornerSize::dp(1.0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_serde_shape() {
        let corner: CornerSize = serde_json::from_str(r#"{"dp": 12}"#).unwrap();
        assert_eq!(corner, CornerSize::dp(12.0));
        assert_eq!(
            serde_json::to_string(&CornerSize::Percent(50.0)).unwrap(),
            r#"{"percent":50.0}"#
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("25%".parse::<CornerSize>().unwrap(), CornerSize::Percent(25.0));
        assert_eq!(" 16dp ".parse::<CornerSize>().unwrap(), CornerSize::Dp(16.0));
        assert_eq!("32px".parse::<CornerSize>().unwrap(), CornerSize::Px(32.0));
        assert_eq!("7.5".parse::<CornerSize>().unwrap(), CornerSize::Px(7.5));
        assert_eq!(
            "150%".parse::<CornerSize>(),
            Err(ShapeError::PercentOutOfRange(150.0))
        );
        assert_eq!(
            "big".parse::<CornerSize>(),
            Err(ShapeError::InvalidCornerSize("big".to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(CornerSize::dp(8.0).to_string(), "CornerSize(size = 8.dp)");
        assert_eq!(CornerSize::Percent(50.0).to_string(), "CornerSize(size = 50%)");
    }
}
