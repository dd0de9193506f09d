//! Shape error types

use thiserror::Error;

/// Errors produced while resolving or assembling a squircle outline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A resolved corner radius is negative; upstream radius resolution is broken
    #[error(
        "Corner size in px can't be negative (top_left = {top_left}, top_right = {top_right}, \
         bottom_right = {bottom_right}, bottom_left = {bottom_left})"
    )]
    NegativeRadius {
        top_left: f32,
        top_right: f32,
        bottom_right: f32,
        bottom_left: f32,
    },

    /// A resolved corner radius is NaN or infinite
    #[error("Corner size in px must be finite ({corner} = {value})")]
    NonFiniteRadius { corner: &'static str, value: f32 },

    /// Percentage corner size outside 0..=100
    #[error("Corner percent must be within 0..=100, got {0}")]
    PercentOutOfRange(f32),

    /// Textual corner size that is not `<n>%`, `<n>dp`, `<n>px` or `<n>`
    #[error("Invalid corner size '{0}', expected e.g. 25%, 16dp or 32px")]
    InvalidCornerSize(String),

    /// Density scale that is not a positive finite number
    #[error("Density must be positive and finite, got {0}")]
    InvalidDensity(f32),
}

/// Result type for shape operations
pub type Result<T> = std::result::Result<T, ShapeError>;
