//! Geometric transforms: quarter-turn rotation and nearest-neighbor enlarge.
//!
//! Like the color filters, every transform reads a source image and returns
//! a freshly allocated one; dimensions may change.
//!
//! # Coordinate System
//!
//! - Positions are (row, column), origin at the top-left corner
//! - One turn is a 90 degree clockwise rotation

mod enlarge;
mod rotation;

use thiserror::Error;

pub use enlarge::enlarge;
pub use rotation::{rotate, rotate_90, Rotation};

/// Rejected transform parameters.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// Enlarge scale factors must be at least 1.
    #[error("Invalid scale: x_scale ({x_scale}) and y_scale ({y_scale}) must be at least 1")]
    InvalidScale { x_scale: u32, y_scale: u32 },

    /// Rotation angles must be multiples of 90 degrees.
    #[error("Angle must be a multiple of 90 degrees (got {0})")]
    InvalidAngle(i32),

    /// Scaling factors must be finite.
    #[error("Invalid scaling factor: {0}")]
    InvalidFactor(f64),

    /// The output would not fit in memory addressing.
    #[error("Output too large: {width}x{height} scaled by {x_scale}x{y_scale}")]
    TooLarge {
        width: usize,
        height: usize,
        x_scale: u32,
        y_scale: u32,
    },
}
