//! Nearest-neighbor enlargement by integer factors.

use std::mem::size_of;

use super::TransformError;
use crate::pixel::{Image, Pixel};

/// Enlarge an image by whole-number factors.
///
/// Every source pixel becomes an `x_scale` by `y_scale` block:
/// `out[row][col] = src[row / y_scale][col / x_scale]`.
///
/// # Returns
///
/// A `(width * x_scale) x (height * y_scale)` image.
///
/// # Errors
///
/// Returns `TransformError::InvalidScale` if either factor is zero and
/// `TransformError::TooLarge` if the output would not fit in a single
/// allocation.
pub fn enlarge(image: &Image, x_scale: u32, y_scale: u32) -> Result<Image, TransformError> {
    if x_scale == 0 || y_scale == 0 {
        return Err(TransformError::InvalidScale { x_scale, y_scale });
    }

    let (width, height) = image.dimensions();
    let too_large = || TransformError::TooLarge {
        width,
        height,
        x_scale,
        y_scale,
    };
    let new_width = width
        .checked_mul(x_scale as usize)
        .ok_or_else(too_large)?;
    let new_height = height
        .checked_mul(y_scale as usize)
        .ok_or_else(too_large)?;
    let bytes = new_width
        .checked_mul(new_height)
        .and_then(|count| count.checked_mul(size_of::<Pixel>()))
        .ok_or_else(too_large)?;
    if bytes > isize::MAX as usize {
        return Err(too_large());
    }

    let (xs, ys) = (x_scale as usize, y_scale as usize);
    Ok(Image::generate(new_width, new_height, |row, col| {
        image.pixel(row / ys, col / xs)
    }))
}
