//! Per-pixel color filters.
//!
//! Every filter reads a source [`Image`] and returns a new one of the same
//! size. Channel arithmetic is done on the `i32` channels (with `f64`
//! intermediates where a factor is involved) and truncated toward zero when
//! stored. Results are **not** clamped: a factor above 1 in [`lighten`], or
//! a pixel far from the center in [`vignette`], can leave channels outside
//! 0..=255. The encoder narrows them when the image is written.
//!
//! ## Filters
//! 1. Vignette
//! 2. Clarendon
//! 3. Grayscale
//! 4. High contrast
//! 5. Lighten
//! 6. Darken
//! 7. Posterize (black, white, red, green, blue)

use crate::pixel::{Image, Pixel, CHANNEL_MAX};
use crate::transform::TransformError;

/// Clarendon treats pixels whose average is at least this as highlights.
pub const CLARENDON_HIGHLIGHT_THRESHOLD: i32 = 170;

/// Clarendon treats pixels whose average is below this as shadows.
pub const CLARENDON_SHADOW_THRESHOLD: i32 = 90;

/// High contrast maps averages at or above this to white.
pub const HIGH_CONTRAST_THRESHOLD: i32 = CHANNEL_MAX / 2;

/// Posterize maps channel sums at or above this to white.
pub const POSTERIZE_WHITE_SUM: i64 = 550;

/// Posterize maps channel sums at or below this to black.
pub const POSTERIZE_BLACK_SUM: i64 = 150;

/// Darken the image toward its edges.
///
/// Each pixel is scaled by `(height - d) / height`, where `d` is the
/// Euclidean distance from the pixel to the center `(width / 2, height / 2)`
/// (integer-truncated center). Pixels further than `height` from the center
/// get a negative scale and end up with negative channels.
pub fn vignette(image: &Image) -> Image {
    let (width, height) = image.dimensions();
    let center_col = (width / 2) as f64;
    let center_row = (height / 2) as f64;
    let rows = height as f64;

    Image::generate(width, height, |row, col| {
        let dx = col as f64 - center_col;
        let dy = row as f64 - center_row;
        let distance = (dx * dx + dy * dy).sqrt();
        let scale = (rows - distance) / rows;
        image.pixel(row, col).map(|c| scale_channel(c, scale))
    })
}

/// Lighten highlights and darken shadows.
///
/// * average >= 170: `255 - (255 - c) * factor`
/// * average < 90: `c * factor`
/// * otherwise unchanged
///
/// # Errors
///
/// Returns `TransformError::InvalidFactor` if `factor` is NaN or infinite.
pub fn clarendon(image: &Image, factor: f64) -> Result<Image, TransformError> {
    check_factor(factor)?;
    Ok(image.map_pixels(|p| {
        let average = p.average();
        if average >= CLARENDON_HIGHLIGHT_THRESHOLD {
            p.map(|c| lighten_channel(c, factor))
        } else if average < CLARENDON_SHADOW_THRESHOLD {
            p.map(|c| scale_channel(c, factor))
        } else {
            p
        }
    }))
}

/// Replace every channel with the integer mean of the three.
pub fn grayscale(image: &Image) -> Image {
    image.map_pixels(|p| Pixel::gray(p.average()))
}

/// Threshold to pure black or pure white at an average of 127.
pub fn high_contrast(image: &Image) -> Image {
    image.map_pixels(|p| {
        if p.average() >= HIGH_CONTRAST_THRESHOLD {
            Pixel::WHITE
        } else {
            Pixel::BLACK
        }
    })
}

/// Move every channel toward white: `255 - (255 - c) * factor`.
///
/// # Errors
///
/// Returns `TransformError::InvalidFactor` if `factor` is NaN or infinite.
pub fn lighten(image: &Image, factor: f64) -> Result<Image, TransformError> {
    check_factor(factor)?;
    Ok(image.map_pixels(|p| p.map(|c| lighten_channel(c, factor))))
}

/// Scale every channel: `c * factor`.
///
/// # Errors
///
/// Returns `TransformError::InvalidFactor` if `factor` is NaN or infinite.
pub fn darken(image: &Image, factor: f64) -> Result<Image, TransformError> {
    check_factor(factor)?;
    Ok(image.map_pixels(|p| p.map(|c| scale_channel(c, factor))))
}

/// Reduce the image to black, white, red, green and blue.
///
/// Bright pixels (sum >= 550) become white and dark ones (sum <= 150)
/// black. Everything else takes the pure color of its dominant channel,
/// see [`dominant_color`].
pub fn posterize(image: &Image) -> Image {
    image.map_pixels(|p| {
        let sum = p.sum();
        if sum >= POSTERIZE_WHITE_SUM {
            Pixel::WHITE
        } else if sum <= POSTERIZE_BLACK_SUM {
            Pixel::BLACK
        } else {
            dominant_color(p)
        }
    })
}

/// Pure red, green or blue for the largest channel.
///
/// Ties go to red, then green: (100, 100, 50) is red and (50, 100, 100)
/// is green.
pub fn dominant_color(p: Pixel) -> Pixel {
    if p.red >= p.green && p.red >= p.blue {
        Pixel::RED
    } else if p.green >= p.blue {
        Pixel::GREEN
    } else {
        Pixel::BLUE
    }
}

#[inline]
fn scale_channel(c: i32, factor: f64) -> i32 {
    (c as f64 * factor) as i32
}

#[inline]
fn lighten_channel(c: i32, factor: f64) -> i32 {
    let max = CHANNEL_MAX as f64;
    (max - (max - c as f64) * factor) as i32
}

fn check_factor(factor: f64) -> Result<(), TransformError> {
    if factor.is_finite() {
        Ok(())
    } else {
        Err(TransformError::InvalidFactor(factor))
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
