//! Pixel grid data model.
//!
//! An [`Image`] is a rectangular grid of [`Pixel`]s stored row-major in a
//! single buffer, so rows can never differ in length. Row 0 is the visual
//! top of the image.
//!
//! Channels are `i32` rather than `u8`: several filters intentionally produce
//! values outside 0..=255 and the grid keeps them as-is. Narrowing to bytes
//! only happens in the encoder.

use thiserror::Error;

/// Maximum channel intensity for an 8-bit channel.
pub const CHANNEL_MAX: i32 = 255;

/// Errors from constructing an [`Image`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// Width or height is zero.
    #[error("Image must have at least one row and one column (got {width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// A row's length differs from the first row's.
    #[error("Row {row} has {actual} pixels, expected {expected}")]
    JaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Pixel buffer length does not match width * height.
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },
}

/// A single RGB pixel. No alpha.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(CHANNEL_MAX, CHANNEL_MAX, CHANNEL_MAX);
    pub const RED: Pixel = Pixel::new(CHANNEL_MAX, 0, 0);
    pub const GREEN: Pixel = Pixel::new(0, CHANNEL_MAX, 0);
    pub const BLUE: Pixel = Pixel::new(0, 0, CHANNEL_MAX);

    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Build a pixel with the same value in every channel.
    pub const fn gray(value: i32) -> Self {
        Self::new(value, value, value)
    }

    /// Sum of the three channels, widened so extreme channels cannot overflow.
    #[inline]
    pub fn sum(self) -> i64 {
        i64::from(self.red) + i64::from(self.green) + i64::from(self.blue)
    }

    /// Integer mean of the three channels (truncating).
    #[inline]
    pub fn average(self) -> i32 {
        // The mean lies between the smallest and largest channel.
        (self.sum() / 3) as i32
    }

    /// Apply `f` to every channel.
    #[inline]
    pub fn map(self, mut f: impl FnMut(i32) -> i32) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    /// Narrow each channel to a byte, wrapping like a C `unsigned char` store.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [self.red as u8, self.green as u8, self.blue as u8]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }
}

/// A rectangular, non-empty grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Create an image from a row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        let expected = width.saturating_mul(height);
        if pixels.len() != expected {
            return Err(ImageError::PixelCountMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image from a list of rows, top row first.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, ImageError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        let mut pixels = Vec::with_capacity(width * height);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != width {
                return Err(ImageError::JaggedRows {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            pixels.extend(cells);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an image where every pixel has the same value.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        Ok(Self::generate(width, height, |_, _| pixel))
    }

    /// Create an image by evaluating `f(row, col)` for every position.
    pub fn from_fn(
        width: usize,
        height: usize,
        f: impl FnMut(usize, usize) -> Pixel,
    ) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        Ok(Self::generate(width, height, f))
    }

    /// Build a grid without validating dimensions.
    ///
    /// Callers derive `width`/`height` from an existing image, so both are
    /// non-zero.
    pub(crate) fn generate(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Column count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixel at (row, col). Panics if out of bounds, like slice indexing.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        self.pixels[row * self.width + col]
    }

    /// Pixel at (row, col), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixel(row, col))
        } else {
            None
        }
    }

    /// One row of pixels, left to right.
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Pixel> {
        self.pixels.chunks_exact(self.width)
    }

    /// Row-major pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Apply a per-pixel function, producing a new image of the same size.
    pub fn map_pixels(&self, f: impl FnMut(Pixel) -> Pixel) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Pack into interleaved RGB bytes, narrowing each channel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgb8()).collect()
    }

    /// Build an image from interleaved RGB bytes (3 bytes per pixel).
    pub fn from_rgb8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, ImageError> {
        check_dimensions(width, height)?;
        if bytes.len() % 3 != 0 || bytes.len() / 3 != width.saturating_mul(height) {
            return Err(ImageError::PixelCountMismatch {
                expected: width.saturating_mul(height),
                actual: bytes.len() / 3,
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Pixel::from([c[0], c[1], c[2]]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<(), ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::EmptyImage { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_average_truncates() {
        assert_eq!(Pixel::new(0, 0, 255).average(), 85);
        assert_eq!(Pixel::new(1, 1, 0).average(), 0);
        assert_eq!(Pixel::new(255, 255, 255).sum(), 765);
    }

    #[test]
    fn test_pixel_sum_extreme_channels() {
        assert_eq!(Pixel::gray(i32::MAX).sum(), 3 * i32::MAX as i64);
        assert_eq!(Pixel::gray(i32::MAX).average(), i32::MAX);
        assert_eq!(Pixel::gray(i32::MIN).average(), i32::MIN);
        assert_eq!(Pixel::new(i32::MAX, i32::MIN, 0).average(), 0);
    }

    #[test]
    fn test_pixel_to_rgb8_wraps() {
        assert_eq!(Pixel::new(300, -1, 128).to_rgb8(), [44, 255, 128]);
    }

    #[test]
    fn test_from_rows_layout() {
        let img = Image::from_rows(vec![
            vec![Pixel::RED, Pixel::GREEN, Pixel::BLUE],
            vec![Pixel::BLACK, Pixel::WHITE, Pixel::gray(7)],
        ])
        .unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.pixel(0, 2), Pixel::BLUE);
        assert_eq!(img.pixel(1, 1), Pixel::WHITE);
        assert_eq!(img.row(1), &[Pixel::BLACK, Pixel::WHITE, Pixel::gray(7)]);
        assert_eq!(img.get(2, 0), None);
        assert_eq!(img.get(0, 3), None);
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let err = Image::from_rows(vec![vec![Pixel::RED; 3], vec![Pixel::RED; 2]]).unwrap_err();
        assert_eq!(
            err,
            ImageError::JaggedRows {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_empty_images_rejected() {
        assert!(matches!(
            Image::from_rows(vec![]),
            Err(ImageError::EmptyImage { .. })
        ));
        assert!(matches!(
            Image::from_rows(vec![vec![]]),
            Err(ImageError::EmptyImage { .. })
        ));
        assert!(matches!(
            Image::filled(0, 5, Pixel::BLACK),
            Err(ImageError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_from_pixels_count_mismatch() {
        let err = Image::from_pixels(2, 2, vec![Pixel::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            ImageError::PixelCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_from_fn_row_major() {
        let img = Image::from_fn(3, 2, |row, col| Pixel::gray((row * 10 + col) as i32)).unwrap();
        let values: Vec<i32> = img.pixels().iter().map(|p| p.red).collect();
        assert_eq!(values, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(img.rows().count(), 2);
    }

    #[test]
    fn test_rgb8_conversion() {
        let bytes = [1u8, 2, 3, 4, 5, 6];
        let img = Image::from_rgb8(2, 1, &bytes).unwrap();
        assert_eq!(img.pixel(0, 1), Pixel::new(4, 5, 6));
        assert_eq!(img.to_rgb8(), bytes.to_vec());

        assert!(Image::from_rgb8(2, 1, &bytes[..5]).is_err());
    }
}
