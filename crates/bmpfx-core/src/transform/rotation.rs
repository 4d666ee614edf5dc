//! Quarter-turn rotation.
//!
//! A single clockwise turn maps source pixel `(R - 1 - j, i)` to output
//! position `(i, j)`, where `R` is the source row count. The output has the
//! source's width as its height and vice versa. Multi-turn rotations are
//! compositions of that single turn.

use super::TransformError;
use crate::pixel::Image;

/// A rotation by a whole number of clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rotation {
    /// Normalized to 0..=3.
    turns: u8,
}

impl Rotation {
    /// Rotation by `turns` quarter turns. Negative counts turn
    /// counter-clockwise, so -1 is the same as 3.
    pub fn from_turns(turns: i32) -> Self {
        Self {
            turns: turns.rem_euclid(4) as u8,
        }
    }

    /// Rotation by an angle in degrees.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidAngle` unless `degrees` is a multiple
    /// of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self, TransformError> {
        if degrees % 90 != 0 {
            return Err(TransformError::InvalidAngle(degrees));
        }
        Ok(Self::from_turns(degrees / 90))
    }

    /// Clockwise quarter turns, 0..=3.
    pub fn turns(self) -> u8 {
        self.turns
    }

    /// Apply the rotation, producing a new image.
    pub fn apply(self, image: &Image) -> Image {
        match self.turns {
            0 => image.clone(),
            1 => rotate_90(image),
            2 => rotate_90(&rotate_90(image)),
            _ => rotate_90(&rotate_90(&rotate_90(image))),
        }
    }
}

/// Rotate an image 90 degrees clockwise.
///
/// # Returns
///
/// A `height x width` image: the source's left column becomes the top row.
pub fn rotate_90(image: &Image) -> Image {
    let (width, height) = image.dimensions();
    Image::generate(height, width, |i, j| image.pixel(height - 1 - j, i))
}

/// Rotate an image by `turns` clockwise quarter turns.
///
/// `turns` is reduced modulo 4 (negative values rotate counter-clockwise).
/// Zero turns returns a copy.
pub fn rotate(image: &Image, turns: i32) -> Image {
    Rotation::from_turns(turns).apply(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    /// Each pixel encodes its own position: red = row, green = col.
    fn test_image(width: usize, height: usize) -> Image {
        Image::from_fn(width, height, |row, col| Pixel::new(row as i32, col as i32, 0)).unwrap()
    }

    #[test]
    fn test_rotate_90_dimensions() {
        let result = rotate_90(&test_image(4, 2));
        assert_eq!(result.dimensions(), (2, 4));
    }

    #[test]
    fn test_rotate_90_clockwise() {
        // A B
        // C D
        let (a, b, c, d) = (Pixel::gray(1), Pixel::gray(2), Pixel::gray(3), Pixel::gray(4));
        let img = Image::from_rows(vec![vec![a, b], vec![c, d]]).unwrap();

        // C A
        // D B
        let expected = Image::from_rows(vec![vec![c, a], vec![d, b]]).unwrap();
        assert_eq!(rotate_90(&img), expected);
    }

    #[test]
    fn test_rotate_90_formula() {
        let img = test_image(3, 5);
        let result = rotate_90(&img);
        let rows = img.height();
        for i in 0..result.height() {
            for j in 0..result.width() {
                assert_eq!(result.pixel(i, j), img.pixel(rows - 1 - j, i));
            }
        }
    }

    #[test]
    fn test_rotate_90_single_row() {
        let img = Image::from_rows(vec![vec![Pixel::RED, Pixel::GREEN, Pixel::BLUE]]).unwrap();
        let result = rotate_90(&img);
        assert_eq!(result.dimensions(), (1, 3));
        assert_eq!(result.pixel(0, 0), Pixel::RED);
        assert_eq!(result.pixel(2, 0), Pixel::BLUE);
    }

    #[test]
    fn test_rotate_zero_turns_is_copy() {
        let img = test_image(3, 2);
        assert_eq!(rotate(&img, 0), img);
        assert_eq!(rotate(&img, 4), img);
        assert_eq!(rotate(&img, -8), img);
    }

    #[test]
    fn test_rotate_turn_counts() {
        let img = test_image(3, 2);
        assert_eq!(rotate(&img, 1), rotate_90(&img));
        assert_eq!(rotate(&img, 2), rotate_90(&rotate_90(&img)));
        assert_eq!(rotate(&img, 3), rotate_90(&rotate_90(&rotate_90(&img))));
        assert_eq!(rotate(&img, 5), rotate(&img, 1));
        assert_eq!(rotate(&img, -1), rotate(&img, 3));
    }

    #[test]
    fn test_rotate_180_reverses() {
        let img = test_image(3, 2);
        let result = rotate(&img, 2);
        assert_eq!(result.dimensions(), (3, 2));
        assert_eq!(result.pixel(0, 0), img.pixel(1, 2));
        assert_eq!(result.pixel(1, 2), img.pixel(0, 0));
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0).unwrap().turns(), 0);
        assert_eq!(Rotation::from_degrees(90).unwrap().turns(), 1);
        assert_eq!(Rotation::from_degrees(450).unwrap().turns(), 1);
        assert_eq!(Rotation::from_degrees(-90).unwrap().turns(), 3);
        assert_eq!(
            Rotation::from_degrees(45),
            Err(TransformError::InvalidAngle(45))
        );
    }

}
