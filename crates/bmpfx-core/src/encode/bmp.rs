//! BMP encoding.
//!
//! Always writes a 24-bit, uncompressed, single-plane bitmap with a
//! BITMAPINFOHEADER, 2835 px/m resolution and no palette.

use thiserror::Error;
use tracing::debug;

use crate::format::{
    row_padding, COMPRESSION_BI_RGB, DIB_HEADER_SIZE, ENCODED_BITS_PER_PIXEL, FILE_HEADER_SIZE,
    PIXEL_ARRAY_OFFSET, RESOLUTION_PPM, SIGNATURE,
};
use crate::pixel::Image;

/// Errors that can occur during BMP encoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The image does not fit the 32-bit size fields of the format.
    #[error("Image too large to encode as BMP: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    /// The output could not be opened or written.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Encode an image as a 24-bit BMP file.
///
/// Channel values outside 0..=255 are narrowed with two's-complement
/// truncation (300 becomes 44, -1 becomes 255).
///
/// # Returns
///
/// The complete file contents: 14-byte file header, 40-byte DIB header and
/// the bottom-up, row-padded pixel array.
///
/// # Errors
///
/// Returns `EncodeError::TooLarge` if the dimensions or file size overflow
/// the header's 32-bit fields.
pub fn encode_bmp(image: &Image) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = image.dimensions();
    let too_large = || EncodeError::TooLarge { width, height };

    let row_bytes = width.checked_mul(3).ok_or_else(too_large)?;
    let padding = row_padding(row_bytes);
    let array_bytes = (row_bytes + padding)
        .checked_mul(height)
        .ok_or_else(too_large)?;
    let file_size = array_bytes
        .checked_add(PIXEL_ARRAY_OFFSET)
        .ok_or_else(too_large)?;

    let file_size_field = u32::try_from(file_size).map_err(|_| too_large())?;
    let width_field = i32::try_from(width).map_err(|_| too_large())?;
    let height_field = i32::try_from(height).map_err(|_| too_large())?;

    debug!(width, height, padding, file_size, "encoding bitmap");

    let mut out = Vec::with_capacity(file_size);

    // BMP file header
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&file_size_field.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    out.extend_from_slice(&(PIXEL_ARRAY_OFFSET as u32).to_le_bytes());

    // DIB header (BITMAPINFOHEADER)
    out.extend_from_slice(&(DIB_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&width_field.to_le_bytes());
    out.extend_from_slice(&height_field.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&ENCODED_BITS_PER_PIXEL.to_le_bytes());
    out.extend_from_slice(&COMPRESSION_BI_RGB.to_le_bytes());
    out.extend_from_slice(&(array_bytes as u32).to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());

    debug_assert_eq!(out.len(), FILE_HEADER_SIZE + DIB_HEADER_SIZE);

    // Pixel array: bottom row first, BGR, zero padding per row
    for row in image.rows().rev() {
        for pixel in row {
            let [r, g, b] = pixel.to_rgb8();
            out.extend_from_slice(&[b, g, r]);
        }
        out.extend_from_slice(&[0u8; 3][..padding]);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_bmp, inspect_bmp};
    use crate::pixel::Pixel;

    fn le_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn le_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_encode_header_fields() {
        let img = Image::filled(3, 2, Pixel::gray(9)).unwrap();
        let bytes = encode_bmp(&img).unwrap();

        // 3 px * 3 = 9 bytes per row, padded to 12; 2 rows.
        assert_eq!(bytes.len(), 54 + 24);
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(le_u32(&bytes, 2), 78);
        assert_eq!(le_u16(&bytes, 6), 0);
        assert_eq!(le_u16(&bytes, 8), 0);
        assert_eq!(le_u32(&bytes, 10), 54);

        assert_eq!(le_u32(&bytes, 14), 40);
        assert_eq!(le_u32(&bytes, 18), 3);
        assert_eq!(le_u32(&bytes, 22), 2);
        assert_eq!(le_u16(&bytes, 26), 1);
        assert_eq!(le_u16(&bytes, 28), 24);
        assert_eq!(le_u32(&bytes, 30), 0);
        assert_eq!(le_u32(&bytes, 34), 24);
        assert_eq!(le_u32(&bytes, 38), 2835);
        assert_eq!(le_u32(&bytes, 42), 2835);
        assert_eq!(le_u32(&bytes, 46), 0);
        assert_eq!(le_u32(&bytes, 50), 0);
    }

    #[test]
    fn test_encode_pixel_order_and_padding() {
        // Top row: red, green. Bottom row: blue, white.
        let img = Image::from_rows(vec![
            vec![Pixel::RED, Pixel::GREEN],
            vec![Pixel::BLUE, Pixel::WHITE],
        ])
        .unwrap();
        let bytes = encode_bmp(&img).unwrap();

        // 2 px * 3 = 6 bytes per row + 2 padding.
        assert_eq!(
            &bytes[54..],
            &[
                255, 0, 0, 255, 255, 255, 0, 0, // bottom row, stored first
                0, 0, 255, 0, 255, 0, 0, 0, // top row
            ]
        );
    }

    #[test]
    fn test_encode_aligned_rows_have_no_padding() {
        let img = Image::filled(4, 1, Pixel::BLACK).unwrap();
        let bytes = encode_bmp(&img).unwrap();
        assert_eq!(bytes.len(), 54 + 12);
    }

    #[test]
    fn test_encode_wraps_out_of_range_channels() {
        let img = Image::filled(1, 1, Pixel::new(300, -1, 256)).unwrap();
        let bytes = encode_bmp(&img).unwrap();
        assert_eq!(&bytes[54..57], &[0, 255, 44]);
    }

    #[test]
    fn test_encoded_output_passes_own_validation() {
        for width in 1..=6 {
            let img = Image::filled(width, 3, Pixel::gray(1)).unwrap();
            let bytes = encode_bmp(&img).unwrap();
            let header = inspect_bmp(&bytes).unwrap();
            assert_eq!(header.file_size as usize, bytes.len());
        }
    }

    #[test]
    fn test_round_trip_small() {
        let img = Image::from_fn(5, 3, |row, col| {
            Pixel::new((row * 40) as i32, (col * 50) as i32, 200)
        })
        .unwrap();
        let decoded = decode_bmp(&encode_bmp(&img).unwrap()).unwrap();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::TooLarge {
            width: 70000,
            height: 70000,
        };
        assert_eq!(
            err.to_string(),
            "Image too large to encode as BMP: 70000x70000"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
