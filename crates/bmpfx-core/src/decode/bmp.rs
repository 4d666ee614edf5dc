//! BMP decoding.
//!
//! Reads the handful of header fields needed to locate the pixel array,
//! reconciles the declared file size against the layout they imply, and
//! unpacks bottom-up BGR rows into a top-down [`Image`].

use tracing::debug;

use super::{BmpHeader, DecodeError};
use crate::format::{
    MIN_HEADER_LEN, OFFSET_BITS_PER_PIXEL, OFFSET_FILE_SIZE, OFFSET_HEIGHT, OFFSET_PIXEL_ARRAY,
    OFFSET_WIDTH, SIGNATURE,
};
use crate::pixel::{Image, Pixel};

/// Parse and validate the header of a BMP file without decoding pixels.
///
/// # Errors
///
/// Returns `DecodeError::Truncated` if the header is incomplete,
/// `DecodeError::InvalidSignature` if the file does not start with `BM`,
/// `DecodeError::UnsupportedBitDepth` for anything but 24/32 bpp,
/// `DecodeError::InvalidDimensions` for non-positive width/height and
/// `DecodeError::InvalidFormat` if the declared file size does not equal
/// `pixel_offset + stride * height`.
pub fn inspect_bmp(bytes: &[u8]) -> Result<BmpHeader, DecodeError> {
    if bytes.len() < MIN_HEADER_LEN {
        return Err(DecodeError::Truncated {
            needed: MIN_HEADER_LEN,
            actual: bytes.len(),
        });
    }

    let signature = [bytes[0], bytes[1]];
    if signature != SIGNATURE {
        return Err(DecodeError::InvalidSignature(signature));
    }

    let header = BmpHeader {
        file_size: read_u32(bytes, OFFSET_FILE_SIZE),
        pixel_offset: read_u32(bytes, OFFSET_PIXEL_ARRAY),
        width: read_u32(bytes, OFFSET_WIDTH) as i32,
        height: read_u32(bytes, OFFSET_HEIGHT) as i32,
        bits_per_pixel: read_u16(bytes, OFFSET_BITS_PER_PIXEL),
    };

    if !matches!(header.bits_per_pixel, 24 | 32) {
        return Err(DecodeError::UnsupportedBitDepth(header.bits_per_pixel));
    }

    if header.width <= 0 || header.height <= 0 {
        return Err(DecodeError::InvalidDimensions {
            width: header.width,
            height: header.height,
        });
    }

    // A layout too large for 64 bits can never match a 32-bit size field.
    match header.expected_file_size() {
        Some(expected) if expected == u64::from(header.file_size) => {}
        expected => {
            return Err(DecodeError::InvalidFormat {
                declared: header.file_size,
                expected: expected.unwrap_or(u64::MAX),
            })
        }
    }

    Ok(header)
}

/// Decode a BMP file into an [`Image`].
///
/// # Arguments
///
/// * `bytes` - Raw BMP file bytes
///
/// # Returns
///
/// An `Image` with row 0 at the visual top. For 32-bit input the fourth
/// byte of each pixel is ignored.
///
/// # Errors
///
/// Any error from [`inspect_bmp`], or `DecodeError::Truncated` if the pixel
/// array runs past the end of `bytes`. No partially decoded image is ever
/// returned.
pub fn decode_bmp(bytes: &[u8]) -> Result<Image, DecodeError> {
    let header = inspect_bmp(bytes)?;

    // The size check passed, so the whole layout fits in the declared
    // 32-bit file size.
    let needed = header.file_size as usize;
    if bytes.len() < needed {
        return Err(DecodeError::Truncated {
            needed,
            actual: bytes.len(),
        });
    }

    let width = header.width as usize;
    let height = header.height as usize;
    let start = header.pixel_offset as usize;
    let stride = header.stride() as usize;
    let bpp = header.bytes_per_pixel();

    debug!(
        width,
        height,
        bits_per_pixel = header.bits_per_pixel,
        padding = header.row_padding(),
        "decoding bitmap"
    );

    // Stored rows run bottom-to-top, so visual row `row` is stored row
    // `height - 1 - row`.
    let image = Image::generate(width, height, |row, col| {
        let pos = start + (height - 1 - row) * stride + col * bpp;
        let (b, g, r) = (bytes[pos], bytes[pos + 1], bytes[pos + 2]);
        Pixel::from([r, g, b])
    });

    Ok(image)
}

#[inline]
fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

#[inline]
fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}
