//! BMP layout constants shared by the decoder and encoder.
//!
//! All multi-byte fields are little-endian.

/// `"BM"` file signature.
pub const SIGNATURE: [u8; 2] = *b"BM";

/// Size of the BITMAPFILEHEADER.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the BITMAPINFOHEADER.
pub const DIB_HEADER_SIZE: usize = 40;

/// Pixel array offset in files produced by the encoder.
pub const PIXEL_ARRAY_OFFSET: usize = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

/// Print resolution written by the encoder (72 DPI).
pub const RESOLUTION_PPM: u32 = 2835;

/// Bit depth written by the encoder.
pub const ENCODED_BITS_PER_PIXEL: u16 = 24;

/// BI_RGB (uncompressed).
pub const COMPRESSION_BI_RGB: u32 = 0;

// Field offsets within the file.
pub(crate) const OFFSET_FILE_SIZE: usize = 2;
pub(crate) const OFFSET_PIXEL_ARRAY: usize = 10;
pub(crate) const OFFSET_WIDTH: usize = 18;
pub(crate) const OFFSET_HEIGHT: usize = 22;
pub(crate) const OFFSET_BITS_PER_PIXEL: usize = 28;

/// Bytes needed to read every header field the decoder looks at.
pub(crate) const MIN_HEADER_LEN: usize = OFFSET_BITS_PER_PIXEL + 2;

/// Zero bytes appended to a row of `row_bytes` so it ends on a 4-byte boundary.
#[inline]
pub const fn row_padding(row_bytes: usize) -> usize {
    (4 - row_bytes % 4) % 4
}
