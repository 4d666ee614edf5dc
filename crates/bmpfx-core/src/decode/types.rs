//! Core types for BMP decoding.

use thiserror::Error;

use crate::format::row_padding;

/// Error types for BMP decoding operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The declared file size does not match the size computed from the header.
    ///
    /// `expected` is `u64::MAX` when the layout does not fit in 64 bits.
    #[error("Invalid bitmap: header declares {declared} bytes but layout requires {expected}")]
    InvalidFormat { declared: u32, expected: u64 },

    /// The first two bytes are not `BM`.
    #[error("Not a bitmap file: bad signature {0:02x?}")]
    InvalidSignature([u8; 2]),

    /// Only 24- and 32-bit uncompressed bitmaps are supported.
    #[error("Unsupported bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// Width or height is zero or negative.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// The input ends before the header or pixel array does.
    #[error("Truncated bitmap: needed {needed} bytes, got {actual}")]
    Truncated { needed: usize, actual: usize },

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Header fields read from a bitmap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    /// Total file size declared at offset 2.
    pub file_size: u32,
    /// Start of the pixel array, declared at offset 10.
    pub pixel_offset: u32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels. Positive means rows are stored bottom-up.
    pub height: i32,
    /// Bits per pixel (24 or 32).
    pub bits_per_pixel: u16,
}

impl BmpHeader {
    /// Bytes occupied by one pixel in the pixel array.
    pub fn bytes_per_pixel(&self) -> usize {
        (self.bits_per_pixel / 8) as usize
    }

    /// Bytes of pixel data in one row, excluding padding.
    ///
    /// Computed in 64 bits: a 32-bit width times four bytes does not fit a
    /// 32-bit `usize`.
    pub fn row_bytes(&self) -> u64 {
        u64::from(self.width.max(0).unsigned_abs()) * self.bytes_per_pixel() as u64
    }

    /// Zero bytes after each row.
    pub fn row_padding(&self) -> usize {
        row_padding((self.row_bytes() % 4) as usize)
    }

    /// Bytes from the start of one stored row to the next.
    pub fn stride(&self) -> u64 {
        self.row_bytes() + self.row_padding() as u64
    }

    /// File size implied by the offset, dimensions and bit depth.
    ///
    /// Returns `None` if the size does not fit in a `u64`.
    pub fn expected_file_size(&self) -> Option<u64> {
        self.stride()
            .checked_mul(u64::from(self.height.max(0).unsigned_abs()))?
            .checked_add(u64::from(self.pixel_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(width: i32, height: i32, bits_per_pixel: u16) -> BmpHeader {
        BmpHeader {
            file_size: 0,
            pixel_offset: 54,
            width,
            height,
            bits_per_pixel,
        }
    }

    #[test]
    fn test_layout_24bit() {
        let h = header(3, 2, 24);
        assert_eq!(h.bytes_per_pixel(), 3);
        assert_eq!(h.row_bytes(), 9);
        assert_eq!(h.row_padding(), 3);
        assert_eq!(h.stride(), 12);
        assert_eq!(h.expected_file_size(), Some(54 + 24));
    }

    #[test]
    fn test_layout_32bit_never_padded() {
        for width in 1..8 {
            assert_eq!(header(width, 1, 32).row_padding(), 0);
        }
    }

    #[test]
    fn test_layout_aligned_width() {
        let h = header(4, 4, 24);
        assert_eq!(h.row_padding(), 0);
        assert_eq!(h.expected_file_size(), Some(54 + 48));
    }

    #[test]
    fn test_layout_max_dimensions() {
        let h = header(i32::MAX, i32::MAX, 32);
        assert_eq!(h.row_bytes(), i32::MAX as u64 * 4);
        assert_eq!(h.row_padding(), 0);
        assert_eq!(
            h.expected_file_size(),
            Some(i32::MAX as u64 * 4 * i32::MAX as u64 + 54)
        );

        let h = BmpHeader {
            pixel_offset: u32::MAX,
            ..h
        };
        assert!(h.expected_file_size().unwrap() > u64::from(u32::MAX));

        let h = header(i32::MAX, 1, 24);
        assert_eq!(h.stride(), i32::MAX as u64 * 3 + 3);
        assert_eq!(h.expected_file_size(), Some(54 + i32::MAX as u64 * 3 + 3));
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedBitDepth(8);
        assert_eq!(err.to_string(), "Unsupported bit depth: 8 bits per pixel");

        let err = DecodeError::InvalidFormat {
            declared: 70,
            expected: 70 + 8,
        };
        assert_eq!(
            err.to_string(),
            "Invalid bitmap: header declares 70 bytes but layout requires 78"
        );
    }
}
