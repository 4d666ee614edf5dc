//! Bitmap decoding.
//!
//! This module provides functionality for:
//! - Validating a BMP header and reconciling its declared size
//! - Decoding 24- and 32-bit uncompressed pixel arrays into an [`Image`]
//!
//! # Format Notes
//!
//! Stored rows are bottom-to-top, pixels within a row are left-to-right in
//! blue, green, red order, and each row is zero-padded to a multiple of four
//! bytes. The decoded image always has row 0 at the visual top.
//!
//! # Examples
//!
//! ```ignore
//! use bmpfx_core::decode::decode_bmp;
//!
//! let bytes = std::fs::read("photo.bmp").unwrap();
//! let image = decode_bmp(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```
//!
//! [`Image`]: crate::pixel::Image

mod bmp;
mod types;

pub use bmp::{decode_bmp, inspect_bmp};
pub use types::{BmpHeader, DecodeError};

#[cfg(test)]
pub(crate) use bmp::test_support;
