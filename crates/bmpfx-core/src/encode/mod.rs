//! Bitmap encoding.
//!
//! This module provides functionality for:
//! - Encoding an [`Image`] as a 24-bit uncompressed BMP
//!
//! # Examples
//!
//! ```ignore
//! use bmpfx_core::encode::encode_bmp;
//! use bmpfx_core::{Image, Pixel};
//!
//! let image = Image::filled(100, 100, Pixel::gray(128)).unwrap();
//! let bmp_bytes = encode_bmp(&image).unwrap();
//! println!("Encoded {} bytes", bmp_bytes.len());
//! ```
//!
//! [`Image`]: crate::pixel::Image

mod bmp;

pub use bmp::{encode_bmp, EncodeError};
