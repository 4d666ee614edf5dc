//! bmpfx Core - Bitmap codec and image transforms
//!
//! This crate provides the core functionality for bmpfx: decoding and
//! encoding uncompressed BMP files, and the ten pixel and geometric
//! transforms that run on the decoded grid.
//!
//! # Pipeline
//!
//! Data flows one way: file → [`Image`] → transform → [`Image`] → file.
//! Transforms never mutate their input.
//!
//! ```ignore
//! use bmpfx_core::{read_image, write_image, Operation};
//!
//! let image = read_image("in.bmp")?;
//! let gray = Operation::Grayscale.apply(&image)?;
//! write_image("out.bmp", &gray)?;
//! ```

pub mod decode;
pub mod encode;
pub mod filters;
pub mod format;
pub mod io;
pub mod operation;
pub mod pixel;
pub mod transform;

pub use decode::{decode_bmp, inspect_bmp, BmpHeader, DecodeError};
pub use encode::{encode_bmp, EncodeError};
pub use filters::{clarendon, darken, grayscale, high_contrast, lighten, posterize, vignette};
pub use io::{read_image, write_image};
pub use operation::{apply_chain, MenuParams, Operation};
pub use pixel::{Image, ImageError, Pixel};
pub use transform::{enlarge, rotate, rotate_90, Rotation, TransformError};
