//! Path-based entry points for drivers.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::decode::{decode_bmp, DecodeError};
use crate::encode::{encode_bmp, EncodeError};
use crate::pixel::Image;

/// Read and decode a BMP file.
pub fn read_image(path: impl AsRef<Path>) -> Result<Image, DecodeError> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = bytes.len(), "read bitmap");
    decode_bmp(&bytes)
}

/// Encode an image and write it to `path`.
///
/// The whole file is encoded in memory before anything is written.
pub fn write_image(path: impl AsRef<Path>, image: &Image) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_bmp(image)?;
    fs::write(path, &bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote bitmap");
    Ok(())
}
