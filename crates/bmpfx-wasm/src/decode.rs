//! Bitmap decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_bmp`] - Decode a BMP file from bytes
//! - [`is_valid_bmp`] - Check whether bytes form a decodable BMP header
//!
//! # Example
//!
//! ```typescript
//! import { decode_bmp, is_valid_bmp } from '@bmpfx/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! if (is_valid_bmp(bytes)) {
//!   const image = decode_bmp(bytes);
//!   console.log(`Decoded ${image.width}x${image.height}`);
//! }
//! ```

use crate::types::JsImage;
use bmpfx_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a BMP image from bytes.
///
/// # Errors
///
/// Returns an error if the header is malformed, the declared file size does
/// not match the layout, the bit depth is not 24 or 32, or the data is
/// truncated.
///
/// # Example
///
/// ```typescript
/// const image = decode_bmp(new Uint8Array(await file.arrayBuffer()));
/// ```
#[wasm_bindgen]
pub fn decode_bmp(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_bmp(bytes)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check whether `bytes` carries a valid, self-consistent BMP header.
///
/// Does not decode pixel data.
#[wasm_bindgen]
pub fn is_valid_bmp(bytes: &[u8]) -> bool {
    decode::inspect_bmp(bytes).is_ok()
}
