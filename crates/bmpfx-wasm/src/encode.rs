//! Bitmap encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_bmp } from '@bmpfx/wasm';
//!
//! const bmpBytes = encode_bmp(processed);
//! const writable = await fileHandle.createWritable();
//! await writable.write(new Blob([bmpBytes], { type: 'image/bmp' }));
//! await writable.close();
//! ```

use crate::types::JsImage;
use bmpfx_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsImage as a 24-bit BMP file.
///
/// # Errors
///
/// Returns an error if the image is too large for the BMP size fields.
#[wasm_bindgen]
pub fn encode_bmp(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_bmp(image.image()).map_err(|e| JsValue::from_str(&e.to_string()))
}
