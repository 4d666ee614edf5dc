//! WASM bindings for geometric transforms.

use crate::types::JsImage;
use bmpfx_core::transform;
use wasm_bindgen::prelude::*;

/// Rotate an image 90 degrees clockwise.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate_90(sourceImage);
/// // rotated.width === sourceImage.height
/// ```
#[wasm_bindgen]
pub fn rotate_90(image: &JsImage) -> JsImage {
    JsImage::from_image(transform::rotate_90(image.image()))
}

/// Rotate an image by a number of clockwise quarter turns.
///
/// Negative counts rotate counter-clockwise.
#[wasm_bindgen]
pub fn rotate(image: &JsImage, turns: i32) -> JsImage {
    JsImage::from_image(transform::rotate(image.image(), turns))
}

/// Enlarge an image by integer factors using nearest-neighbor sampling.
///
/// # Errors
///
/// Returns an error if either factor is zero.
#[wasm_bindgen]
pub fn enlarge(image: &JsImage, x_scale: u32, y_scale: u32) -> Result<JsImage, JsValue> {
    transform::enlarge(image.image(), x_scale, y_scale)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
