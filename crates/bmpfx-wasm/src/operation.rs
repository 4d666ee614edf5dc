//! Apply serialized operations from JavaScript.
//!
//! Operations cross the boundary as plain objects in the same shape the CLI
//! reads from JSON:
//!
//! ```typescript
//! import { apply_chain, apply_operation } from '@bmpfx/wasm';
//!
//! const gray = apply_operation(image, { op: 'grayscale' });
//! const result = apply_chain(image, [
//!   { op: 'rotate', turns: 1 },
//!   { op: 'lighten', factor: 0.5 },
//! ]);
//! ```

use crate::types::JsImage;
use bmpfx_core::{operation, Operation};
use wasm_bindgen::prelude::*;

/// Apply one operation described by a JS object.
///
/// # Errors
///
/// Returns an error if the object is not a known operation or if the
/// operation rejects its parameters.
#[wasm_bindgen]
pub fn apply_operation(image: &JsImage, op: JsValue) -> Result<JsImage, JsValue> {
    let op: Operation = serde_wasm_bindgen::from_value(op)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation: {}", e)))?;
    op.apply(image.image())
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Apply an array of operations in order.
///
/// An empty array returns a copy of the input.
#[wasm_bindgen]
pub fn apply_chain(image: &JsImage, ops: JsValue) -> Result<JsImage, JsValue> {
    let ops: Vec<Operation> = serde_wasm_bindgen::from_value(ops)
        .map_err(|e| JsValue::from_str(&format!("Invalid operation list: {}", e)))?;
    operation::apply_chain(image.image(), &ops)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Names of all operations in menu order.
#[wasm_bindgen]
pub fn operation_names() -> Vec<String> {
    Operation::all()
        .iter()
        .map(|op| op.name().to_string())
        .collect()
}
