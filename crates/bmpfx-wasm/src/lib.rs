//! bmpfx WASM - WebAssembly bindings for bmpfx
//!
//! This crate exposes the bmpfx-core codec and transforms to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper around the pixel grid
//! - `decode` - BMP decoding and header validation
//! - `encode` - BMP encoding
//! - `filters` - Per-pixel color filters
//! - `transform` - Rotation and enlargement
//! - `operation` - Operations described as JS objects
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_bmp, grayscale, encode_bmp } from '@bmpfx/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_bmp(bytes);
//! const out = encode_bmp(grayscale(image));
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod filters;
mod operation;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_bmp, is_valid_bmp};
pub use encode::encode_bmp;
pub use filters::{clarendon, darken, grayscale, high_contrast, lighten, posterize, vignette};
pub use operation::{apply_chain, apply_operation, operation_names};
pub use transform::{enlarge, rotate, rotate_90};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
