//! WASM-compatible wrapper types for image data.
//!
//! This module provides a JavaScript-friendly wrapper around the core
//! [`Image`] grid, handling the conversion between its `i32` channels and the
//! interleaved RGB bytes JavaScript works with.

use bmpfx_core::Image;
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel grid stays in WASM memory. When you call `pixels()`, a copy is
/// made to JavaScript memory as a `Uint8Array`, with each channel narrowed to
/// a byte the same way the BMP encoder does. Intermediate results of a
/// filter chain keep their full channel values as long as they stay on the
/// WASM side.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and RGB pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order, top row first)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsImage, JsValue> {
        Image::from_rgb8(width as usize, height as usize, &pixels)
            .map(Self::from_image)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width() as u32
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height() as u32
    }

    /// Get the number of bytes `pixels()` returns (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixel_count() * 3
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.to_rgb8()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    /// Call this if you want to immediately release memory for a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsImage {
    /// Wrap a core image.
    pub(crate) fn from_image(inner: Image) -> Self {
        Self { inner }
    }

    /// Borrow the core image.
    pub(crate) fn image(&self) -> &Image {
        &self.inner
    }
}
