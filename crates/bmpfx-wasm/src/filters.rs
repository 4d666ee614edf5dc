//! WASM bindings for the per-pixel filters.
//!
//! Factor-taking filters return an error for a non-finite factor; the rest
//! cannot fail.

use crate::types::JsImage;
use bmpfx_core::filters;
use wasm_bindgen::prelude::*;

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Darken each pixel in proportion to its distance from the center.
#[wasm_bindgen]
pub fn vignette(image: &JsImage) -> JsImage {
    JsImage::from_image(filters::vignette(image.image()))
}

/// Push bright pixels brighter and dark pixels darker.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const punchy = clarendon(image, 0.5);
/// ```
#[wasm_bindgen]
pub fn clarendon(image: &JsImage, factor: f64) -> Result<JsImage, JsValue> {
    filters::clarendon(image.image(), factor)
        .map(JsImage::from_image)
        .map_err(to_js_error)
}

/// Replace each pixel with the average of its channels.
#[wasm_bindgen]
pub fn grayscale(image: &JsImage) -> JsImage {
    JsImage::from_image(filters::grayscale(image.image()))
}

/// Threshold each pixel to black or white.
#[wasm_bindgen]
pub fn high_contrast(image: &JsImage) -> JsImage {
    JsImage::from_image(filters::high_contrast(image.image()))
}

/// Move every channel toward white.
#[wasm_bindgen]
pub fn lighten(image: &JsImage, factor: f64) -> Result<JsImage, JsValue> {
    filters::lighten(image.image(), factor)
        .map(JsImage::from_image)
        .map_err(to_js_error)
}

/// Scale every channel toward black.
#[wasm_bindgen]
pub fn darken(image: &JsImage, factor: f64) -> Result<JsImage, JsValue> {
    filters::darken(image.image(), factor)
        .map(JsImage::from_image)
        .map_err(to_js_error)
}

/// Reduce to black, white, red, green and blue.
#[wasm_bindgen]
pub fn posterize(image: &JsImage) -> JsImage {
    JsImage::from_image(filters::posterize(image.image()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JsImage {
        // top-left blue, top-right red, bottom row gray
        JsImage::new(2, 2, vec![0, 0, 255, 255, 0, 0, 100, 100, 100, 200, 200, 200]).unwrap()
    }

    #[test]
    fn test_grayscale() {
        let result = grayscale(&sample());
        assert_eq!(&result.pixels()[..6], &[85, 85, 85, 85, 85, 85]);
    }

    #[test]
    fn test_high_contrast() {
        let result = high_contrast(&sample());
        assert_eq!(
            result.pixels(),
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255]
        );
    }

    #[test]
    fn test_posterize() {
        let result = posterize(&sample());
        assert_eq!(&result.pixels()[..6], &[0, 0, 255, 255, 0, 0]);
    }

    #[test]
    fn test_factor_filters() {
        let img = sample();
        let darker = darken(&img, 0.5).unwrap();
        assert_eq!(&darker.pixels()[6..9], &[50, 50, 50]);

        let lighter = lighten(&img, 0.5).unwrap();
        assert_eq!(&lighter.pixels()[6..9], &[177, 177, 177]);

        let same = clarendon(&img, 1.0).unwrap();
        assert_eq!(same.pixels(), img.pixels());
    }

    #[test]
    fn test_vignette_keeps_dimensions() {
        let result = vignette(&sample());
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 2);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_non_finite_factor_rejected() {
        let img = JsImage::new(1, 1, vec![10, 20, 30]).unwrap();
        assert!(darken(&img, f64::NAN).is_err());
        assert!(lighten(&img, f64::INFINITY).is_err());
    }
}
