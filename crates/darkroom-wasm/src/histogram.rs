//! Histogram computation WASM bindings.
//!
//! This module provides JavaScript bindings for histogram computation,
//! allowing RGB and luminance histograms to be calculated from an image.

use crate::js_error;
use crate::types::JsImage;
use darkroom_core::histogram::compute_histogram as compute_histogram_core;
use darkroom_core::Histogram;
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
///
/// Contains 256-bin histograms for red, green, blue, and luminance channels,
/// plus helper methods for clipping detection and normalization.
#[wasm_bindgen]
pub struct JsHistogram {
    red: Vec<u32>,
    green: Vec<u32>,
    blue: Vec<u32>,
    luminance: Vec<u32>,
    max_value: u32,
    has_highlight_clipping: bool,
    has_shadow_clipping: bool,
}

#[wasm_bindgen]
impl JsHistogram {
    /// Get red channel histogram (256 bins).
    pub fn red(&self) -> Vec<u32> {
        self.red.clone()
    }

    /// Get green channel histogram (256 bins).
    pub fn green(&self) -> Vec<u32> {
        self.green.clone()
    }

    /// Get blue channel histogram (256 bins).
    pub fn blue(&self) -> Vec<u32> {
        self.blue.clone()
    }

    /// Get luminance histogram (256 bins).
    pub fn luminance(&self) -> Vec<u32> {
        self.luminance.clone()
    }

    /// Get maximum bin value across all RGB channels.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Check if any RGB channel has values at 255 (highlight clipping).
    #[wasm_bindgen(getter)]
    pub fn has_highlight_clipping(&self) -> bool {
        self.has_highlight_clipping
    }

    /// Check if any RGB channel has values at 0 (shadow clipping).
    #[wasm_bindgen(getter)]
    pub fn has_shadow_clipping(&self) -> bool {
        self.has_shadow_clipping
    }
}

impl From<Histogram> for JsHistogram {
    fn from(hist: Histogram) -> Self {
        Self {
            red: hist.red.to_vec(),
            green: hist.green.to_vec(),
            blue: hist.blue.to_vec(),
            luminance: hist.luminance.to_vec(),
            max_value: hist.max_value(),
            has_highlight_clipping: hist.has_highlight_clipping(),
            has_shadow_clipping: hist.has_shadow_clipping(),
        }
    }
}

/// Compute the histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_histogram(image);
///
/// const redBins = hist.red();        // Uint32Array[256]
/// const max = hist.max_value;        // For normalization
/// const clipped = hist.has_highlight_clipping;
///
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_histogram(image: &JsImage) -> Result<JsHistogram, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    Ok(compute_histogram_core(&buffer).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_histogram_creation() {
        let image = JsImage::new(3, 1, vec![255, 0, 0, 0, 255, 0, 0, 0, 255]);
        let hist = compute_histogram(&image).unwrap();

        assert_eq!(hist.red().len(), 256);
        assert_eq!(hist.green().len(), 256);
        assert_eq!(hist.blue().len(), 256);
        assert_eq!(hist.luminance().len(), 256);
        assert!(hist.has_highlight_clipping);
        assert!(hist.has_shadow_clipping);
    }

    #[test]
    fn test_js_histogram_max_value() {
        let pixels = vec![128, 128, 128, 128, 128, 128, 128, 128, 128, 200, 200, 200];
        let hist = compute_histogram(&JsImage::new(4, 1, pixels)).unwrap();

        assert_eq!(hist.max_value, 3);
        assert_eq!(hist.red()[128], 3);
        assert_eq!(hist.red()[200], 1);
    }

    #[test]
    fn test_js_histogram_no_clipping() {
        let pixels = vec![64, 64, 64, 128, 128, 128, 192, 192, 192];
        let hist = compute_histogram(&JsImage::new(3, 1, pixels)).unwrap();

        assert!(!hist.has_highlight_clipping);
        assert!(!hist.has_shadow_clipping);
    }

    #[test]
    fn test_js_histogram_luminance() {
        let hist = compute_histogram(&JsImage::new(1, 1, vec![255, 255, 255])).unwrap();
        assert_eq!(hist.luminance()[255], 1);
    }

    #[test]
    fn test_js_histogram_gradients() {
        let mut pixels = Vec::new();
        for i in 0..=255u8 {
            pixels.extend_from_slice(&[i, i, i]);
        }
        let hist = compute_histogram(&JsImage::new(256, 1, pixels)).unwrap();

        for i in 0..256 {
            assert_eq!(hist.red()[i], 1);
            assert_eq!(hist.green()[i], 1);
            assert_eq!(hist.blue()[i], 1);
            assert_eq!(hist.luminance()[i], 1);
        }
        assert_eq!(hist.max_value, 1);
    }
}
