//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core Darkroom types,
//! handling the conversion between Rust and JavaScript data representations.

use darkroom_core::{BufferError, PixelBuffer};
use wasm_bindgen::prelude::*;

/// An RGB image for JavaScript.
///
/// Holds dimensions and packed RGB samples (3 bytes per pixel, row-major).
/// The pixels are only validated against the dimensions when the image is
/// handed to a Darkroom function.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsImage {
    /// Create a new JsImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsImage {
        JsImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {}
}

impl JsImage {
    pub(crate) fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            pixels: buffer.into_raw(),
        }
    }

    /// Validate and copy into a core buffer.
    pub(crate) fn to_buffer(&self) -> Result<PixelBuffer, BufferError> {
        PixelBuffer::from_raw(self.width, self.height, self.pixels.clone())
    }
}

impl From<&PixelBuffer> for JsImage {
    fn from(buffer: &PixelBuffer) -> Self {
        Self::from_buffer(buffer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_image_creation() {
        let img = JsImage::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_image_pixels() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8];
        let img = JsImage::new(2, 1, pixels.clone());
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_from_buffer() {
        let buffer = PixelBuffer::filled(20, 10, [1, 2, 3]).unwrap();
        let img = JsImage::from_buffer(buffer);
        assert_eq!(img.width(), 20);
        assert_eq!(img.height(), 10);
        assert_eq!(img.byte_length(), 600);
        assert_eq!(&img.pixels()[0..3], &[1, 2, 3]);
    }

    #[test]
    fn test_to_buffer() {
        let img = JsImage::new(5, 4, vec![128u8; 5 * 4 * 3]);
        let buffer = img.to_buffer().unwrap();
        assert_eq!(buffer.width(), 5);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.get(4, 3).unwrap(), [128, 128, 128]);
    }

    #[test]
    fn test_to_buffer_rejects_wrong_length() {
        let img = JsImage::new(10, 10, vec![0u8; 10]);
        assert!(matches!(
            img.to_buffer(),
            Err(BufferError::InvalidPixelData { .. })
        ));
    }

    #[test]
    fn test_to_buffer_rejects_oversized_dimensions() {
        let img = JsImage::new(65536, 21846, vec![0u8; 131072]);
        assert!(img.to_buffer().is_err());

        let img = JsImage::new(u32::MAX, u32::MAX, vec![0u8; 3]);
        assert!(matches!(img.to_buffer(), Err(BufferError::TooLarge { .. })));
    }

    #[test]
    fn test_to_buffer_rejects_zero_size() {
        let img = JsImage::new(0, 10, Vec::new());
        assert!(img.to_buffer().is_err());
    }
}
