//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a JPEG, PNG or GIF image from bytes
//! - [`image_orientation`] - Read the EXIF orientation tag of a JPEG
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@darkroom/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::js_error;
use crate::types::JsImage;
use darkroom_core::decode;
use wasm_bindgen::prelude::*;

/// Decode an image from bytes.
///
/// The format is detected from the file signature. Alpha is dropped and JPEG
/// EXIF orientation is applied, so the result is always upright RGB.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a JPEG, PNG or GIF
/// - The file is corrupted or truncated
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsImage::from_buffer)
        .map_err(js_error)
}

/// EXIF orientation (1-8) of a JPEG, or 1 when it has none.
#[wasm_bindgen]
pub fn image_orientation(bytes: &[u8]) -> u8 {
    decode::get_orientation(bytes) as u8
}
