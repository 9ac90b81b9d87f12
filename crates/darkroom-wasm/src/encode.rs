//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode a JsImage to PNG bytes
//! - [`png_file_name`] - Normalize a file name to end in `.png`
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, png_file_name } from '@darkroom/wasm';
//!
//! const png = encode_png(image);
//! const name = png_file_name(userInput);
//! const handle = await dir.getFileHandle(name, { create: true });
//! ```

use crate::js_error;
use crate::types::JsImage;
use darkroom_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsImage to PNG bytes.
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
#[wasm_bindgen]
pub fn encode_png(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    encode::encode_png(&buffer).map_err(js_error)
}

/// Append `.png` to a file name unless it already ends in it.
#[wasm_bindgen]
pub fn png_file_name(name: &str) -> String {
    encode::with_png_extension(name)
        .to_string_lossy()
        .into_owned()
}
