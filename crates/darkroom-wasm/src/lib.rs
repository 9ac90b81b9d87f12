//! Darkroom WASM - WebAssembly bindings for Darkroom
//!
//! This crate exposes the darkroom-core editing pipeline to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `editor` - The stateful `Editor` class (load, adjust, filter, reset, save)
//! - `adjustments` - Tone parameters and stateless tone passes
//! - `filters` - Filter names and stateless filter passes
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (JPEG, PNG, GIF)
//! - `encode` - PNG encoding bindings
//! - `histogram` - RGB and luminance histograms
//!
//! # Usage
//!
//! ```typescript
//! import init, { Editor } from '@darkroom/wasm';
//!
//! await init();
//!
//! const editor = new Editor();
//! editor.load(new Uint8Array(await file.arrayBuffer()));
//! editor.set_parameters(20, 10, -30);
//! editor.apply_filter('Sharpen');
//! const png = editor.encode_png();
//! ```

use wasm_bindgen::prelude::*;

mod adjustments;
mod decode;
mod editor;
mod encode;
mod filters;
mod histogram;
mod types;

// Re-export public types
pub use adjustments::{apply_tone, ToneParams};
pub use decode::{decode_image, image_orientation};
pub use editor::Editor;
pub use encode::{encode_png, png_file_name};
pub use filters::{apply_filter, filter_names};
pub use histogram::{compute_histogram, JsHistogram};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_log(&format!("Darkroom WASM {} ready", version()));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Write an informational message to the browser console.
pub(crate) fn console_log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Report an error to the browser console and convert it for JavaScript.
pub(crate) fn js_error(err: impl std::fmt::Display) -> JsValue {
    let message = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
