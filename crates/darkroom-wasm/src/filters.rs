//! Filter WASM bindings.
//!
//! Filters are addressed by name from JavaScript. Names parse
//! case-insensitively, and both "Edge Detection" and "EdgeDetection" work.

use crate::js_error;
use crate::types::JsImage;
use darkroom_core::{Filter, FilterKind};
use strum::IntoEnumIterator;
use wasm_bindgen::prelude::*;

pub(crate) fn parse_filter(name: &str) -> Result<FilterKind, String> {
    name.parse::<FilterKind>()
        .map_err(|_| format!("Unknown filter: {name}"))
}

/// Display names of every available filter, in menu order.
#[wasm_bindgen]
pub fn filter_names() -> js_sys::Array {
    FilterKind::iter()
        .map(|kind| JsValue::from_str(&kind.to_string()))
        .collect()
}

/// Apply a named filter to an image, returning a new image.
///
/// # Example (TypeScript)
/// ```typescript
/// const sharpened = apply_filter(image, 'Sharpen');
/// const edges = apply_filter(image, 'Edge Detection');
/// ```
#[wasm_bindgen]
pub fn apply_filter(image: &JsImage, name: &str) -> Result<JsImage, JsValue> {
    let kind = parse_filter(name).map_err(js_error)?;
    let buffer = image.to_buffer().map_err(js_error)?;
    Ok(JsImage::from_buffer(kind.filter().apply(&buffer)))
}
