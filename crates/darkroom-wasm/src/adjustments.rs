//! Tone adjustment WASM bindings.
//!
//! This module provides JavaScript bindings for the ToneParams type,
//! allowing the brightness/contrast/saturation sliders to be driven from TypeScript.

use crate::js_error;
use crate::types::JsImage;
use wasm_bindgen::prelude::*;

/// Tone parameters wrapper for JavaScript
///
/// Every setter clamps into -100..=100.
#[wasm_bindgen]
pub struct ToneParams {
    inner: darkroom_core::ToneParams,
}

#[wasm_bindgen]
impl ToneParams {
    /// Create new tone parameters with every value at zero
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: darkroom_core::ToneParams::default(),
        }
    }

    /// Get brightness value
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> i32 {
        self.inner.brightness
    }

    /// Set brightness value
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: i32) {
        self.inner.brightness = value;
        self.inner = self.inner.clamped();
    }

    /// Get contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> i32 {
        self.inner.contrast
    }

    /// Set contrast value
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: i32) {
        self.inner.contrast = value;
        self.inner = self.inner.clamped();
    }

    /// Get saturation value
    #[wasm_bindgen(getter)]
    pub fn saturation(&self) -> i32 {
        self.inner.saturation
    }

    /// Set saturation value
    #[wasm_bindgen(setter)]
    pub fn set_saturation(&mut self, value: i32) {
        self.inner.saturation = value;
        self.inner = self.inner.clamped();
    }

    /// Check if all parameters are zero
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(js_error)
    }

    /// Deserialize from JSON, clamping out-of-range values
    pub fn from_json(value: JsValue) -> Result<ToneParams, JsValue> {
        let inner: darkroom_core::ToneParams =
            serde_wasm_bindgen::from_value(value).map_err(js_error)?;
        Ok(Self {
            inner: inner.clamped(),
        })
    }
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneParams {
    pub(crate) fn inner(&self) -> &darkroom_core::ToneParams {
        &self.inner
    }
}

/// Run a tone pass over an image.
///
/// Returns a new image; the source is left untouched.
///
/// # Example (TypeScript)
/// ```typescript
/// const params = new ToneParams();
/// params.brightness = 20;
/// params.saturation = -50;
///
/// const adjusted = apply_tone(sourceImage, params);
/// ```
#[wasm_bindgen]
pub fn apply_tone(image: &JsImage, params: &ToneParams) -> Result<JsImage, JsValue> {
    let buffer = image.to_buffer().map_err(js_error)?;
    Ok(JsImage::from_buffer(darkroom_core::apply_tone(
        &buffer,
        params.inner(),
    )))
}
