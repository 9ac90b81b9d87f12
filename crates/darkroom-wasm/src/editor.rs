//! The stateful editor exposed to JavaScript.
//!
//! `Editor` wraps a [`PipelineController`] so the page keeps one editing
//! session alive in WASM memory. Pixels only cross into JavaScript when
//! `current()` or `original()` is called.
//!
//! # Example
//!
//! ```typescript
//! const editor = new Editor();
//! editor.load(bytes);
//!
//! brightness.oninput = () => {
//!   editor.set_parameters(+brightness.value, +contrast.value, +saturation.value);
//!   draw(editor.current());
//! };
//!
//! filterMenu.onchange = () => {
//!   editor.apply_filter(filterMenu.value);
//!   draw(editor.current());
//! };
//! ```

use crate::adjustments::ToneParams;
use crate::filters::parse_filter;
use crate::histogram::JsHistogram;
use crate::types::JsImage;
use crate::{console_log, js_error};
use darkroom_core::PipelineController;
use wasm_bindgen::prelude::*;

/// One editing session: the loaded original and the working image.
#[wasm_bindgen]
#[derive(Default)]
pub struct Editor {
    inner: PipelineController,
}

#[wasm_bindgen]
impl Editor {
    /// Create an editor with no image loaded.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and load an image file's bytes.
    ///
    /// On failure the previously loaded image stays in place.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        self.inner.load_bytes(bytes).map_err(js_error)?;
        self.log_loaded();
        Ok(())
    }

    /// Load an already-decoded image.
    pub fn load_image(&mut self, image: &JsImage) -> Result<(), JsValue> {
        let buffer = image.to_buffer().map_err(js_error)?;
        self.inner.load(buffer);
        self.log_loaded();
        Ok(())
    }

    /// Rebuild the working image from the original with new tone parameters.
    ///
    /// Values are clamped into -100..=100. Filters applied since the last
    /// call are discarded.
    pub fn set_parameters(
        &mut self,
        brightness: i32,
        contrast: i32,
        saturation: i32,
    ) -> Result<(), JsValue> {
        self.inner
            .set_parameters(brightness, contrast, saturation)
            .map_err(js_error)
    }

    /// Same as `set_parameters`, taking a `ToneParams`.
    pub fn set_tone(&mut self, params: &ToneParams) -> Result<(), JsValue> {
        self.inner.set_tone(*params.inner()).map_err(js_error)
    }

    /// Apply a named filter on top of the working image.
    pub fn apply_filter(&mut self, name: &str) -> Result<(), JsValue> {
        let kind = parse_filter(name).map_err(js_error)?;
        self.inner.apply_filter(kind).map_err(js_error)
    }

    /// Restore the working image to the original and zero the parameters.
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.inner.reset().map_err(js_error)
    }

    /// Unload the image.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Whether an image is loaded.
    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Copy of the working image.
    pub fn current(&self) -> Result<JsImage, JsValue> {
        self.inner.current().map(JsImage::from).map_err(js_error)
    }

    /// Copy of the image as loaded.
    pub fn original(&self) -> Result<JsImage, JsValue> {
        self.inner.original().map(JsImage::from).map_err(js_error)
    }

    /// The working image as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner.encode_png().map_err(js_error)
    }

    /// Histogram of the working image.
    pub fn histogram(&self) -> Result<JsHistogram, JsValue> {
        self.inner
            .histogram()
            .map(JsHistogram::from)
            .map_err(js_error)
    }

    /// Current tone parameters as a plain object.
    pub fn parameters(&self) -> Result<JsValue, JsValue> {
        let params = self.inner.parameters().map_err(js_error)?;
        serde_wasm_bindgen::to_value(&params).map_err(js_error)
    }

    /// Display names of the filters applied since the last tone pass.
    pub fn applied_filters(&self) -> Result<Vec<String>, JsValue> {
        let filters = self.inner.applied_filters().map_err(js_error)?;
        Ok(filters.iter().map(ToString::to_string).collect())
    }
}

impl Editor {
    fn log_loaded(&self) {
        if let Ok(image) = self.inner.original() {
            console_log(&format!(
                "Loaded {}x{} image",
                image.width(),
                image.height()
            ));
        }
    }
}
