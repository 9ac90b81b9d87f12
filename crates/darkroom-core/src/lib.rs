//! Darkroom Core - Image transform pipeline
//!
//! This crate provides the editing engine behind Darkroom: an owned RGB pixel
//! buffer, HSB tone adjustment, 3x3 convolution and color-map filters, and a
//! controller that sequences them over a pristine original and a working copy.
//!
//! # Example
//!
//! ```ignore
//! use darkroom_core::{decode, FilterKind, PipelineController};
//!
//! let image = decode::load_image("photo.jpg")?;
//! let mut editor = PipelineController::new();
//! editor.load(image);
//! editor.set_parameters(20, 10, -30)?;
//! editor.apply_filter(FilterKind::Sharpen)?;
//! darkroom_core::encode::save_png(editor.current()?, "photo-edited.png")?;
//! ```

pub mod adjustments;
pub mod buffer;
pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filters;
pub mod histogram;
pub mod luminance;
pub mod pipeline;

pub use adjustments::{apply_tone, ToneFactors};
pub use buffer::{BufferError, PixelBuffer, Rgb};
pub use error::EditorError;
pub use filters::{ColorMap, Filter, FilterKind, Kernel};
pub use pipeline::PipelineController;

/// Lower bound for every tone parameter.
pub const PARAM_MIN: i32 = -100;

/// Upper bound for every tone parameter.
pub const PARAM_MAX: i32 = 100;

/// Tone parameters driven by the editor's sliders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToneParams {
    /// Brightness (-100 to 100)
    pub brightness: i32,
    /// Contrast (-100 to 100)
    pub contrast: i32,
    /// Saturation (-100 to 100)
    pub saturation: i32,
}

impl ToneParams {
    /// Create parameters, clamping each value into -100..=100.
    pub fn new(brightness: i32, contrast: i32, saturation: i32) -> Self {
        Self {
            brightness: brightness.clamp(PARAM_MIN, PARAM_MAX),
            contrast: contrast.clamp(PARAM_MIN, PARAM_MAX),
            saturation: saturation.clamp(PARAM_MIN, PARAM_MAX),
        }
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Clamp values that arrived unchecked, e.g. through deserialization.
    pub fn clamped(self) -> Self {
        Self::new(self.brightness, self.contrast, self.saturation)
    }
}

/// Histogram data for an image
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Red channel histogram (256 bins)
    pub red: [u32; 256],
    /// Green channel histogram (256 bins)
    pub green: [u32; 256],
    /// Blue channel histogram (256 bins)
    pub blue: [u32; 256],
    /// Luminance histogram (256 bins)
    pub luminance: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            red: [0; 256],
            green: [0; 256],
            blue: [0; 256],
            luminance: [0; 256],
        }
    }
}

impl Histogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the maximum value across all channels for normalization
    pub fn max_value(&self) -> u32 {
        let max_r = *self.red.iter().max().unwrap_or(&0);
        let max_g = *self.green.iter().max().unwrap_or(&0);
        let max_b = *self.blue.iter().max().unwrap_or(&0);
        max_r.max(max_g).max(max_b)
    }

    /// Check for highlight clipping (values at 255)
    pub fn has_highlight_clipping(&self) -> bool {
        self.red[255] > 0 || self.green[255] > 0 || self.blue[255] > 0
    }

    /// Check for shadow clipping (values at 0)
    pub fn has_shadow_clipping(&self) -> bool {
        self.red[0] > 0 || self.green[0] > 0 || self.blue[0] > 0
    }
}
