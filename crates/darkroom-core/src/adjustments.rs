//! Tonal adjustment algorithms
//!
//! Applies brightness, contrast and saturation to a pixel buffer in HSB space.
//!
//! ## Per-pixel steps
//! 1. Convert RGB to HSB
//! 2. Saturation: `s' = clamp(s * (1 + saturation/100), 0, 1)`
//! 3. Contrast and brightness: `b' = clamp((b - 0.5) * (1 + contrast/100) + 0.5 + brightness/100, 0, 1)`
//! 4. Convert back to RGB with the hue unchanged
//!
//! The adjuster never looks at neighbouring pixels, so the output of a pass
//! depends only on its input buffer and the parameters.

use crate::buffer::{PixelBuffer, Rgb};
use crate::color::{hsb_to_rgb, rgb_to_hsb};
use crate::ToneParams;

/// Normalized multipliers derived from [`ToneParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneFactors {
    /// Offset added to HSB brightness (-1.0 to 1.0)
    pub brightness: f32,
    /// Scale applied around mid-gray (0.0 to 2.0)
    pub contrast: f32,
    /// Scale applied to HSB saturation (0.0 to 2.0)
    pub saturation: f32,
}

impl ToneFactors {
    /// Factors that leave every pixel unchanged.
    pub const NEUTRAL: ToneFactors = ToneFactors {
        brightness: 0.0,
        contrast: 1.0,
        saturation: 1.0,
    };
}

impl From<&ToneParams> for ToneFactors {
    fn from(params: &ToneParams) -> Self {
        Self {
            brightness: params.brightness as f32 / 100.0,
            contrast: 1.0 + params.contrast as f32 / 100.0,
            saturation: 1.0 + params.saturation as f32 / 100.0,
        }
    }
}

/// Produce a new buffer with the tone parameters applied to `source`.
///
/// `source` is never modified. With all parameters at zero the result is an
/// exact copy.
pub fn apply_tone(source: &PixelBuffer, params: &ToneParams) -> PixelBuffer {
    let mut output = source.clone();

    // Early exit if no adjustments
    if params.is_default() {
        return output;
    }

    let factors = ToneFactors::from(params);
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        brightness = params.brightness,
        contrast = params.contrast,
        saturation = params.saturation,
        "tone pass"
    );

    for chunk in output.as_raw_mut().chunks_exact_mut(3) {
        let adjusted = adjust_pixel([chunk[0], chunk[1], chunk[2]], factors);
        chunk.copy_from_slice(&adjusted);
    }

    output
}

/// Apply the tone factors to a single pixel.
#[inline]
pub fn adjust_pixel(rgb: Rgb, factors: ToneFactors) -> Rgb {
    let [r, g, b] = rgb;
    let (hue, saturation, brightness) = rgb_to_hsb(r, g, b);

    let saturation = apply_saturation(saturation, factors.saturation);
    let brightness = apply_contrast_brightness(brightness, factors.contrast, factors.brightness);

    hsb_to_rgb(hue, saturation, brightness)
}

/// Scale saturation, keeping it within the valid range.
#[inline]
fn apply_saturation(saturation: f32, factor: f32) -> f32 {
    (saturation * factor).clamp(0.0, 1.0)
}

/// Stretch brightness around mid-gray, then offset it.
///
/// A contrast factor of 0 collapses every pixel to `0.5 + offset`.
#[inline]
fn apply_contrast_brightness(brightness: f32, contrast: f32, offset: f32) -> f32 {
    let midpoint = 0.5;
    ((brightness - midpoint) * contrast + midpoint + offset).clamp(0.0, 1.0)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
