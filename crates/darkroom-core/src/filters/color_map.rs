//! Per-pixel color remaps.
//!
//! These filters only look at one pixel at a time, so they run in place on
//! the working buffer without a second allocation.

use super::Filter;
use crate::buffer::{PixelBuffer, Rgb};
use crate::luminance::{calculate_luma_u8, weighted_round};

/// Classic sepia toning matrix in thousandths, one row per output channel.
const SEPIA: [[u32; 3]; 3] = [
    [393, 769, 189],
    [349, 686, 168],
    [272, 534, 131],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMap {
    /// BT.601 luma copied to all three channels.
    Grayscale,
    /// Warm brown toning.
    Sepia,
    /// Photographic negative.
    Invert,
}

impl ColorMap {
    /// Remap a single pixel.
    #[inline]
    pub fn map_pixel(self, rgb: Rgb) -> Rgb {
        let [r, g, b] = rgb;
        match self {
            ColorMap::Grayscale => {
                let gray = calculate_luma_u8(r, g, b);
                [gray, gray, gray]
            }
            ColorMap::Sepia => SEPIA.map(|row| weighted_round(row, r, g, b).min(255) as u8),
            ColorMap::Invert => [255 - r, 255 - g, 255 - b],
        }
    }
}

impl Filter for ColorMap {
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer {
        let mut output = input.clone();
        self.apply_in_place(&mut output);
        output
    }

    fn apply_in_place(&self, buffer: &mut PixelBuffer) {
        tracing::debug!(
            width = buffer.width(),
            height = buffer.height(),
            filter = ?self,
            "color map pass"
        );
        for chunk in buffer.as_raw_mut().chunks_exact_mut(3) {
            let mapped = self.map_pixel([chunk[0], chunk[1], chunk[2]]);
            chunk.copy_from_slice(&mapped);
        }
    }
}
