//! Histogram computation from a pixel buffer.
//!
//! Counts red, green, blue and BT.601 luma values. The luma bins use the same
//! weights as the grayscale filter, so after a grayscale pass every channel
//! histogram equals the luminance histogram.

use crate::buffer::PixelBuffer;
use crate::luminance::calculate_luma_u8;
use crate::Histogram;

/// Compute RGB and luminance histograms for a buffer.
///
/// # Performance
/// Single pass over the samples; memory usage is constant (4KB for bins).
pub fn compute_histogram(buffer: &PixelBuffer) -> Histogram {
    let mut hist = Histogram::new();

    for chunk in buffer.as_raw().chunks_exact(3) {
        let (r, g, b) = (chunk[0], chunk[1], chunk[2]);

        hist.red[r as usize] += 1;
        hist.green[g as usize] += 1;
        hist.blue[b as usize] += 1;
        hist.luminance[calculate_luma_u8(r, g, b) as usize] += 1;
    }

    hist
}
