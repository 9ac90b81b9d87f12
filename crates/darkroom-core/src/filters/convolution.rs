//! 3x3 convolution with an edge no-op boundary policy.
//!
//! Each output channel is the weighted sum of the same channel over the 3x3
//! neighbourhood, clamped to 0..=255 and rounded. Pixels on the outermost
//! rows and columns have no complete neighbourhood; they are copied from the
//! input unchanged instead of being sampled with padding.

use super::Filter;
use crate::buffer::PixelBuffer;

const NINTH: f32 = 1.0 / 9.0;

/// An immutable 3x3 weight matrix, indexed `weights[dy][dx]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [[f32; 3]; 3],
}

impl Kernel {
    /// Box blur: the mean of the neighbourhood.
    pub const BLUR: Kernel = Kernel::new([[NINTH; 3]; 3]);

    /// Sharpen: center 5, orthogonal neighbours -1.
    pub const SHARPEN: Kernel = Kernel::new([
        [0.0, -1.0, 0.0],
        [-1.0, 5.0, -1.0],
        [0.0, -1.0, 0.0],
    ]);

    /// Laplacian edge detection: center 8, all neighbours -1.
    pub const EDGE_DETECTION: Kernel = Kernel::new([
        [-1.0, -1.0, -1.0],
        [-1.0, 8.0, -1.0],
        [-1.0, -1.0, -1.0],
    ]);

    pub const fn new(weights: [[f32; 3]; 3]) -> Self {
        Self { weights }
    }
}

impl Filter for Kernel {
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer {
        convolve(input, self)
    }
}

/// Convolve `input` with `kernel`, returning a new buffer of the same size.
pub fn convolve(input: &PixelBuffer, kernel: &Kernel) -> PixelBuffer {
    // Start from a copy so the border is already in place
    let mut output = input.clone();

    let width = input.width() as usize;
    let height = input.height() as usize;

    // No pixel has a full neighbourhood
    if width < 3 || height < 3 {
        return output;
    }

    tracing::debug!(width, height, "convolution pass");

    let stride = width * 3;
    let src = input.as_raw();
    let dst = output.as_raw_mut();

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc = [0.0f32; 3];

            for (dy, row) in kernel.weights.iter().enumerate() {
                let row_start = (y + dy - 1) * stride;
                for (dx, &weight) in row.iter().enumerate() {
                    let i = row_start + (x + dx - 1) * 3;
                    acc[0] += src[i] as f32 * weight;
                    acc[1] += src[i + 1] as f32 * weight;
                    acc[2] += src[i + 2] as f32 * weight;
                }
            }

            let o = y * stride + x * 3;
            for (c, sum) in acc.iter().enumerate() {
                dst[o + c] = sum.clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    output
}
