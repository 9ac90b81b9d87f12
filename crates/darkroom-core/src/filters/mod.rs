//! Discrete filters applied to the working buffer.
//!
//! Filters come in two families:
//! - [`convolution`] - 3x3 neighbourhood kernels (blur, sharpen, edge detection)
//! - [`color_map`] - per-pixel remaps (grayscale, sepia, invert)
//!
//! Both implement [`Filter`], and [`FilterKind`] maps a user-facing filter
//! name onto the implementation, so the pipeline never needs to know which
//! family a filter belongs to.

pub mod color_map;
pub mod convolution;

use strum::{Display, EnumIter, EnumString};

use crate::buffer::PixelBuffer;

pub use color_map::ColorMap;
pub use convolution::{convolve, Kernel};

/// A transform from one buffer to another of the same size.
pub trait Filter {
    /// Compute the filtered image, leaving `input` untouched.
    fn apply(&self, input: &PixelBuffer) -> PixelBuffer;

    /// Replace `buffer` with its filtered image.
    ///
    /// The default computes into a fresh buffer and swaps it in, so readers
    /// never observe a half-filtered image.
    fn apply_in_place(&self, buffer: &mut PixelBuffer) {
        *buffer = self.apply(buffer);
    }
}

/// Every filter the editor offers.
///
/// Parses case-insensitively from the UI labels ("Edge Detection") as well as
/// identifier spellings ("EdgeDetection", "edge_detection").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum FilterKind {
    Blur,
    Sharpen,
    #[strum(
        to_string = "Edge Detection",
        serialize = "EdgeDetection",
        serialize = "edge_detection"
    )]
    EdgeDetection,
    Grayscale,
    Sepia,
    Invert,
}

impl FilterKind {
    /// The implementation behind this filter.
    pub fn filter(self) -> &'static dyn Filter {
        match self {
            FilterKind::Blur => &Kernel::BLUR,
            FilterKind::Sharpen => &Kernel::SHARPEN,
            FilterKind::EdgeDetection => &Kernel::EDGE_DETECTION,
            FilterKind::Grayscale => &ColorMap::Grayscale,
            FilterKind::Sepia => &ColorMap::Sepia,
            FilterKind::Invert => &ColorMap::Invert,
        }
    }
}
