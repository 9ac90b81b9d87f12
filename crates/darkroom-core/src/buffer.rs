//! Owned RGB pixel storage.
//!
//! `PixelBuffer` is the only mutable image state in the pipeline. Samples are
//! stored row-major, 3 bytes per pixel, which is the same layout the `image`
//! crate uses for `RgbImage` so conversions are zero-copy.

use thiserror::Error;

/// A single RGB sample.
pub type Rgb = [u8; 3];

/// Errors raised by buffer construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// A read or write addressed a pixel outside the buffer.
    #[error("Pixel ({x}, {y}) is out of range for a {width}x{height} buffer")]
    IndexOutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The sample count does not fit in memory addressing
    #[error("Image too large: {width}x{height} exceeds addressable memory")]
    TooLarge { width: u32, height: u32 },

    /// Sample data length doesn't match the dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// A 2D grid of RGB samples with fixed, non-zero dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Create a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, BufferError> {
        let len = byte_len(width, height)?;
        let pixels = color.repeat(len / 3);
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap existing RGB sample data (3 bytes per pixel, row-major order).
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Take ownership of an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, BufferError> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    /// Copy into an `image::RgbImage` for encoding.
    pub fn to_rgb_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| {
            image::Rgb(self.pixel_at(x, y))
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb, BufferError> {
        self.check_bounds(x, y)?;
        Ok(self.pixel_at(x, y))
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<(), BufferError> {
        self.check_bounds(x, y)?;
        let i = self.offset(x, y);
        self.pixels[i..i + 3].copy_from_slice(&color);
        Ok(())
    }

    /// Raw RGB samples, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the buffer and return its samples.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Unchecked read for callers that iterate within the bounds.
    #[inline]
    pub(crate) fn pixel_at(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    fn check_bounds(&self, x: u32, y: u32) -> Result<(), BufferError> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Number of samples for a `width` x `height` RGB buffer.
fn byte_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .filter(|&n| n <= isize::MAX as usize)
        .ok_or(BufferError::TooLarge { width, height })
}
