//! Image loading for Darkroom.
//!
//! This module turns JPEG, PNG and GIF files into a [`PixelBuffer`](crate::PixelBuffer):
//! - The format is sniffed from the file signature, not the extension
//! - Alpha is dropped and every input becomes 8-bit RGB
//! - JPEG EXIF orientation is applied so pixels are upright
//!
//! Decoding failures are reported as [`DecodeError`] and never touch editor
//! state; the controller only receives a buffer once decoding succeeded.

mod bitmap;
mod types;

pub use bitmap::{decode_image, decode_image_no_orientation, get_orientation, load_image};
pub use types::{DecodeError, Orientation};
