//! PNG encoding for saving the working image.
//!
//! PNG is lossless, so a saved image decodes back to exactly the pixels the
//! editor displayed.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur while saving an image.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// Writing the encoded file failed
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Encode a pixel buffer to PNG bytes.
///
/// # Example
///
/// ```
/// use darkroom_core::{encode::encode_png, PixelBuffer};
///
/// let image = PixelBuffer::filled(100, 100, [128, 128, 128]).unwrap();
/// let png = encode_png(&image).unwrap();
///
/// // Verify PNG signature
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let mut out = Cursor::new(Vec::new());

    PngEncoder::new(&mut out)
        .write_image(
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}

/// Encode a pixel buffer as PNG and write it to `path`.
///
/// The path is used as given; see [`with_png_extension`] for normalizing a
/// user-supplied file name first.
pub fn save_png(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_png(buffer)?;

    std::fs::write(path, &bytes).map_err(|e| {
        tracing::warn!(path = %path.display(), error = %e, "failed to write image");
        EncodeError::IoError(e.to_string())
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "saved image");
    Ok(())
}

/// Append `.png` unless the path already ends in it (case-insensitive).
pub fn with_png_extension(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let has_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".png");
        PathBuf::from(name)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            value in any::<u8>(),
        ) {
            let image = PixelBuffer::filled(width, height, [value, value / 2, 255 - value]).unwrap();
            let first = encode_png(&image);
            let second = encode_png(&image);

            prop_assert!(first.is_ok() && second.is_ok());
            prop_assert_eq!(first.unwrap(), second.unwrap(), "Same input should produce same output");
        }

        /// Property: Aspect ratios don't affect encoding success.
        #[test]
        fn prop_aspect_ratio_independence(
            short_side in 1u32..=10,
            ratio in 1u32..=10,
        ) {
            let long_side = short_side * ratio;

            let wide = PixelBuffer::new(long_side, short_side).unwrap();
            let tall = PixelBuffer::new(short_side, long_side).unwrap();

            prop_assert!(encode_png(&wide).is_ok(), "Wide image should encode");
            prop_assert!(encode_png(&tall).is_ok(), "Tall image should encode");
        }
    }
}
