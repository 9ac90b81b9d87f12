//! Image saving for Darkroom.
//!
//! The working image is always saved as PNG. File naming is the caller's
//! concern; [`with_png_extension`] is provided for the common case of a
//! name typed without an extension.

mod png;

pub use png::{encode_png, save_png, with_png_extension, EncodeError};
