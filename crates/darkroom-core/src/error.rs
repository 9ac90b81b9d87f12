//! Errors surfaced by the pipeline controller.

use thiserror::Error;

use crate::buffer::BufferError;
use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Error types for editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An edit or query was made before any image was loaded.
    #[error("No image loaded")]
    NoImageLoaded,

    /// Loading the input image failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Saving the working image failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// A pixel buffer was misused.
    #[error(transparent)]
    Buffer(#[from] BufferError),
}
