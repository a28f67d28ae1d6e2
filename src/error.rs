use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while slicing an image or cleaning up artifacts.
#[derive(Debug, Error)]
pub enum SliceError {
    /// Source path does not reference an existing file.
    ///
    /// Surfaced at construction time so that a slicer is never created in a
    /// half-initialized state whose methods silently do nothing.
    #[error("invalid input: {} is not an existing file", path.display())]
    InvalidInput { path: PathBuf },

    /// Option or geometry bounds were violated (zero tile size, overlap not
    /// smaller than the tile size, unknown tile format, quality out of range,
    /// source image with a zero dimension).
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// I/O error during directory creation, tile write, or descriptor write.
    ///
    /// Fatal: the whole operation aborts and no partial cleanup is attempted.
    /// A partially written level tree is removed by the pre-run clean on the
    /// next invocation.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Decode or encode failure from the image codec.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl SliceError {
    /// Shorthand for an [`SliceError::InvalidConfiguration`] with a message.
    pub fn config(message: impl Into<String>) -> Self {
        SliceError::InvalidConfiguration {
            message: message.into(),
        }
    }
}
