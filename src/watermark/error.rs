//! Watermark error types.
//!
//! Nothing here is retried or recovered internally. A watermark either
//! applies completely, is skipped because the panel does not fit, or the
//! call fails with one of these.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during watermark processing.
#[derive(Debug, Error)]
pub enum WatermarkError {
    /// Invalid configuration, e.g. an unknown layout variant
    #[error("Watermark configuration error: {0}")]
    Config(String),

    /// Source image, logo or font could not be opened or decoded
    #[error("Failed to load {}: {message}", .path.display())]
    AssetLoad { path: PathBuf, message: String },

    /// Final image could not be encoded
    #[error("Failed to encode watermarked image: {0}")]
    Encode(String),

    /// Requested source image does not exist or escapes the image root
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl WatermarkError {
    pub fn asset_load(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::AssetLoad {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
