// Error types module

use crate::watermark::WatermarkError;
use thiserror::Error;

/// Top-level error for the shortener binary.
///
/// Configuration loading reports plain strings; watermarking reports
/// [`WatermarkError`]. Both end up here together with I/O failures from
/// writing the result.
#[derive(Debug, Error)]
pub enum ShortenerError {
    /// Configuration errors (invalid YAML, missing env vars, unknown variant)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Watermark errors (asset loading, encoding, missing source image)
    #[error(transparent)]
    Watermark(#[from] WatermarkError),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O errors writing the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShortenerError {
    /// Whether the error means the requested image does not exist.
    ///
    /// Callers serving requests map this to a not-found response instead of
    /// a server error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Watermark(WatermarkError::NotFound(_)))
    }
}
