// Shortener image watermark library

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod watermark;

pub use error::ShortenerError;
