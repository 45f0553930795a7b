//! Watermark panels for images served behind short links.
//!
//! A panel is a rectangle drawn onto (or next to) an image, holding an
//! optional logo and a line of text, typically the short-link host.
//!
//! # Variants
//!
//! - **default**: corner panel, inset a quarter of the image height from the
//!   top or bottom edge
//! - **inside**: full-width band over the top or bottom edge of the image
//! - **outside**: full-width band on rows added above or below the image
//!
//! The wide variants fall back to the default corner panel for images too
//! narrow to hold the logo beside the preferred panel width.
//!
//! # Configuration Example
//!
//! ```yaml
//! watermark:
//!   type: outside
//!   font: 5
//!   logo: /srv/assets/logo.png
//!   width: 270
//!   height: 35
//!   position: bottom-right
//! ```
//!
//! # Pipeline
//!
//! [`Watermark::apply`] loads the image through a [`Driver`], asks the
//! [`Layout`] where the panel goes, draws through the [`Canvas`] seam and
//! encodes the result in the source format.

pub mod bitmap_font;
pub mod canvas;
pub mod compositor;
pub mod config;
pub mod error;
pub mod layout;
pub mod position;
pub mod processor;
pub mod raster;
pub mod source;
pub mod text_renderer;

// Re-export main types for convenience
pub use canvas::{
    Canvas, CanvasGrowth, Color, Driver, Edge, EncodedImage, HorizontalAlign, TextStyle,
    VerticalAlign,
};
pub use config::{Alignment, FontSpec, Variant, WatermarkConfig, WatermarkSettings};
pub use error::WatermarkError;
pub use layout::{AdjustedLayout, Geometry, Layout, TextPlacement, WorkingBox};
pub use position::{
    end_anchored, start_anchored, ImageDimensions, Placement, PlacementPosition, Span,
};
pub use processor::Watermark;
pub use raster::{RasterCanvas, RasterDriver};
pub use source::{panel_label, resolve_image_path};
