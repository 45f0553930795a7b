//! Image collaborator abstraction.
//!
//! The layout engine never touches pixels itself. Everything it needs from an
//! image library goes through two traits:
//!
//! - [`Driver`] loads images (the target and the optional logo) from disk
//! - [`Canvas`] is one loaded image: it reports its size, fills rectangles,
//!   composites overlays, draws text, grows and finally encodes itself
//!
//! [`super::raster`] provides the default implementation on top of the
//! `image` crate. Tests swap in a recording implementation to assert on the
//! exact draw calls.

use super::config::FontSpec;
use super::position::{ImageDimensions, PlacementPosition, Span};
use super::WatermarkError;
use std::path::Path;

/// RGBA color. Alpha 255 is opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// White color.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Translucent light gray panel background, `rgba(192, 192, 192, 0.5)`.
    pub const fn translucent_gray() -> Self {
        Self::rgba(192, 192, 192, 128)
    }

    /// Solid dark gray used for rows added to a grown canvas, `rgb(51, 51, 51)`.
    pub const fn dark_gray() -> Self {
        Self::rgb(51, 51, 51)
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Text starts at the anchor.
    Left,
    /// Text ends at the anchor.
    Right,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// The bottom of the text sits on the anchor.
    Bottom,
    /// The text is vertically centered on the anchor.
    Center,
}

/// How text is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontSpec,
    /// Pixel size; only honoured by TrueType fonts.
    pub size: f32,
    pub color: Color,
    pub align: HorizontalAlign,
    pub valign: VerticalAlign,
}

/// Edge of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

impl Edge {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
        }
    }
}

/// Instruction to add rows to a canvas.
///
/// `rows` new pixel rows are added on `edge`, filled with `fill`. The original
/// pixels stay anchored at the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasGrowth {
    pub rows: u32,
    pub edge: Edge,
    pub fill: Color,
}

/// Result of encoding an image.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    /// The encoded image data
    pub data: Vec<u8>,
    /// Content-Type header value
    pub media_type: &'static str,
}

impl EncodedImage {
    pub fn new(data: Vec<u8>, media_type: &'static str) -> Self {
        Self { data, media_type }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// One loaded, mutable image.
pub trait Canvas {
    /// Current pixel size (reflects any growth already applied).
    fn dimensions(&self) -> ImageDimensions;

    /// Fill the rectangle `x` × `y` with `color`, blending translucent colors.
    fn fill_rect(&mut self, x: Span, y: Span, color: Color);

    /// Composite `overlay` with its top-left corner at `at`.
    fn place(&mut self, overlay: &Self, at: PlacementPosition);

    /// Draw `text` at `anchor` according to `style`.
    fn text(
        &mut self,
        text: &str,
        anchor: PlacementPosition,
        style: &TextStyle,
    ) -> Result<(), WatermarkError>;

    /// Add rows to the canvas.
    fn grow(&mut self, growth: CanvasGrowth);

    /// Encode in a format matching the source.
    fn encode(&self) -> Result<EncodedImage, WatermarkError>;
}

/// Loads images into canvases.
pub trait Driver {
    type Image: Canvas;

    fn read(&self, path: &Path) -> Result<Self::Image, WatermarkError>;
}
