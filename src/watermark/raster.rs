//! Raster image collaborator built on the `image` crate.
//!
//! [`RasterDriver`] decodes files into [`RasterCanvas`]es, which keep an RGBA
//! buffer plus the format the file was read in so the result can be encoded
//! back to the same format.

use super::canvas::{Canvas, CanvasGrowth, Color, Driver, EncodedImage, TextStyle};
use super::compositor::{blend_layer, fill_rect, grow_canvas};
use super::position::{ImageDimensions, PlacementPosition, Span};
use super::text_renderer::{render_text, text_origin};
use super::WatermarkError;
use crate::constants::JPEG_QUALITY;
use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat, ImageOutputFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Loads images from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterDriver;

impl RasterDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Driver for RasterDriver {
    type Image = RasterCanvas;

    fn read(&self, path: &Path) -> Result<RasterCanvas, WatermarkError> {
        let reader = ImageReader::open(path)
            .map_err(|e| WatermarkError::asset_load(path, e))?
            .with_guessed_format()
            .map_err(|e| WatermarkError::asset_load(path, e))?;

        let format = reader
            .format()
            .ok_or_else(|| WatermarkError::asset_load(path, "unrecognized image format"))?;

        let image = reader
            .decode()
            .map_err(|e| WatermarkError::asset_load(path, e))?;

        Ok(RasterCanvas::new(image.to_rgba8(), format))
    }
}

/// In-memory RGBA image that remembers its source format.
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    pixels: RgbaImage,
    format: ImageFormat,
}

impl RasterCanvas {
    pub fn new(pixels: RgbaImage, format: ImageFormat) -> Self {
        Self { pixels, format }
    }

    /// Decode an in-memory image.
    pub fn from_bytes(data: &[u8]) -> Result<Self, WatermarkError> {
        let format = image::guess_format(data)
            .map_err(|e| WatermarkError::asset_load("<memory>", e))?;
        let image = image::load_from_memory_with_format(data, format)
            .map_err(|e| WatermarkError::asset_load("<memory>", e))?;
        Ok(Self::new(image.to_rgba8(), format))
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Format written by [`Canvas::encode`]: the source format when it can
    /// be encoded, PNG otherwise.
    pub fn output_format(&self) -> ImageFormat {
        match self.format {
            ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::Gif => self.format,
            _ => ImageFormat::Png,
        }
    }
}

impl Canvas for RasterCanvas {
    fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.pixels.width(), self.pixels.height())
    }

    fn fill_rect(&mut self, x: Span, y: Span, color: Color) {
        fill_rect(&mut self.pixels, x, y, color);
    }

    fn place(&mut self, overlay: &Self, at: PlacementPosition) {
        blend_layer(&mut self.pixels, &overlay.pixels, at);
    }

    fn text(
        &mut self,
        text: &str,
        anchor: PlacementPosition,
        style: &TextStyle,
    ) -> Result<(), WatermarkError> {
        let layer = render_text(text, style)?;
        let origin = text_origin(anchor, layer.dimensions(), style.align, style.valign);
        blend_layer(&mut self.pixels, &layer, origin);
        Ok(())
    }

    fn grow(&mut self, growth: CanvasGrowth) {
        self.pixels = grow_canvas(&self.pixels, growth);
    }

    fn encode(&self) -> Result<EncodedImage, WatermarkError> {
        let format = self.output_format();
        let image = DynamicImage::ImageRgba8(self.pixels.clone());

        let (image, output) = match format {
            // JPEG has no alpha channel
            ImageFormat::Jpeg => (
                DynamicImage::ImageRgb8(image.to_rgb8()),
                ImageOutputFormat::Jpeg(JPEG_QUALITY),
            ),
            ImageFormat::Gif => (image, ImageOutputFormat::Gif),
            _ => (image, ImageOutputFormat::Png),
        };

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, output)
            .map_err(|e| WatermarkError::Encode(e.to_string()))?;

        Ok(EncodedImage::new(buffer.into_inner(), media_type(format)))
    }
}

/// Content-Type for an encodable format.
pub fn media_type(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        _ => "image/png",
    }
}
