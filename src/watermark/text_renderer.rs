//! Text layer rendering.
//!
//! Text is rendered into a tight, transparent RGBA layer which the raster
//! canvas then blends at an origin derived from the anchor and alignment.
//!
//! # Fonts
//!
//! - [`FontSpec::File`]: TrueType/OpenType file rendered with `ab_glyph` at
//!   the requested pixel size, with kerning
//! - [`FontSpec::Builtin`]: the embedded bitmap ramp; pixel size is ignored
//!
//! # Example
//!
//! ```
//! use shortener::watermark::canvas::{Color, HorizontalAlign, TextStyle, VerticalAlign};
//! use shortener::watermark::config::FontSpec;
//! use shortener::watermark::text_renderer::render_text;
//!
//! let style = TextStyle {
//!     font: FontSpec::Builtin(5),
//!     size: 16.0,
//!     color: Color::white(),
//!     align: HorizontalAlign::Left,
//!     valign: VerticalAlign::Bottom,
//! };
//!
//! let layer = render_text("example.com", &style).unwrap();
//! assert!(layer.width() > 0);
//! ```

use super::bitmap_font;
use super::canvas::{Color, HorizontalAlign, TextStyle, VerticalAlign};
use super::config::FontSpec;
use super::position::PlacementPosition;
use super::WatermarkError;
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::path::Path;

impl From<Color> for Rgba<u8> {
    fn from(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, color.a])
    }
}

/// Load a font file.
pub fn load_font(path: &Path) -> Result<FontVec, WatermarkError> {
    let data = std::fs::read(path).map_err(|e| WatermarkError::asset_load(path, e))?;
    FontVec::try_from_vec(data).map_err(|e| WatermarkError::asset_load(path, e))
}

/// Render `text` into a transparent layer sized to the text.
pub fn render_text(text: &str, style: &TextStyle) -> Result<RgbaImage, WatermarkError> {
    match &style.font {
        FontSpec::Builtin(index) => Ok(bitmap_font::render(
            text,
            bitmap_font::scale_for(*index),
            style.color.into(),
        )),
        FontSpec::File(path) => {
            let font = load_font(path)?;
            Ok(render_outline_text(&font, text, style.size, style.color))
        }
    }
}

/// Size of an outline font rendering, as (width, height).
pub fn measure_outline_text<F: Font>(font: &F, text: &str, font_size: f32) -> (u32, u32) {
    let scaled_font = font.as_scaled(PxScale::from(font_size));

    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            width += scaled_font.kern(prev, glyph_id);
        }

        width += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    (width.ceil() as u32, scaled_font.height().ceil() as u32)
}

fn render_outline_text<F: Font>(font: &F, text: &str, font_size: f32, color: Color) -> RgbaImage {
    let scale = PxScale::from(font_size);
    let scaled_font = font.as_scaled(scale);

    let (width, height) = measure_outline_text(font, text, font_size);
    let (canvas_width, canvas_height) = (width.max(1), height.max(1));
    let mut layer = RgbaImage::new(canvas_width, canvas_height);

    let baseline_y = scaled_font.ascent();
    let mut cursor_x = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for c in text.chars() {
        let glyph_id = scaled_font.glyph_id(c);

        if let Some(prev) = prev_glyph {
            cursor_x += scaled_font.kern(prev, glyph_id);
        }

        let glyph = glyph_id.with_scale_and_position(scale, ab_glyph::point(cursor_x, baseline_y));

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();

            outlined.draw(|px, py, coverage| {
                let x = px as i32 + bounds.min.x as i32;
                let y = py as i32 + bounds.min.y as i32;

                if x >= 0 && y >= 0 && x < canvas_width as i32 && y < canvas_height as i32 {
                    let pixel_alpha = (coverage.clamp(0.0, 1.0) * color.a as f32) as u8;
                    let pixel = Rgba([color.r, color.g, color.b, pixel_alpha]);

                    // Glyph boxes may overlap with kerning
                    let existing = layer.get_pixel(x as u32, y as u32);
                    if pixel_alpha > existing[3] {
                        layer.put_pixel(x as u32, y as u32, pixel);
                    }
                }
            });
        }

        cursor_x += scaled_font.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    layer
}

/// Top-left corner for a layer of `size` drawn at `anchor` with the given
/// alignment.
pub fn text_origin(
    anchor: PlacementPosition,
    size: (u32, u32),
    align: HorizontalAlign,
    valign: VerticalAlign,
) -> PlacementPosition {
    let (width, height) = (size.0 as i32, size.1 as i32);

    let x = match align {
        HorizontalAlign::Left => anchor.x,
        HorizontalAlign::Right => anchor.x - width,
    };
    let y = match valign {
        VerticalAlign::Bottom => anchor.y - height,
        VerticalAlign::Center => anchor.y - height / 2,
    };

    PlacementPosition::new(x, y)
}
