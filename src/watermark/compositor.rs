//! Pixel operations on RGBA buffers.
//!
//! All blending uses the Porter-Duff "over" operator. Every operation clips
//! to the target bounds, so callers may pass regions that hang off the edge.

use super::canvas::{CanvasGrowth, Color, Edge};
use super::position::{PlacementPosition, Span};
use image::{Rgba, RgbaImage};

/// Blend `layer` onto `target` with its top-left corner at `position`.
pub fn blend_layer(target: &mut RgbaImage, layer: &RgbaImage, position: PlacementPosition) {
    let target_width = target.width() as i64;
    let target_height = target.height() as i64;
    let (px, py) = (position.x as i64, position.y as i64);

    let x_start = px.max(0);
    let y_start = py.max(0);
    let x_end = (px + layer.width() as i64).min(target_width);
    let y_end = (py + layer.height() as i64).min(target_height);

    for ty in y_start..y_end {
        for tx in x_start..x_end {
            let src = layer.get_pixel((tx - px) as u32, (ty - py) as u32);
            let dst = target.get_pixel(tx as u32, ty as u32);
            let blended = blend_pixels(*dst, *src);
            target.put_pixel(tx as u32, ty as u32, blended);
        }
    }
}

/// Blend `color` over the rectangle `x` × `y`.
pub fn fill_rect(target: &mut RgbaImage, x: Span, y: Span, color: Color) {
    let fill: Rgba<u8> = color.into();
    let x_end = x.end.min(target.width());
    let y_end = y.end.min(target.height());

    for ty in y.start..y_end {
        for tx in x.start..x_end {
            let pixel = if fill[3] == 255 {
                fill
            } else {
                blend_pixels(*target.get_pixel(tx, ty), fill)
            };
            target.put_pixel(tx, ty, pixel);
        }
    }
}

/// New buffer `growth.rows` taller than `source`, with the added rows on
/// `growth.edge` filled with `growth.fill` and the source copied against the
/// opposite edge.
pub fn grow_canvas(source: &RgbaImage, growth: CanvasGrowth) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut grown = RgbaImage::from_pixel(
        width,
        height.saturating_add(growth.rows),
        growth.fill.into(),
    );

    // Source pixels stay anchored at the edge opposite the new rows
    let offset = match growth.edge.opposite() {
        Edge::Bottom => growth.rows,
        Edge::Top => 0,
    };

    for (x, y, pixel) in source.enumerate_pixels() {
        grown.put_pixel(x, y + offset, *pixel);
    }

    grown
}

/// Blend two pixels using alpha compositing.
///
/// Uses the "over" operator: result = foreground + background * (1 - foreground.alpha)
pub fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = foreground[3] as f32 / 255.0;
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}
