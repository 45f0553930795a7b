// Watermark facade unit tests
// A recording canvas captures every draw call so the pipeline can be checked
// without decoding pixels.

use shortener::watermark::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
enum Draw {
    Rect { x: Span, y: Span, color: Color },
    Place { at: PlacementPosition, size: ImageDimensions },
    Text { text: String, anchor: PlacementPosition, style: TextStyle },
    Grow(CanvasGrowth),
}

#[derive(Debug, Clone)]
struct RecordingCanvas {
    dims: ImageDimensions,
    draws: Vec<Draw>,
}

impl RecordingCanvas {
    fn new(width: u32, height: u32) -> Self {
        Self {
            dims: ImageDimensions::new(width, height),
            draws: Vec::new(),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn dimensions(&self) -> ImageDimensions {
        self.dims
    }

    fn fill_rect(&mut self, x: Span, y: Span, color: Color) {
        self.draws.push(Draw::Rect { x, y, color });
    }

    fn place(&mut self, overlay: &Self, at: PlacementPosition) {
        self.draws.push(Draw::Place {
            at,
            size: overlay.dims,
        });
    }

    fn text(
        &mut self,
        text: &str,
        anchor: PlacementPosition,
        style: &TextStyle,
    ) -> Result<(), WatermarkError> {
        self.draws.push(Draw::Text {
            text: text.to_string(),
            anchor,
            style: style.clone(),
        });
        Ok(())
    }

    fn grow(&mut self, growth: CanvasGrowth) {
        self.dims.height += growth.rows;
        self.draws.push(Draw::Grow(growth));
    }

    fn encode(&self) -> Result<EncodedImage, WatermarkError> {
        let summary = format!(
            "{}x{} {} draws",
            self.dims.width,
            self.dims.height,
            self.draws.len()
        );
        Ok(EncodedImage::new(summary.into_bytes(), "image/png"))
    }
}

#[derive(Debug, Default)]
struct RecordingDriver {
    images: HashMap<PathBuf, ImageDimensions>,
}

impl RecordingDriver {
    fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.images
            .insert(PathBuf::from(path), ImageDimensions::new(width, height));
        self
    }
}

impl Driver for RecordingDriver {
    type Image = RecordingCanvas;

    fn read(&self, path: &Path) -> Result<RecordingCanvas, WatermarkError> {
        self.images
            .get(path)
            .map(|dims| RecordingCanvas::new(dims.width, dims.height))
            .ok_or_else(|| WatermarkError::asset_load(path, "no such file"))
    }
}

fn config(variant: Variant, logo: Option<&str>) -> WatermarkConfig {
    WatermarkConfig {
        variant,
        logo: logo.map(PathBuf::from),
        ..WatermarkConfig::default()
    }
}

fn text_style(align: HorizontalAlign, valign: VerticalAlign) -> TextStyle {
    TextStyle {
        font: FontSpec::Builtin(5),
        size: 16.0,
        color: Color::white(),
        align,
        valign,
    }
}

/// Run the pipeline on an image of the given size and return the draws and
/// the final canvas size.
fn render(
    config: WatermarkConfig,
    size: (u32, u32),
    logo: Option<(u32, u32)>,
    text: &str,
) -> (Vec<Draw>, ImageDimensions) {
    let watermark = Watermark::with_driver(config, RecordingDriver::default());
    let mut image = RecordingCanvas::new(size.0, size.1);
    let logo = logo.map(|(w, h)| RecordingCanvas::new(w, h));

    watermark.render(&mut image, logo.as_ref(), text).unwrap();
    (image.draws, image.dims)
}

#[test]
fn test_small_image_is_left_untouched() {
    let (draws, dims) = render(config(Variant::Default, None), (100, 100), None, "example.com");
    assert!(draws.is_empty());
    assert_eq!(dims, ImageDimensions::new(100, 100));
}

#[test]
fn test_default_panel_on_large_image() {
    let (draws, _) = render(config(Variant::Default, None), (1000, 1000), None, "example.com");

    assert_eq!(
        draws,
        vec![
            Draw::Rect {
                x: Span::new(730, 1000),
                y: Span::new(715, 750),
                color: Color::translucent_gray(),
            },
            Draw::Text {
                text: "example.com".to_string(),
                anchor: PlacementPosition::new(740, 740),
                style: text_style(HorizontalAlign::Left, VerticalAlign::Bottom),
            },
        ]
    );
}

#[test]
fn test_logo_too_tall_for_small_image() {
    // 270 x 75 panel on a 200 x 200 image
    let (draws, dims) = render(
        config(Variant::Default, Some("logo.png")),
        (200, 200),
        Some((50, 30)),
        "example.com",
    );
    assert!(draws.is_empty());
    assert_eq!(dims, ImageDimensions::new(200, 200));
}

#[test]
fn test_default_panel_with_logo() {
    let (draws, _) = render(
        config(Variant::Default, Some("logo.png")),
        (1000, 1000),
        Some((50, 30)),
        "example.com",
    );

    // 270 x 75 panel, inset 250 from the bottom
    assert_eq!(
        draws,
        vec![
            Draw::Rect {
                x: Span::new(730, 1000),
                y: Span::new(675, 750),
                color: Color::translucent_gray(),
            },
            Draw::Place {
                at: PlacementPosition::new(740, 685),
                size: ImageDimensions::new(50, 30),
            },
            Draw::Text {
                text: "example.com".to_string(),
                anchor: PlacementPosition::new(740, 740),
                style: text_style(HorizontalAlign::Left, VerticalAlign::Bottom),
            },
        ]
    );
}

#[test]
fn test_empty_text_draws_no_text() {
    let (draws, _) = render(config(Variant::Default, None), (1000, 1000), None, "");
    assert_eq!(draws.len(), 1);
    assert!(matches!(draws[0], Draw::Rect { .. }));
}

#[test]
fn test_inside_band_over_bottom_edge() {
    let (draws, dims) = render(
        config(Variant::Inside, Some("logo.png")),
        (1000, 500),
        Some((100, 50)),
        "sho.rt/aB3x",
    );

    assert_eq!(dims, ImageDimensions::new(1000, 500));
    assert_eq!(
        draws,
        vec![
            Draw::Rect {
                x: Span::new(0, 1000),
                y: Span::new(430, 500),
                color: Color::translucent_gray(),
            },
            Draw::Place {
                at: PlacementPosition::new(10, 440),
                size: ImageDimensions::new(100, 50),
            },
            Draw::Text {
                text: "sho.rt/aB3x".to_string(),
                anchor: PlacementPosition::new(990, 465),
                style: text_style(HorizontalAlign::Right, VerticalAlign::Center),
            },
        ]
    );
}

#[test]
fn test_outside_grows_then_draws_on_new_rows() {
    let (draws, dims) = render(
        config(Variant::Outside, Some("logo.png")),
        (1000, 500),
        Some((100, 50)),
        "sho.rt",
    );

    // Height grows by exactly the adjusted panel height, width unchanged
    assert_eq!(dims, ImageDimensions::new(1000, 570));
    assert_eq!(
        draws,
        vec![
            Draw::Grow(CanvasGrowth {
                rows: 70,
                edge: Edge::Bottom,
                fill: Color::dark_gray(),
            }),
            Draw::Place {
                at: PlacementPosition::new(10, 510),
                size: ImageDimensions::new(100, 50),
            },
            Draw::Text {
                text: "sho.rt".to_string(),
                anchor: PlacementPosition::new(990, 535),
                style: text_style(HorizontalAlign::Right, VerticalAlign::Center),
            },
        ]
    );
}

#[test]
fn test_outside_top_grows_above() {
    let mut config = config(Variant::Outside, Some("logo.png"));
    config.alignment = Alignment::new(true, false);

    let (draws, dims) = render(config, (1000, 500), Some((100, 50)), "sho.rt");

    assert_eq!(dims, ImageDimensions::new(1000, 570));
    assert!(matches!(
        draws[0],
        Draw::Grow(CanvasGrowth {
            rows: 70,
            edge: Edge::Top,
            ..
        })
    ));
    assert!(draws.contains(&Draw::Place {
        at: PlacementPosition::new(10, 10),
        size: ImageDimensions::new(100, 50),
    }));
}

#[test]
fn test_outside_without_logo_on_small_image_is_untouched() {
    let (draws, dims) = render(config(Variant::Outside, None), (100, 100), None, "example.com");
    assert!(draws.is_empty());
    assert_eq!(dims, ImageDimensions::new(100, 100));
}

#[test]
fn test_oversized_panel_width_draws_nothing() {
    let config = WatermarkConfig {
        width: 4_294_967_000,
        ..config(Variant::Inside, Some("logo.png"))
    };
    let (draws, dims) = render(config, (1000, 1000), Some((400, 40)), "example.com");
    assert!(draws.is_empty());
    assert_eq!(dims, ImageDimensions::new(1000, 1000));
}

#[test]
fn test_outside_fallback_overlays_like_default() {
    let outside = render(
        config(Variant::Outside, Some("logo.png")),
        (400, 800),
        Some((150, 30)),
        "sho.rt",
    );
    let default = render(
        config(Variant::Default, Some("logo.png")),
        (400, 800),
        Some((150, 30)),
        "sho.rt",
    );

    assert_eq!(outside.1, ImageDimensions::new(400, 800));
    assert!(!outside.0.iter().any(|draw| matches!(draw, Draw::Grow(_))));
    assert_eq!(outside, default);
}

#[test]
fn test_apply_reads_logo_through_driver() {
    let driver = RecordingDriver::default()
        .with_image("photo.png", 1000, 500)
        .with_image("logo.png", 100, 50);
    let watermark = Watermark::with_driver(config(Variant::Outside, Some("logo.png")), driver);

    let encoded = watermark.apply(Path::new("photo.png"), "sho.rt").unwrap();
    assert_eq!(encoded.data, b"1000x570 3 draws".to_vec());
    assert_eq!(encoded.media_type, "image/png");
}

#[test]
fn test_apply_fails_when_logo_cannot_be_read() {
    let driver = RecordingDriver::default().with_image("photo.png", 1000, 500);
    let watermark = Watermark::with_driver(config(Variant::Default, Some("logo.png")), driver);

    let err = watermark.apply(Path::new("photo.png"), "sho.rt").unwrap_err();
    match err {
        WatermarkError::AssetLoad { path, .. } => assert_eq!(path, PathBuf::from("logo.png")),
        other => panic!("expected AssetLoad, got {:?}", other),
    }
}

#[test]
fn test_apply_fails_when_image_cannot_be_read() {
    let watermark =
        Watermark::with_driver(config(Variant::Default, None), RecordingDriver::default());
    assert!(matches!(
        watermark.apply(Path::new("missing.png"), "sho.rt"),
        Err(WatermarkError::AssetLoad { .. })
    ));
}

#[test]
fn test_one_watermark_serves_many_images() {
    let driver = RecordingDriver::default()
        .with_image("small.png", 100, 100)
        .with_image("large.png", 1000, 1000);
    let watermark = Watermark::with_driver(config(Variant::Default, None), driver);

    let small = watermark.apply(Path::new("small.png"), "sho.rt").unwrap();
    let large = watermark.apply(Path::new("large.png"), "sho.rt").unwrap();

    assert_eq!(small.data, b"100x100 0 draws".to_vec());
    assert_eq!(large.data, b"1000x1000 2 draws".to_vec());
}
