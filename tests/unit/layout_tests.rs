// Layout unit tests
// Geometry properties checked against the public layout API

use rstest::rstest;
use shortener::watermark::*;

fn dims(width: u32, height: u32) -> ImageDimensions {
    ImageDimensions::new(width, height)
}

fn layout(variant: Variant, top: bool, left: bool) -> Layout {
    Layout::new(variant, Alignment::new(top, left), WorkingBox::new(270, 35))
}

#[test]
fn test_anchored_spans_have_requested_length_and_stay_in_bounds() {
    for total in [0u32, 1, 7, 35, 100, 999] {
        for range in 0..=total.min(40) {
            for offset in [0u32, 1, 5, 17, total / 4, total, total + 3] {
                for span in [
                    end_anchored(total, range, offset),
                    start_anchored(total, range, offset),
                ] {
                    assert_eq!(span.len(), range, "total={total} range={range} offset={offset}");
                    assert!(span.end <= total);
                }
            }
        }
    }
}

#[test]
fn test_overflowing_offset_collapses_to_zero() {
    for total in [10u32, 35, 120] {
        for range in 0..=total {
            let offset = total - range + 1;
            assert_eq!(end_anchored(total, range, offset), end_anchored(total, range, 0));
            assert_eq!(start_anchored(total, range, offset), start_anchored(total, range, 0));
        }
    }
}

#[rstest]
#[case(1000, 1000, Span::new(730, 1000), Span::new(715, 750))]
#[case(270, 35, Span::new(0, 270), Span::new(0, 35))]
#[case(640, 480, Span::new(370, 640), Span::new(325, 360))]
#[case(400, 40, Span::new(130, 400), Span::new(5, 40))]
#[case(300, 139, Span::new(30, 300), Span::new(70, 105))]
#[case(300, 46, Span::new(30, 300), Span::new(0, 35))]
fn test_default_bottom_right_placement(
    #[case] width: u32,
    #[case] height: u32,
    #[case] x: Span,
    #[case] y: Span,
) {
    let image = dims(width, height);
    let adjusted = layout(Variant::Default, false, false).adjust(image, None);

    assert!(adjusted.fits(image));
    assert_eq!(adjusted.placement(image), Placement { x, y });
}

#[rstest]
#[case(Variant::Inside)]
#[case(Variant::Outside)]
fn test_wide_variant_fallback_equivalence(#[case] variant: Variant) {
    let logo = Some(dims(200, 60));
    let image = dims(450, 700);

    let wide = layout(variant, false, true).adjust(image, logo);
    let default = layout(Variant::Default, false, true).adjust(image, logo);

    assert!(wide.is_fallback());
    assert_eq!(wide.geometry(), Geometry::Base);
    assert_eq!(wide.panel(), default.panel());
    assert_eq!(wide.growth(), None);

    let placement = wide.placement(image);
    assert_eq!(placement, default.placement(image));
    assert_eq!(wide.text(image, &placement), default.text(image, &placement));
}

#[rstest]
#[case(false, Edge::Bottom)]
#[case(true, Edge::Top)]
fn test_outside_growth_matches_panel_height(#[case] top: bool, #[case] edge: Edge) {
    for (logo_width, logo_height) in [(10u32, 5u32), (60, 40), (400, 120)] {
        let image = dims(1200, 800);
        let adjusted = layout(Variant::Outside, top, false)
            .adjust(image, Some(dims(logo_width, logo_height)));

        let growth = adjusted.growth().expect("wide outside layout grows");
        assert_eq!(growth.rows, adjusted.panel().height);
        assert_eq!(growth.edge, edge);
        assert_eq!(adjusted.panel().width, image.width);
    }
}

#[test]
fn test_inside_never_grows() {
    for logo in [None, Some(dims(50, 50)), Some(dims(900, 50))] {
        let adjusted = layout(Variant::Inside, false, false).adjust(dims(1000, 600), logo);
        assert!(adjusted.growth().is_none());
    }
}
