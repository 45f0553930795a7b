//! Panel layout for the three watermark variants.
//!
//! Layout happens in two phases. [`Layout`] holds what the configuration
//! asks for. [`Layout::adjust`] looks at the target image and the optional
//! logo, grows the working box to make room for the logo, and freezes the
//! result in an [`AdjustedLayout`]. Every later step (fit check, placement,
//! logo and text anchors, background) reads the frozen box.
//!
//! # Geometries
//!
//! - **Base**: the default variant's corner panel. Horizontally flush with
//!   the left or right edge, vertically inset by 1/4 of the image height
//!   (collapsing to flush when the inset does not fit).
//! - **Wide**: shared by Inside and Outside. The panel spans the full image
//!   width and sits flush against the top or bottom edge, with text
//!   right-aligned and vertically centered.
//!
//! A wide variant whose logo leaves no room next to the preferred panel width
//! falls back to the base geometry for that image. The decision is made once
//! in `adjust` and carried as [`Geometry`] through the remaining steps.
//!
//! Outside additionally grows the canvas by the panel height when (and only
//! when) the wide geometry is in effect. The added rows are the panel's
//! background.

use super::canvas::{CanvasGrowth, Color, HorizontalAlign, VerticalAlign};
use super::config::{Alignment, Variant, WatermarkConfig};
use super::position::{
    end_anchored, start_anchored, ImageDimensions, Placement, PlacementPosition, Span,
};
use crate::constants::{
    BASE_LOGO_PADDING_X, BASE_LOGO_PADDING_Y, BASE_VERTICAL_INSET_DIVISOR, PANEL_PADDING,
    WIDE_LOGO_PADDING_X, WIDE_LOGO_PADDING_Y,
};

/// Working size of the panel being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingBox {
    pub width: u32,
    pub height: u32,
}

impl WorkingBox {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Geometry chosen for a panel during `adjust`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    /// Corner panel of the default variant.
    Base,
    /// Full-width edge panel of the inside/outside variants.
    Wide,
}

/// Where and how the panel text is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub anchor: PlacementPosition,
    pub align: HorizontalAlign,
    pub valign: VerticalAlign,
}

/// Requested layout, before looking at any image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    variant: Variant,
    alignment: Alignment,
    preferred: WorkingBox,
}

impl Layout {
    pub fn new(variant: Variant, alignment: Alignment, preferred: WorkingBox) -> Self {
        Self {
            variant,
            alignment,
            preferred,
        }
    }

    pub fn from_config(config: &WatermarkConfig) -> Self {
        Self::new(
            config.variant,
            config.alignment,
            WorkingBox::new(config.width, config.height),
        )
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Size the panel for `image` and the optional `logo`.
    pub fn adjust(&self, image: ImageDimensions, logo: Option<ImageDimensions>) -> AdjustedLayout {
        let (panel, geometry) = match self.variant {
            Variant::Default => (base_adjust(self.preferred, logo), Geometry::Base),
            Variant::Inside | Variant::Outside => wide_adjust(self.preferred, image, logo),
        };

        // Rows are only added when the panel will fit on the grown canvas
        let growth = match (self.variant, geometry) {
            (Variant::Outside, Geometry::Wide) if panel.width <= image.width => {
                Some(CanvasGrowth {
                    rows: panel.height,
                    edge: self.alignment.edge(),
                    fill: Color::dark_gray(),
                })
            }
            _ => None,
        };

        AdjustedLayout {
            variant: self.variant,
            alignment: self.alignment,
            panel,
            geometry,
            growth,
        }
    }
}

/// Default variant: widen to the padded logo if needed and stack the logo
/// above the text.
fn base_adjust(preferred: WorkingBox, logo: Option<ImageDimensions>) -> WorkingBox {
    let Some(logo) = logo else {
        return preferred;
    };

    let logo_width = logo.width.saturating_add(BASE_LOGO_PADDING_X);
    let logo_height = logo.height.saturating_add(BASE_LOGO_PADDING_Y);

    WorkingBox {
        width: preferred.width.max(logo_width),
        height: preferred.height.saturating_add(logo_height),
    }
}

/// Wide variants: span the image width and put the logo beside the text,
/// unless logo and preferred panel together do not leave room on the image.
fn wide_adjust(
    preferred: WorkingBox,
    image: ImageDimensions,
    logo: Option<ImageDimensions>,
) -> (WorkingBox, Geometry) {
    let Some(logo) = logo else {
        return (base_adjust(preferred, None), Geometry::Wide);
    };

    let logo_width = logo.width.saturating_add(WIDE_LOGO_PADDING_X);
    let logo_height = logo.height.saturating_add(WIDE_LOGO_PADDING_Y);

    if preferred.width.saturating_add(logo_width) >= image.width {
        return (base_adjust(preferred, Some(logo)), Geometry::Base);
    }

    let panel = WorkingBox {
        width: image.width,
        height: preferred.height.max(logo_height),
    };
    (panel, Geometry::Wide)
}

/// A panel sized for one particular image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustedLayout {
    variant: Variant,
    alignment: Alignment,
    panel: WorkingBox,
    geometry: Geometry,
    growth: Option<CanvasGrowth>,
}

impl AdjustedLayout {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Adjusted panel size.
    pub fn panel(&self) -> WorkingBox {
        self.panel
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Whether a wide variant had to fall back to the base geometry.
    pub fn is_fallback(&self) -> bool {
        self.variant.is_wide() && self.geometry == Geometry::Base
    }

    /// Rows to add to the canvas before placing the panel.
    pub fn growth(&self) -> Option<CanvasGrowth> {
        self.growth
    }

    /// Whether the panel fits on `image` (measured after any growth).
    pub fn fits(&self, image: ImageDimensions) -> bool {
        self.panel.width <= image.width && self.panel.height <= image.height
    }

    /// Horizontal extent of the panel.
    pub fn x(&self, image: ImageDimensions) -> Span {
        match self.geometry {
            Geometry::Base if self.alignment.left => {
                start_anchored(image.width, self.panel.width, 0)
            }
            Geometry::Base => end_anchored(image.width, self.panel.width, 0),
            Geometry::Wide => Span::new(0, image.width),
        }
    }

    /// Vertical extent of the panel.
    pub fn y(&self, image: ImageDimensions) -> Span {
        let offset = match self.geometry {
            Geometry::Base => image.height / BASE_VERTICAL_INSET_DIVISOR,
            Geometry::Wide => 0,
        };

        if self.alignment.top {
            start_anchored(image.height, self.panel.height, offset)
        } else {
            end_anchored(image.height, self.panel.height, offset)
        }
    }

    pub fn placement(&self, image: ImageDimensions) -> Placement {
        Placement {
            x: self.x(image),
            y: self.y(image),
        }
    }

    /// Background fill drawn over the panel area, if any.
    ///
    /// The wide outside panel has none: the rows added by [`Self::growth`]
    /// already carry its color.
    pub fn background(&self) -> Option<Color> {
        match (self.variant, self.geometry) {
            (Variant::Outside, Geometry::Wide) => None,
            _ => Some(Color::translucent_gray()),
        }
    }

    /// Top-left corner of the logo inside the panel.
    pub fn logo_position(&self, placement: &Placement) -> PlacementPosition {
        let origin = placement.origin();
        let padding = PANEL_PADDING as i32;
        PlacementPosition::new(origin.x + padding, origin.y + padding)
    }

    /// Anchor and alignment of the panel text.
    pub fn text(&self, image: ImageDimensions, placement: &Placement) -> TextPlacement {
        match self.geometry {
            Geometry::Base => TextPlacement {
                anchor: PlacementPosition::new(
                    (placement.x.start + PANEL_PADDING) as i32,
                    placement.y.end as i32 - PANEL_PADDING as i32,
                ),
                align: HorizontalAlign::Left,
                valign: VerticalAlign::Bottom,
            },
            Geometry::Wide => {
                let half = self.panel.height / 2;
                let y = if self.alignment.top {
                    start_anchored(image.height, 0, half).start
                } else {
                    end_anchored(image.height, 0, half).end
                };

                TextPlacement {
                    anchor: PlacementPosition::new(
                        image.width as i32 - PANEL_PADDING as i32,
                        y as i32,
                    ),
                    align: HorizontalAlign::Right,
                    valign: VerticalAlign::Center,
                }
            }
        }
    }
}
