//! Geometry helpers for panel placement.
//!
//! Every layout variant positions its panel with one of two anchoring rules
//! along each axis:
//!
//! - [`end_anchored`]: the interval ends `offset` pixels before the far edge
//! - [`start_anchored`]: the interval starts `offset` pixels after zero
//!
//! Neither rule fails. When the offset would push the interval out of the
//! axis, the offset collapses to zero and the interval sits flush against the
//! anchoring edge instead.
//!
//! # Example
//!
//! ```
//! use shortener::watermark::position::{end_anchored, Span};
//!
//! // 35px panel, inset by 1/4 of a 1000px tall image
//! assert_eq!(end_anchored(1000, 35, 250), Span::new(715, 750));
//!
//! // Offset too large: flush against the bottom edge
//! assert_eq!(end_anchored(100, 35, 80), Span::new(65, 100));
//! ```

/// Dimensions of an image (target canvas or logo).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A single point on the target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementPosition {
    pub x: i32,
    pub y: i32,
}

impl PlacementPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Half-open pixel interval `[start, end)` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where a panel lands on the (possibly grown) target image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: Span,
    pub y: Span,
}

impl Placement {
    /// Top-left corner of the panel.
    pub fn origin(&self) -> PlacementPosition {
        PlacementPosition::new(self.x.start as i32, self.y.start as i32)
    }
}

/// Interval of length `range` ending `offset` pixels before `total`.
///
/// If `offset + range > total`, the offset is ignored and the interval ends
/// at `total`. A `range` wider than `total` starts at zero and keeps its
/// length; callers check fit separately.
pub fn end_anchored(total: u32, range: u32, offset: u32) -> Span {
    let end = if offset.saturating_add(range) > total {
        total
    } else {
        total - offset
    };

    let start = end.saturating_sub(range);
    Span::new(start, start + range)
}

/// Interval of length `range` starting `offset` pixels after zero.
///
/// If `offset + range > total`, the offset is ignored and the interval starts
/// at zero.
pub fn start_anchored(total: u32, range: u32, offset: u32) -> Span {
    let start = if offset.saturating_add(range) > total {
        0
    } else {
        offset
    };

    Span::new(start, start + range)
}
