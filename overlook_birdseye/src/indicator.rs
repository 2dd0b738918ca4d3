// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Stroke widths of the viewport indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndicatorStyle {
    /// Stroke width while the pointer is outside the overview.
    pub stroke_width: f64,
    /// Stroke width while the pointer hovers the overview.
    pub hover_stroke_width: f64,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            hover_stroke_width: 3.0,
        }
    }
}

/// Area to dim around the indicator: `outer` minus `hole`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskRegion {
    /// The whole thumbnail.
    pub outer: Rect,
    /// The visible viewport, left undimmed.
    pub hole: Rect,
}

impl MaskRegion {
    /// Splits the mask into four non-overlapping bands (above, below, left
    /// and right of the hole) for renderers without even-odd fills.
    ///
    /// Bands may be empty when the hole touches an edge.
    #[must_use]
    pub fn bands(&self) -> [Rect; 4] {
        let outer = self.outer;
        let hole = self.hole.intersect(outer);
        [
            Rect::new(outer.x0, outer.y0, outer.x1, hole.y0),
            Rect::new(outer.x0, hole.y1, outer.x1, outer.y1),
            Rect::new(outer.x0, hole.y0, hole.x0, hole.y1),
            Rect::new(hole.x1, hole.y0, outer.x1, hole.y1),
        ]
    }
}

/// Everything a host needs to draw the viewport indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Indicator {
    /// Indicator outline, in overview control pixels.
    pub rect: Rect,
    /// Region to dim outside the indicator.
    pub mask: MaskRegion,
    /// Current stroke width (wider while hovered).
    pub stroke_width: f64,
}
