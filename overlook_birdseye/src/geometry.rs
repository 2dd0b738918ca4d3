// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use overlook_view::{ImageDimensions, SurfaceDimensions, ViewportRect};

/// Placement of the thumbnail inside the overview control.
///
/// The thumbnail is the whole image scaled by
/// `min(surface_w / image_w, surface_h / image_h)` and centered in the
/// control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbnailGeometry {
    scale: f64,
    rect: Rect,
}

impl ThumbnailGeometry {
    /// Lays out `image` inside a control of size `surface`.
    ///
    /// Returns `None` if either the image or the control is empty.
    #[must_use]
    pub fn layout(image: ImageDimensions, surface: SurfaceDimensions) -> Option<Self> {
        if !image.is_positive() || !surface.is_positive() {
            return None;
        }
        let scale = (surface.width / image.width).min(surface.height / image.height);
        let size = Size::new(image.width * scale, image.height * scale);
        let origin = Point::new(
            (surface.width - size.width) / 2.0,
            (surface.height - size.height) / 2.0,
        );
        Some(Self {
            scale,
            rect: Rect::from_origin_size(origin, size),
        })
    }

    /// Image pixels → thumbnail pixels.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Where the thumbnail is drawn, in control pixels.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Maps a normalized viewport onto the thumbnail, in control pixels.
    ///
    /// The result never leaves the thumbnail: the origin is clamped so the
    /// rectangle fits, then the size is capped at the thumbnail size.
    #[must_use]
    pub fn indicator_rect(&self, viewport: ViewportRect) -> Rect {
        let thumb = self.rect;
        let (tw, th) = (thumb.width(), thumb.height());

        let width = viewport.width * tw;
        let height = viewport.height * th;
        let left = (thumb.x0 + viewport.x * tw)
            .min(thumb.x0 + tw - width)
            .max(thumb.x0);
        let top = (thumb.y0 + viewport.y * th)
            .min(thumb.y0 + th - height)
            .max(thumb.y0);

        Rect::from_origin_size(
            Point::new(left, top),
            Size::new(width.min(tw).max(0.0), height.min(th).max(0.0)),
        )
    }

    /// Converts a control-pixel position into a normalized image point,
    /// clamped to `[0, 1]` on both axes.
    #[must_use]
    pub fn normalized_point(&self, pixel: Point) -> Point {
        let thumb = self.rect;
        let x = (pixel.x - thumb.x0) / thumb.width();
        let y = (pixel.y - thumb.y0) / thumb.height();
        Point::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
    }
}
