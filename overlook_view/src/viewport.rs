// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between the main view transform and a normalized viewport.
//!
//! The viewport is always a fraction of the *image*, independent of zoom, so
//! an overview only needs the rectangle to draw its indicator.

use kurbo::{Point, Rect, Vec2};

use crate::dims::{ImageDimensions, SurfaceDimensions};

/// Visible region of the image, normalized to `[0, 1]` on both axes.
///
/// Rectangles produced by this crate satisfy `0 <= x`, `0 <= y`,
/// `x + width <= 1`, `y + height <= 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    /// Left edge as a fraction of the image width.
    pub x: f64,
    /// Top edge as a fraction of the image height.
    pub y: f64,
    /// Width as a fraction of the image width.
    pub width: f64,
    /// Height as a fraction of the image height.
    pub height: f64,
}

impl ViewportRect {
    /// The whole image is visible.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Creates a viewport rectangle without any clamping.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when the whole image is visible, so there is nothing to
    /// navigate.
    #[must_use]
    pub fn covers_image(&self) -> bool {
        self.width >= 1.0 && self.height >= 1.0
    }

    /// Returns a viewport of this size whose center sits on `center`.
    ///
    /// `center` is a normalized image point. The resulting top-left corner is
    /// clamped so the viewport stays inside the image.
    #[must_use]
    pub fn centered_on(&self, center: Point) -> Self {
        Self {
            x: clamp_origin(center.x - self.width / 2.0, self.width),
            y: clamp_origin(center.y - self.height / 2.0, self.height),
            ..*self
        }
    }

    /// Returns the top-left corner as a point.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the viewport as a Kurbo [`Rect`] in normalized units.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// Keeps an origin inside `[0, 1 - extent]`, preferring `0` if the range is
/// empty.
fn clamp_origin(origin: f64, extent: f64) -> f64 {
    origin.min(1.0 - extent).max(0.0)
}

/// Derives the visible part of the image from the main view transform.
///
/// `scale` and `translate` are the main view's current values and `surface`
/// its visible area. Returns [`ViewportRect::FULL`] when the image is empty
/// or the scale is not positive.
#[must_use]
pub fn transform_to_viewport(
    image: ImageDimensions,
    surface: SurfaceDimensions,
    scale: f64,
    translate: Vec2,
) -> ViewportRect {
    if !image.is_positive() || !(scale > 0.0) {
        return ViewportRect::FULL;
    }

    let scaled_width = image.width * scale;
    let scaled_height = image.height * scale;

    let width = (surface.width / scaled_width).min(1.0);
    let height = (surface.height / scaled_height).min(1.0);

    let x = (-translate.x / scaled_width).max(0.0);
    let y = (-translate.y / scaled_height).max(0.0);

    ViewportRect {
        x: clamp_origin(x, width),
        y: clamp_origin(y, height),
        width,
        height,
    }
}

/// Computes the main view translation that shows the viewport whose top-left
/// corner is `(viewport_x, viewport_y)` at the given `scale`.
///
/// The scale itself is never changed by viewport navigation. Returns a zero
/// translation when the image is empty or the scale is not positive. The
/// surface does not enter the formula; it is accepted so both directions
/// share a signature.
#[must_use]
pub fn viewport_to_transform(
    image: ImageDimensions,
    _surface: SurfaceDimensions,
    scale: f64,
    viewport_x: f64,
    viewport_y: f64,
) -> Vec2 {
    if !image.is_positive() || !(scale > 0.0) {
        return Vec2::ZERO;
    }
    Vec2::new(
        -viewport_x * image.width * scale,
        -viewport_y * image.height * scale,
    )
}
