// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

use crate::dims::{ImageDimensions, SurfaceDimensions};

/// Canonical wheel zoom step; zooming out uses its reciprocal.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.2;

/// Inclusive range of scales the main view may reach through zooming.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimits {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
}

impl ZoomLimits {
    /// The default range, `[0.01, 32.0]`.
    pub const DEFAULT: Self = Self {
        min_scale: 0.01,
        max_scale: 32.0,
    };

    /// Creates a zoom range.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`.
    #[must_use]
    pub fn new(min_scale: f64, max_scale: f64) -> Self {
        if min_scale <= max_scale {
            Self {
                min_scale,
                max_scale,
            }
        } else {
            Self {
                min_scale: max_scale,
                max_scale: min_scale,
            }
        }
    }

    /// Returns `true` if `scale` lies inside the range (bounds included).
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        scale >= self.min_scale && scale <= self.max_scale
    }

    /// Clamps `scale` into the range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Scale and translation that place the source image inside the main view.
///
/// A point `p` in image pixels is drawn at `translate + scale * p` in surface
/// pixels. Every operation keeps `scale_x == scale_y`.
///
/// All operations are pure: they consume a state and return the next one, so
/// the owner decides when to commit and notify.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal translation in surface pixels.
    pub translate_x: f64,
    /// Vertical translation in surface pixels.
    pub translate_y: f64,
}

impl TransformState {
    /// Scale `1.0`, no translation.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Creates a state with a uniform `scale` and the given translation.
    #[must_use]
    pub fn new(scale: f64, translate: Vec2) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: translate.x,
            translate_y: translate.y,
        }
    }

    /// Returns the uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale_x
    }

    /// Returns the translation in surface pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Returns this state with its translation replaced.
    #[must_use]
    pub fn with_translate(self, translate: Vec2) -> Self {
        Self {
            translate_x: translate.x,
            translate_y: translate.y,
            ..self
        }
    }

    /// The state used before re-fitting a newly loaded image.
    #[must_use]
    pub fn reset_center() -> Self {
        Self::IDENTITY
    }

    /// Moves the image by `delta` surface pixels.
    ///
    /// The translation is not clamped; the image may leave the surface.
    #[must_use]
    pub fn pan(self, delta: Vec2) -> Self {
        self.with_translate(self.translate() + delta)
    }

    /// Zooms by `factor` while keeping the image point under `anchor` fixed.
    ///
    /// `anchor` is in surface pixels. Returns the next state and the scale it
    /// carries. When `scale * factor` falls outside `limits` (or `factor` is
    /// not a positive finite number) the zoom is saturated: the state comes
    /// back unchanged together with its current scale.
    #[must_use]
    pub fn zoom_at_point(self, anchor: Point, factor: f64, limits: ZoomLimits) -> (Self, f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            return (self, self.scale());
        }
        let new_scale = self.scale() * factor;
        if !limits.contains(new_scale) {
            return (self, self.scale());
        }

        let relative = anchor.to_vec2() - self.translate();
        let delta = relative * (1.0 - factor);
        let next = Self::new(new_scale, self.translate() + delta);
        (next, new_scale)
    }

    /// Fits the whole image into the surface and centers it.
    ///
    /// Empty or negative image/surface dimensions yield [`Self::IDENTITY`].
    #[must_use]
    pub fn fit_to_view(image: ImageDimensions, surface: SurfaceDimensions) -> Self {
        if !image.is_positive() || !surface.is_positive() {
            return Self::IDENTITY;
        }
        let scale = (surface.width / image.width).min(surface.height / image.height);
        Self::centered(image, surface, scale)
    }

    /// Like [`Self::fit_to_view`], but the fitted scale is clamped into
    /// `limits` before centering.
    ///
    /// For images whose fitted scale lies within `limits` both variants agree.
    /// Empty inputs yield an untranslated state at the unit scale clamped
    /// into `limits`.
    #[must_use]
    pub fn fit_to_view_within(
        image: ImageDimensions,
        surface: SurfaceDimensions,
        limits: ZoomLimits,
    ) -> Self {
        if !image.is_positive() || !surface.is_positive() {
            return Self::new(limits.clamp(1.0), Vec2::ZERO);
        }
        let scale = (surface.width / image.width).min(surface.height / image.height);
        Self::centered(image, surface, limits.clamp(scale))
    }

    fn centered(image: ImageDimensions, surface: SurfaceDimensions, scale: f64) -> Self {
        let tx = (surface.width - image.width * scale) / 2.0;
        let ty = (surface.height - image.height * scale) / 2.0;
        Self::new(scale, Vec2::new(tx, ty))
    }

    /// Maps an image-space point into surface pixels.
    #[must_use]
    pub fn image_to_surface(&self, pt: Point) -> Point {
        Point::new(
            self.translate_x + pt.x * self.scale_x,
            self.translate_y + pt.y * self.scale_y,
        )
    }

    /// Maps a surface-pixel point back into image space.
    ///
    /// A zero scale maps everything onto the image origin.
    #[must_use]
    pub fn surface_to_image(&self, pt: Point) -> Point {
        if self.scale_x == 0.0 || self.scale_y == 0.0 {
            return Point::ZERO;
        }
        Point::new(
            (pt.x - self.translate_x) / self.scale_x,
            (pt.y - self.translate_y) / self.scale_y,
        )
    }

    /// Returns the image → surface transform as a Kurbo [`Affine`].
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate()) * Affine::scale_non_uniform(self.scale_x, self.scale_y)
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
