// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Native size of the source raster, in image pixels.
///
/// This is fixed for the lifetime of a loaded image.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ImageDimensions {
    /// Width in image pixels.
    pub width: f64,
    /// Height in image pixels.
    pub height: f64,
}

impl ImageDimensions {
    /// Creates image dimensions from a width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both sides are strictly positive.
    ///
    /// NaN sides are never positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns the dimensions as a Kurbo [`Size`].
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for ImageDimensions {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

/// Size of a viewing area (the main view or the overview), in device pixels.
///
/// Unlike [`ImageDimensions`] this changes whenever the host surface is
/// resized.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SurfaceDimensions {
    /// Width in device pixels.
    pub width: f64,
    /// Height in device pixels.
    pub height: f64,
}

impl SurfaceDimensions {
    /// Creates surface dimensions from a width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` if both sides are strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// The longer of the two sides.
    #[must_use]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Returns the dimensions as a Kurbo [`Size`].
    #[must_use]
    pub fn to_size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<Size> for SurfaceDimensions {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
