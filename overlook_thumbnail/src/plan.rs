// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How a [`Downscaler`](crate::Downscaler) should turn a source image into a
/// thumbnail that fits a square of `max_dimension` pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThumbnailPlan {
    /// The source already fits; hand it out unscaled.
    UseSource,
    /// Scale uniformly by `scale` to `width × height` pixels.
    Scale {
        /// Uniform scale factor, below `1.0`.
        scale: f64,
        /// Target width in pixels.
        width: u32,
        /// Target height in pixels.
        height: u32,
    },
}

/// Plans the thumbnail for a `width × height` source.
///
/// The scale is `min(max / width, max / height)`. Sources that already fit
/// are used as-is; target sizes are truncated towards zero. Returns `None`
/// for empty sources or a zero `max_dimension`.
#[must_use]
pub fn thumbnail_plan(width: u32, height: u32, max_dimension: u32) -> Option<ThumbnailPlan> {
    if width == 0 || height == 0 || max_dimension == 0 {
        return None;
    }
    let max = f64::from(max_dimension);
    let scale = (max / f64::from(width)).min(max / f64::from(height));
    if scale >= 1.0 {
        return Some(ThumbnailPlan::UseSource);
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "scaled sides are positive and below the u32 source sides"
    )]
    let (scaled_width, scaled_height) = (
        (f64::from(width) * scale) as u32,
        (f64::from(height) * scale) as u32,
    );
    Some(ThumbnailPlan::Scale {
        scale,
        width: scaled_width.max(1),
        height: scaled_height.max(1),
    })
}
