// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What the main view does with its transform when its surface is resized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ResizePolicy {
    /// Keep scale and translation; only the visible region changes.
    #[default]
    Preserve,
    /// Drop back to scale `1.0` with no translation.
    ResetCenter,
    /// Fit the image into the new surface size.
    Refit,
}

/// Direction of a wheel-driven zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify (scale grows).
    In,
    /// Shrink (scale decreases).
    Out,
}

impl ZoomDirection {
    /// Picks a direction from a signed wheel delta.
    ///
    /// Positive deltas zoom in, negative deltas zoom out. A zero (or NaN)
    /// delta carries no direction.
    #[must_use]
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// Returns the multiplicative step for this direction: `base` when
    /// zooming in and `1 / base` when zooming out.
    #[must_use]
    pub fn factor(self, base: f64) -> f64 {
        match self {
            Self::In => base,
            Self::Out => 1.0 / base,
        }
    }
}
