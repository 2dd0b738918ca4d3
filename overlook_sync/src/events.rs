// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use overlook_view::TransformState;

pub use overlook_birdseye::ViewportChanged;

/// What moved the main view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransformCause {
    /// Drag-to-pan on the main view.
    Pan,
    /// Wheel or programmatic zoom.
    Zoom,
    /// Fit-to-view.
    Fit,
    /// Reset to the fitted initial state.
    Reset,
    /// Navigation from the overview.
    Navigate,
    /// Surface resize under a policy that changes the transform.
    Resize,
    /// A new image was loaded (or the image was cleared).
    ImageLoaded,
}

/// Emitted after every successful change to the main view transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformChanged {
    /// The transform after the change.
    pub state: TransformState,
    /// What caused it.
    pub cause: TransformCause,
}
