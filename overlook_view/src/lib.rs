// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook View: transform state and viewport mapping for a zoomable image.
//!
//! This crate provides the headless math behind an image viewer that shows a
//! large raster inside a bounded surface. It focuses on:
//! - Transform state (uniform scale + translation) for the main view.
//! - Pure pan, pointer-anchored zoom and fit-to-view operations.
//! - Mapping between transform space and a normalized viewport rectangle
//!   expressed as a fraction of the image.
//!
//! It does **not** own any widgets, pointer routing or bitmaps. Callers are
//! expected to:
//! - Keep one [`TransformState`] per main view and replace it with the
//!   results of the operations below.
//! - Derive a [`ViewportRect`] with [`transform_to_viewport`] whenever the
//!   transform or the surface changes.
//! - Turn overview navigation back into a translation with
//!   [`viewport_to_transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use overlook_view::{
//!     ImageDimensions, SurfaceDimensions, TransformState, ZoomLimits, transform_to_viewport,
//! };
//!
//! let image = ImageDimensions::new(4000.0, 3000.0);
//! let surface = SurfaceDimensions::new(800.0, 600.0);
//!
//! // Fit the whole image into the surface.
//! let state = TransformState::fit_to_view(image, surface);
//! assert!((state.scale() - 0.2).abs() < 1e-12);
//!
//! // Zoom in around the pointer.
//! let (state, scale) = state.zoom_at_point(Point::new(400.0, 300.0), 2.0, ZoomLimits::default());
//! assert!((scale - 0.4).abs() < 1e-12);
//!
//! // The visible part of the image, normalized to [0, 1].
//! let viewport = transform_to_viewport(image, surface, state.scale(), state.translate());
//! assert!((viewport.width - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Design notes
//!
//! - Scale is always uniform; `scale_x` and `scale_y` are kept for hosts that
//!   feed them into a non-uniform scale transform.
//! - Pan and zoom never clamp the translation: the image may be moved
//!   arbitrarily far off the surface.
//! - Degenerate inputs (empty images, empty surfaces, zero scale) never fail;
//!   they produce the identity transform or a full-coverage viewport.
//!
//! This crate is `no_std`.

#![no_std]

mod dims;
mod modes;
mod transform;
mod viewport;

pub use dims::{ImageDimensions, SurfaceDimensions};
pub use modes::{ResizePolicy, ZoomDirection};
pub use transform::{DEFAULT_ZOOM_FACTOR, TransformState, ZoomLimits};
pub use viewport::{ViewportRect, transform_to_viewport, viewport_to_transform};
