// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Birds-Eye: a miniature overview of the whole image.
//!
//! [`BirdsEye`] places a thumbnail inside the overview control, draws an
//! indicator for the part of the image the main view currently shows, and
//! turns pointer drags on the thumbnail into [`ViewportChanged`] events.
//!
//! It is headless. Hosts forward pointer and size events, read back
//! [`BirdsEye::thumbnail`] and [`BirdsEye::indicator`], and draw them with
//! whatever renderer they use. Thumbnails come from any
//! [`ThumbnailProvider`](overlook_thumbnail::ThumbnailProvider).
//!
//! ```rust
//! use kurbo::Point;
//! use overlook_birdseye::{BirdsEye, SourceImage};
//! use overlook_thumbnail::{ImageId, ThumbnailProvider};
//! use overlook_view::{ImageDimensions, SurfaceDimensions, ViewportRect};
//!
//! struct NoPixels;
//!
//! impl ThumbnailProvider for NoPixels {
//!     type Bitmap = ();
//!     fn get_or_create(&mut self, _: ImageId, _: u32) -> Option<()> {
//!         Some(())
//!     }
//! }
//!
//! let mut overview = BirdsEye::new(NoPixels);
//! overview.layout(SurfaceDimensions::new(200.0, 200.0));
//! overview.set_image(Some(SourceImage {
//!     id: ImageId::new(1),
//!     dimensions: ImageDimensions::new(4000.0, 3000.0),
//! }));
//!
//! // The main view shows a fifth of the image.
//! overview.set_viewport(ViewportRect::new(0.0, 0.0, 0.2, 0.2));
//! assert!(overview.indicator().is_some());
//!
//! // Clicking the middle of the thumbnail centers the viewport there.
//! let changed = overview.pointer_down(Point::new(100.0, 100.0)).unwrap();
//! assert!((changed.x - 0.4).abs() < 1e-9);
//! assert!((changed.y - 0.4).abs() < 1e-9);
//! ```

mod controller;
mod geometry;
mod indicator;

pub use controller::{BirdsEye, SourceImage, ViewportChanged};
pub use geometry::ThumbnailGeometry;
pub use indicator::{Indicator, IndicatorStyle, MaskRegion};
