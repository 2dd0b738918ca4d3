// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Sync: keeps a zoomable main view and its birds-eye overview in
//! step.
//!
//! - [`MainView`] owns the transform of the main view and turns wheel, drag,
//!   resize and fit requests into [`TransformChanged`] events.
//! - [`Coordinator`] owns a [`MainView`] and a
//!   [`BirdsEye`](overlook_birdseye::BirdsEye) overview. It pushes the visible
//!   region into the overview after every main view change and applies
//!   overview drags back to the main view, with a [`ReentrancyGuard`] so the
//!   two directions never feed each other.
//! - [`ViewerConfig`] loads zoom limits, the wheel step, the resize policy,
//!   the thumbnail cache size and the indicator style from TOML.
//!
//! Hosts that want notifications subscribe to
//! [`Coordinator::transform_changed`] or [`Coordinator::viewport_changed`].
//! Diagnostics go through `tracing`; install a subscriber to see them.
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use overlook_birdseye::SourceImage;
//! use overlook_sync::Coordinator;
//! use overlook_thumbnail::{ImageId, ThumbnailProvider};
//! use overlook_view::{ImageDimensions, SurfaceDimensions};
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
//! let mut viewer = Coordinator::new(NoPixels);
//! viewer.resize_main(SurfaceDimensions::new(800.0, 600.0));
//! viewer.resize_overview(SurfaceDimensions::new(200.0, 200.0));
//!
//! let zooms = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&zooms);
//! viewer.transform_changed().subscribe(move |_| counter.set(counter.get() + 1));
//!
//! viewer.load_image(Some(SourceImage {
//!     id: ImageId::new(1),
//!     dimensions: ImageDimensions::new(4000.0, 3000.0),
//! }));
//! viewer.main_wheel(Point::new(400.0, 300.0), 120.0);
//! assert_eq!(zooms.get(), 2);
//!
//! // The overview now shows an indicator for the zoomed-in region.
//! assert!(viewer.overview().indicator().is_some());
//! ```

mod config;
mod coordinator;
mod error;
mod events;
mod guard;
mod main_view;
mod signal;

pub use config::{ThumbnailConfig, ViewerConfig, ZoomConfig};
pub use coordinator::{Coordinator, SyncStats};
pub use error::{ConfigError, Result};
pub use events::{TransformCause, TransformChanged, ViewportChanged};
pub use guard::{GuardToken, ReentrancyGuard};
pub use main_view::MainView;
pub use signal::{Listener, Signal, SubscriptionId};
