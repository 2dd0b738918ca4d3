// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-way synchronization between the main view and the overview.
//!
//! ## Directions
//!
//! - Main to overview: after any main view change or main surface resize,
//!   the visible region is recomputed and pushed into the overview.
//! - Overview to main: a [`ViewportChanged`] from an overview drag becomes a
//!   new translation for the main view, at the main view's current scale.
//!
//! Applying an overview navigation changes the main transform, which would
//! normally flow back to the overview. The [`ReentrancyGuard`] is held for the
//! whole of either direction, so that echo is refused and counted in
//! [`SyncStats::suppressed`] instead of looping.

use kurbo::{Point, Vec2};
use overlook_birdseye::{BirdsEye, SourceImage};
use overlook_thumbnail::ThumbnailProvider;
use overlook_view::{SurfaceDimensions, ViewportRect, viewport_to_transform};
use tracing::{debug, trace};

use crate::config::ViewerConfig;
use crate::events::{TransformChanged, ViewportChanged};
use crate::guard::ReentrancyGuard;
use crate::main_view::MainView;
use crate::signal::Signal;

/// Counters describing how synchronization went.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Overview navigations applied to the main view.
    pub main_updates: u64,
    /// Viewports pushed from the main view into the overview.
    pub overview_updates: u64,
    /// Updates refused because another one was already running.
    pub suppressed: u64,
}

/// Owns the main view and the overview and keeps them consistent.
pub struct Coordinator<P: ThumbnailProvider> {
    main: MainView,
    overview: BirdsEye<P>,
    image: Option<SourceImage>,
    guard: ReentrancyGuard,
    stats: SyncStats,
    transform_changed: Signal<TransformChanged>,
    viewport_changed: Signal<ViewportChanged>,
}

impl<P: ThumbnailProvider> core::fmt::Debug for Coordinator<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coordinator")
            .field("main", &self.main)
            .field("overview", &self.overview)
            .field("image", &self.image)
            .field("guard", &self.guard)
            .field("stats", &self.stats)
            .field("transform_changed", &self.transform_changed)
            .field("viewport_changed", &self.viewport_changed)
            .finish()
    }
}

impl<P: ThumbnailProvider> Coordinator<P> {
    /// Creates a coordinator with default settings.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_config(&ViewerConfig::default(), provider)
    }

    /// Creates a coordinator from loaded settings.
    #[must_use]
    pub fn with_config(config: &ViewerConfig, provider: P) -> Self {
        Self::from_parts(
            config.main_view(),
            BirdsEye::with_style(provider, config.indicator),
        )
    }

    /// Creates a coordinator around existing views.
    #[must_use]
    pub fn from_parts(main: MainView, overview: BirdsEye<P>) -> Self {
        Self {
            main,
            overview,
            image: None,
            guard: ReentrancyGuard::new(),
            stats: SyncStats::default(),
            transform_changed: Signal::new(),
            viewport_changed: Signal::new(),
        }
    }

    /// The main view.
    #[must_use]
    pub fn main(&self) -> &MainView {
        &self.main
    }

    /// The overview.
    #[must_use]
    pub fn overview(&self) -> &BirdsEye<P> {
        &self.overview
    }

    /// The loaded image, if any.
    #[must_use]
    pub fn image(&self) -> Option<SourceImage> {
        self.image
    }

    /// Synchronization counters.
    #[must_use]
    pub fn stats(&self) -> SyncStats {
        self.stats
    }

    /// The viewport the overview currently shows.
    #[must_use]
    pub fn viewport(&self) -> ViewportRect {
        self.overview.viewport()
    }

    /// Returns `true` while a synchronization step is running.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.guard.is_updating()
    }

    /// Fired after every main view transform change, including the ones
    /// caused by overview navigation.
    pub fn transform_changed(&mut self) -> &mut Signal<TransformChanged> {
        &mut self.transform_changed
    }

    /// Fired after every overview drag that moved the viewport.
    pub fn viewport_changed(&mut self) -> &mut Signal<ViewportChanged> {
        &mut self.viewport_changed
    }

    /// Loads a new image into both views (or clears them with `None`).
    pub fn load_image(&mut self, image: Option<SourceImage>) {
        debug!(image = ?image.map(|i| i.id), "loading image");
        self.image = image;
        self.overview.set_image(image);
        let event = self.main.load_image(image.map(|i| i.dimensions));
        self.main_changed(Some(event));
    }

    /// Resizes the main view and refreshes the overview indicator.
    pub fn resize_main(&mut self, surface: SurfaceDimensions) -> Option<TransformChanged> {
        let event = self.main.resize(surface);
        if let Some(event) = event {
            self.transform_changed.emit(&event);
        }
        self.sync_main_to_overview();
        event
    }

    /// Resizes the overview control.
    ///
    /// The viewport is normalized, so the main view is unaffected.
    pub fn resize_overview(&mut self, surface: SurfaceDimensions) {
        self.overview.layout(surface);
    }

    /// Zooms the main view one wheel notch around `anchor`.
    pub fn main_wheel(&mut self, anchor: Point, delta: f64) -> Option<TransformChanged> {
        let event = self.main.wheel(anchor, delta);
        self.main_changed(event)
    }

    /// Zooms the main view by `factor` around `anchor`.
    pub fn main_zoom_at(&mut self, anchor: Point, factor: f64) -> Option<TransformChanged> {
        let event = self.main.zoom_at(anchor, factor);
        self.main_changed(event)
    }

    /// Pans the main view by `delta` surface pixels.
    pub fn main_pan_by(&mut self, delta: Vec2) -> Option<TransformChanged> {
        let event = self.main.pan_by(delta);
        self.main_changed(event)
    }

    /// Starts drag-to-pan on the main view.
    pub fn main_pointer_down(&mut self, pos: Point) -> bool {
        self.main.pointer_down(pos)
    }

    /// Continues drag-to-pan on the main view.
    pub fn main_pointer_move(&mut self, pos: Point) -> Option<TransformChanged> {
        let event = self.main.pointer_move(pos);
        self.main_changed(event)
    }

    /// Ends drag-to-pan on the main view.
    pub fn main_pointer_up(&mut self) -> bool {
        self.main.pointer_up()
    }

    /// Ends drag-to-pan when the pointer leaves the main view.
    pub fn main_pointer_leave(&mut self) -> bool {
        self.main.pointer_leave()
    }

    /// Fits the image into the main view.
    pub fn fit_to_view(&mut self) -> Option<TransformChanged> {
        let event = self.main.fit_to_view();
        self.main_changed(event)
    }

    /// Resets the main view to its freshly loaded state.
    pub fn reset_view(&mut self) -> Option<TransformChanged> {
        let event = self.main.reset_view();
        self.main_changed(event)
    }

    /// Starts a drag on the overview and navigates the main view.
    pub fn overview_pointer_down(&mut self, pos: Point) -> Option<ViewportChanged> {
        let event = self.overview.pointer_down(pos)?;
        self.notify_viewport_changed(event);
        Some(event)
    }

    /// Continues a drag on the overview.
    pub fn overview_pointer_move(&mut self, pos: Point) -> Option<ViewportChanged> {
        let event = self.overview.pointer_move(pos)?;
        self.notify_viewport_changed(event);
        Some(event)
    }

    /// Ends a drag on the overview.
    pub fn overview_pointer_up(&mut self) -> bool {
        self.overview.pointer_up()
    }

    /// The pointer entered the overview.
    pub fn overview_pointer_enter(&mut self) {
        self.overview.pointer_enter();
    }

    /// The pointer left the overview; ends any drag there.
    pub fn overview_pointer_leave(&mut self) -> bool {
        self.overview.pointer_leave()
    }

    /// Applies a viewport position to the main view, as if it came from an
    /// overview drag.
    pub fn notify_viewport_changed(&mut self, event: ViewportChanged) {
        self.viewport_changed.emit(&event);
        self.sync_overview_to_main(event);
    }

    fn main_changed(&mut self, event: Option<TransformChanged>) -> Option<TransformChanged> {
        let event = event?;
        self.transform_changed.emit(&event);
        self.sync_main_to_overview();
        Some(event)
    }

    fn sync_main_to_overview(&mut self) {
        let Some(_token) = self.guard.try_enter() else {
            self.stats.suppressed += 1;
            trace!("main to overview sync suppressed");
            return;
        };
        let viewport = self.main.viewport();
        self.overview.set_viewport(viewport);
        self.stats.overview_updates += 1;
        debug!(?viewport, "pushed viewport to overview");
    }

    fn sync_overview_to_main(&mut self, event: ViewportChanged) {
        let Some(_token) = self.guard.try_enter() else {
            self.stats.suppressed += 1;
            trace!("overview to main sync suppressed");
            return;
        };
        let Some(image) = self.image else {
            trace!("overview navigation ignored without an image");
            return;
        };

        let translate = viewport_to_transform(
            image.dimensions,
            self.main.surface(),
            self.main.scale(),
            event.x,
            event.y,
        );
        let Some(changed) = self.main.set_translate(translate) else {
            return;
        };
        self.stats.main_updates += 1;
        debug!(x = event.x, y = event.y, ?translate, "applied overview navigation");

        // The main view changed, which would push its viewport back to the
        // overview. The held guard refuses that.
        self.transform_changed.emit(&changed);
        self.sync_main_to_overview();
    }
}
