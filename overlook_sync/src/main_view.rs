// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use overlook_event_state::drag::{DragEnd, DragState};
use overlook_view::{
    DEFAULT_ZOOM_FACTOR, ImageDimensions, ResizePolicy, SurfaceDimensions, TransformState,
    ViewportRect, ZoomDirection, ZoomLimits, transform_to_viewport,
};
use tracing::{debug, trace};

use crate::events::{TransformCause, TransformChanged};

/// The zoomable main view: the only owner of the [`TransformState`].
///
/// Every mutation returns `Some(TransformChanged)` when it changed (or
/// re-applied) the transform and `None` when it was a no-op: no image, a
/// saturated zoom, a zero pan.
#[derive(Clone, Debug)]
pub struct MainView {
    image: Option<ImageDimensions>,
    surface: SurfaceDimensions,
    state: TransformState,
    limits: ZoomLimits,
    zoom_factor: f64,
    resize_policy: ResizePolicy,
    drag: DragState,
    pending_fit: bool,
}

impl Default for MainView {
    fn default() -> Self {
        Self::new(ZoomLimits::DEFAULT, DEFAULT_ZOOM_FACTOR, ResizePolicy::default())
    }
}

impl MainView {
    /// Creates an empty main view.
    ///
    /// `zoom_factor` is the per-notch wheel step; zooming out uses its
    /// inverse.
    #[must_use]
    pub fn new(limits: ZoomLimits, zoom_factor: f64, resize_policy: ResizePolicy) -> Self {
        Self {
            image: None,
            surface: SurfaceDimensions::default(),
            state: TransformState::new(limits.clamp(1.0), Vec2::ZERO),
            limits,
            zoom_factor,
            resize_policy,
            drag: DragState::default(),
            pending_fit: false,
        }
    }

    /// The current transform.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// The current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale()
    }

    /// The current translation in surface pixels.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.state.translate()
    }

    /// The loaded image, if any.
    #[must_use]
    pub fn image(&self) -> Option<ImageDimensions> {
        self.image
    }

    /// The visible surface size.
    #[must_use]
    pub fn surface(&self) -> SurfaceDimensions {
        self.surface
    }

    /// The zoom limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// The wheel zoom step.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// What happens to the transform on resize.
    #[must_use]
    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    /// The visible part of the image, or [`ViewportRect::FULL`] with no image.
    #[must_use]
    pub fn viewport(&self) -> ViewportRect {
        match self.image {
            Some(image) => {
                transform_to_viewport(image, self.surface, self.scale(), self.translate())
            }
            None => ViewportRect::FULL,
        }
    }

    /// Returns `true` while a drag-to-pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_active()
    }

    /// Replaces the image and fits it into the surface.
    ///
    /// `None` clears the image and resets to an untranslated state. An image
    /// loaded before the surface has a size is fitted by the first
    /// [`resize`](Self::resize) that gives it one.
    pub fn load_image(&mut self, image: Option<ImageDimensions>) -> TransformChanged {
        self.drag.finish(DragEnd::Cancelled);
        self.image = image;
        self.pending_fit = image.is_some() && !self.surface.is_positive();
        self.state = match image {
            Some(image) => {
                let fitted = TransformState::fit_to_view_within(image, self.surface, self.limits);
                debug!(
                    width = image.width,
                    height = image.height,
                    scale = fitted.scale(),
                    "main view loaded image"
                );
                fitted
            }
            None => self.home(),
        };
        self.changed(TransformCause::ImageLoaded)
    }

    /// Records a new surface size and applies the resize policy.
    ///
    /// The first positive size after an image was loaded without one fits
    /// the image whatever the policy. Returns an event only when the
    /// transform changed.
    pub fn resize(&mut self, surface: SurfaceDimensions) -> Option<TransformChanged> {
        self.surface = surface;
        let image = self.image?;
        if self.pending_fit && surface.is_positive() {
            self.pending_fit = false;
            self.state = TransformState::fit_to_view_within(image, surface, self.limits);
            debug!(scale = self.scale(), "fitted image on first layout");
            return Some(self.changed(TransformCause::Fit));
        }
        let next = match self.resize_policy {
            ResizePolicy::Preserve => return None,
            ResizePolicy::ResetCenter => self.home(),
            ResizePolicy::Refit => {
                TransformState::fit_to_view_within(image, surface, self.limits)
            }
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(self.changed(TransformCause::Resize))
    }

    /// Zooms one wheel notch around `anchor`.
    ///
    /// Positive deltas zoom in by the zoom factor, negative deltas zoom out by
    /// its inverse, and a zero delta does nothing.
    pub fn wheel(&mut self, anchor: Point, delta: f64) -> Option<TransformChanged> {
        let direction = ZoomDirection::from_wheel_delta(delta)?;
        self.zoom_at(anchor, direction.factor(self.zoom_factor))
    }

    /// Zooms by `factor` keeping the image point under `anchor` fixed.
    ///
    /// Saturated zooms (outside the limits) are ignored.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> Option<TransformChanged> {
        self.image?;
        let (next, scale) = self.state.zoom_at_point(anchor, factor, self.limits);
        if next == self.state {
            trace!(factor, scale, "zoom saturated");
            return None;
        }
        self.state = next;
        Some(self.changed(TransformCause::Zoom))
    }

    /// Moves the image by `delta` surface pixels.
    pub fn pan_by(&mut self, delta: Vec2) -> Option<TransformChanged> {
        self.image?;
        if delta == Vec2::ZERO {
            return None;
        }
        self.state = self.state.pan(delta);
        Some(self.changed(TransformCause::Pan))
    }

    /// Starts drag-to-pan. Returns `false` with no image.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        if self.image.is_none() {
            return false;
        }
        self.drag.begin(pos);
        true
    }

    /// Pans by the movement since the previous pointer position.
    pub fn pointer_move(&mut self, pos: Point) -> Option<TransformChanged> {
        let delta = self.drag.step(pos)?;
        self.pan_by(delta)
    }

    /// Ends drag-to-pan. Returns `true` if one was active.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.finish(DragEnd::Released).is_some()
    }

    /// Ends drag-to-pan when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) -> bool {
        self.drag.finish(DragEnd::PointerLeft).is_some()
    }

    /// Fits the whole image into the surface.
    pub fn fit_to_view(&mut self) -> Option<TransformChanged> {
        let image = self.image?;
        self.state = TransformState::fit_to_view_within(image, self.surface, self.limits);
        Some(self.changed(TransformCause::Fit))
    }

    /// Returns to the state of a freshly loaded image: fitted and centered.
    ///
    /// Unlike [`Self::fit_to_view`] this is reported as a reset.
    pub fn reset_view(&mut self) -> Option<TransformChanged> {
        let image = self.image?;
        self.state = TransformState::fit_to_view_within(image, self.surface, self.limits);
        Some(self.changed(TransformCause::Reset))
    }

    /// Replaces the translation, keeping the scale.
    ///
    /// This is how overview navigation is applied.
    pub fn set_translate(&mut self, translate: Vec2) -> Option<TransformChanged> {
        self.image?;
        self.state = self.state.with_translate(translate);
        Some(self.changed(TransformCause::Navigate))
    }

    /// Unit scale clamped into the limits, no translation.
    fn home(&self) -> TransformState {
        TransformState::new(self.limits.clamp(1.0), Vec2::ZERO)
    }

    fn changed(&self, cause: TransformCause) -> TransformChanged {
        TransformChanged {
            state: self.state,
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use overlook_view::{
        ImageDimensions, ResizePolicy, SurfaceDimensions, TransformState, ViewportRect, ZoomLimits,
    };

    use super::MainView;
    use crate::events::TransformCause;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn loaded(policy: ResizePolicy) -> MainView {
        let mut view = MainView::new(ZoomLimits::DEFAULT, 1.2, policy);
        view.resize(SurfaceDimensions::new(800.0, 600.0));
        view.load_image(Some(ImageDimensions::new(4000.0, 3000.0)));
        view
    }

    #[test]
    fn without_image_everything_is_a_no_op() {
        let mut view = MainView::default();
        view.resize(SurfaceDimensions::new(800.0, 600.0));
        assert!(view.wheel(Point::new(10.0, 10.0), 1.0).is_none());
        assert!(view.pan_by(Vec2::new(5.0, 5.0)).is_none());
        assert!(!view.pointer_down(Point::ZERO));
        assert!(view.pointer_move(Point::new(5.0, 5.0)).is_none());
        assert!(view.fit_to_view().is_none());
        assert!(view.reset_view().is_none());
        assert!(view.set_translate(Vec2::new(1.0, 1.0)).is_none());
        assert_eq!(view.state(), TransformState::IDENTITY);
        assert_eq!(view.viewport(), ViewportRect::FULL);
    }

    #[test]
    fn loading_fits_the_image() {
        let view = loaded(ResizePolicy::Preserve);
        assert!(close(view.scale(), 0.2));
        assert!(close(view.translate().x, 0.0));
        assert!(close(view.translate().y, 0.0));
        assert_eq!(view.viewport(), ViewportRect::FULL);
    }

    #[test]
    fn clearing_the_image_resets_to_identity() {
        let mut view = loaded(ResizePolicy::Preserve);
        let event = view.load_image(None);
        assert_eq!(event.cause, TransformCause::ImageLoaded);
        assert_eq!(event.state, TransformState::IDENTITY);
        assert!(view.image().is_none());
    }

    #[test]
    fn wheel_zooms_around_the_pointer() {
        let mut view = loaded(ResizePolicy::Preserve);
        view.set_translate(Vec2::ZERO);
        let before = view.state().surface_to_image(Point::new(400.0, 300.0));

        let event = view.wheel(Point::new(400.0, 300.0), 120.0).expect("zoom in applies");
        assert_eq!(event.cause, TransformCause::Zoom);
        assert!(close(view.scale(), 0.24));
        let after = view.state().surface_to_image(Point::new(400.0, 300.0));
        assert!(close(before.x, after.x) && close(before.y, after.y));

        view.wheel(Point::new(400.0, 300.0), -120.0).expect("zoom out applies");
        assert!(close(view.scale(), 0.2));

        assert!(view.wheel(Point::new(400.0, 300.0), 0.0).is_none());
    }

    #[test]
    fn zoom_stops_at_the_limits() {
        let mut view = MainView::new(ZoomLimits::new(0.1, 0.3), 1.2, ResizePolicy::Preserve);
        view.resize(SurfaceDimensions::new(800.0, 600.0));
        view.load_image(Some(ImageDimensions::new(4000.0, 3000.0)));

        let mut applied = 0;
        while view.wheel(Point::new(400.0, 300.0), 1.0).is_some() {
            applied += 1;
            assert!(applied < 100, "zoom never saturated");
        }
        assert!(view.scale() <= 0.3);
        assert!(view.scale() * 1.2 > 0.3);
    }

    #[test]
    fn drag_pans_by_incremental_deltas() {
        let mut view = loaded(ResizePolicy::Preserve);
        assert!(view.pointer_down(Point::new(100.0, 100.0)));
        let event = view.pointer_move(Point::new(130.0, 80.0)).expect("pan applies");
        assert_eq!(event.cause, TransformCause::Pan);
        view.pointer_move(Point::new(140.0, 90.0));
        assert_eq!(view.translate(), Vec2::new(40.0, -10.0));

        // Same position again: nothing moved.
        assert!(view.pointer_move(Point::new(140.0, 90.0)).is_none());

        assert!(view.pointer_leave());
        assert!(view.pointer_move(Point::new(500.0, 500.0)).is_none());
        assert!(!view.pointer_up());
    }

    #[test]
    fn resize_policies() {
        let mut preserve = loaded(ResizePolicy::Preserve);
        preserve.wheel(Point::new(0.0, 0.0), 1.0);
        let state = preserve.state();
        assert!(preserve.resize(SurfaceDimensions::new(400.0, 300.0)).is_none());
        assert_eq!(preserve.state(), state);

        let mut reset = loaded(ResizePolicy::ResetCenter);
        let event = reset.resize(SurfaceDimensions::new(400.0, 300.0)).expect("resets");
        assert_eq!(event.cause, TransformCause::Resize);
        assert_eq!(reset.state(), TransformState::IDENTITY);

        let mut refit = loaded(ResizePolicy::Refit);
        refit.resize(SurfaceDimensions::new(400.0, 300.0)).expect("refits");
        assert!(close(refit.scale(), 0.1));
    }

    #[test]
    fn image_loaded_before_layout_is_fitted_on_first_resize() {
        let mut view = MainView::default();
        view.load_image(Some(ImageDimensions::new(4000.0, 3000.0)));
        assert_eq!(view.state(), TransformState::IDENTITY);

        let event = view
            .resize(SurfaceDimensions::new(800.0, 600.0))
            .expect("first layout fits");
        assert_eq!(event.cause, TransformCause::Fit);
        assert!(close(view.scale(), 0.2));

        // Later resizes follow the policy again.
        assert!(view.resize(SurfaceDimensions::new(400.0, 300.0)).is_none());
        assert!(close(view.scale(), 0.2));
    }

    #[test]
    fn resets_stay_within_custom_limits() {
        let limits = ZoomLimits::new(2.0, 8.0);
        let mut view = MainView::new(limits, 1.2, ResizePolicy::ResetCenter);
        assert!(close(view.scale(), 2.0));

        view.resize(SurfaceDimensions::new(800.0, 600.0));
        view.load_image(Some(ImageDimensions::new(4000.0, 3000.0)));
        assert!(close(view.scale(), 2.0));

        view.wheel(Point::new(400.0, 300.0), 1.0).expect("zoom in applies");
        view.resize(SurfaceDimensions::new(1024.0, 768.0)).expect("policy resets");
        assert!(limits.contains(view.scale()));
        assert!(view.wheel(Point::new(400.0, 300.0), 1.0).is_some());

        view.load_image(None);
        assert!(limits.contains(view.scale()));
    }

    #[test]
    fn reset_view_refits() {
        let mut view = loaded(ResizePolicy::Preserve);
        view.wheel(Point::new(10.0, 10.0), 1.0);
        view.pan_by(Vec2::new(-300.0, 20.0));
        let event = view.reset_view().expect("image loaded");
        assert_eq!(event.cause, TransformCause::Reset);
        assert!(close(view.scale(), 0.2));
        assert!(close(view.translate().x, 0.0));
    }
}
