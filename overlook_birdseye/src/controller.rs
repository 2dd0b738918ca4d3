// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use overlook_event_state::drag::{DragEnd, DragState};
use overlook_thumbnail::{ImageId, ThumbnailProvider};
use overlook_view::{ImageDimensions, SurfaceDimensions, ViewportRect};
use tracing::debug;

use crate::geometry::ThumbnailGeometry;
use crate::indicator::{Indicator, IndicatorStyle, MaskRegion};

/// The image shown in the overview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceImage {
    /// Identity used to request thumbnails.
    pub id: ImageId,
    /// Native size of the image.
    pub dimensions: ImageDimensions,
}

/// Emitted when a drag on the overview moves the viewport.
///
/// `x` and `y` are the new top-left corner, normalized to the image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportChanged {
    /// New left edge as a fraction of the image width.
    pub x: f64,
    /// New top edge as a fraction of the image height.
    pub y: f64,
}

/// Birds-eye overview of the current image.
///
/// The controller never touches the main view's transform. It draws what
/// [`set_viewport`](Self::set_viewport) tells it and reports drags as
/// [`ViewportChanged`] for the owner to apply.
pub struct BirdsEye<P: ThumbnailProvider> {
    provider: P,
    image: Option<SourceImage>,
    surface: SurfaceDimensions,
    geometry: Option<ThumbnailGeometry>,
    thumbnail: Option<P::Bitmap>,
    viewport: ViewportRect,
    drag: DragState,
    hovered: bool,
    style: IndicatorStyle,
}

impl<P: ThumbnailProvider> core::fmt::Debug for BirdsEye<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BirdsEye")
            .field("image", &self.image)
            .field("surface", &self.surface)
            .field("geometry", &self.geometry)
            .field("has_thumbnail", &self.thumbnail.is_some())
            .field("viewport", &self.viewport)
            .field("drag", &self.drag)
            .field("hovered", &self.hovered)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl<P: ThumbnailProvider> BirdsEye<P> {
    /// Creates an empty overview that fetches thumbnails from `provider`.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_style(provider, IndicatorStyle::default())
    }

    /// Creates an empty overview with a custom indicator style.
    #[must_use]
    pub fn with_style(provider: P, style: IndicatorStyle) -> Self {
        Self {
            provider,
            image: None,
            surface: SurfaceDimensions::default(),
            geometry: None,
            thumbnail: None,
            viewport: ViewportRect::FULL,
            drag: DragState::default(),
            hovered: false,
            style,
        }
    }

    /// Replaces the displayed image (or clears it with `None`).
    ///
    /// Any drag in progress is cancelled and the viewport resets to the whole
    /// image until the owner pushes a new one.
    pub fn set_image(&mut self, image: Option<SourceImage>) {
        self.drag.finish(DragEnd::Cancelled);
        self.image = image;
        self.viewport = ViewportRect::FULL;
        self.relayout();
    }

    /// Recomputes the thumbnail placement for a new control size.
    pub fn layout(&mut self, surface: SurfaceDimensions) {
        self.surface = surface;
        self.relayout();
    }

    fn relayout(&mut self) {
        let Some(image) = self.image else {
            self.geometry = None;
            self.thumbnail = None;
            return;
        };
        self.geometry = ThumbnailGeometry::layout(image.dimensions, self.surface);
        if self.geometry.is_none() {
            self.thumbnail = None;
            return;
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "thumbnail sizes are whole pixels; control sizes fit in u32"
        )]
        let max_dimension = self.surface.max_side() as u32;
        self.thumbnail = self.provider.get_or_create(image.id, max_dimension);
        debug!(
            image = %image.id,
            max_dimension,
            has_thumbnail = self.thumbnail.is_some(),
            "overview laid out"
        );
    }

    /// Sets the viewport drawn by the indicator.
    pub fn set_viewport(&mut self, viewport: ViewportRect) {
        self.viewport = viewport;
    }

    /// The viewport currently drawn by the indicator.
    #[must_use]
    pub fn viewport(&self) -> ViewportRect {
        self.viewport
    }

    /// The displayed image, if any.
    #[must_use]
    pub fn image(&self) -> Option<SourceImage> {
        self.image
    }

    /// The size of the overview control.
    #[must_use]
    pub fn surface(&self) -> SurfaceDimensions {
        self.surface
    }

    /// Current thumbnail placement, or `None` when nothing is displayed.
    #[must_use]
    pub fn geometry(&self) -> Option<ThumbnailGeometry> {
        self.geometry
    }

    /// The thumbnail bitmap obtained at the last layout.
    ///
    /// `None` also when the provider could not produce one for a laid-out
    /// image. Hosts should then draw the source bitmap scaled into
    /// [`Self::geometry`] instead.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&P::Bitmap> {
        self.thumbnail.as_ref()
    }

    /// Indicator geometry to draw, or `None` when it is hidden.
    ///
    /// The indicator is hidden with no image, an empty control, or when the
    /// whole image is visible.
    #[must_use]
    pub fn indicator(&self) -> Option<Indicator> {
        let geometry = self.geometry?;
        if self.viewport.covers_image() {
            return None;
        }
        let rect = geometry.indicator_rect(self.viewport);
        Some(Indicator {
            rect,
            mask: MaskRegion {
                outer: geometry.rect(),
                hole: rect,
            },
            stroke_width: if self.hovered {
                self.style.hover_stroke_width
            } else {
                self.style.stroke_width
            },
        })
    }

    /// The indicator style.
    #[must_use]
    pub fn style(&self) -> IndicatorStyle {
        self.style
    }

    /// Replaces the indicator style.
    pub fn set_style(&mut self, style: IndicatorStyle) {
        self.style = style;
    }

    /// Shared access to the thumbnail provider.
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access to the thumbnail provider.
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// Returns `true` while a drag is captured.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns `true` while the pointer is over the control.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Starts a drag and jumps the viewport so it is centered on `pos`.
    ///
    /// Does nothing when no thumbnail is laid out.
    pub fn pointer_down(&mut self, pos: Point) -> Option<ViewportChanged> {
        self.geometry?;
        self.drag.begin(pos);
        self.navigate(pos)
    }

    /// Follows the pointer while a drag is captured.
    pub fn pointer_move(&mut self, pos: Point) -> Option<ViewportChanged> {
        self.drag.step(pos)?;
        self.navigate(pos)
    }

    /// Ends the drag. Returns `true` if one was active.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.finish(DragEnd::Released).is_some()
    }

    /// Marks the control as hovered, widening the indicator stroke.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Clears hover and ends any drag, so it cannot stay stuck after the
    /// pointer exits mid-gesture. Returns `true` if a drag was ended.
    pub fn pointer_leave(&mut self) -> bool {
        self.hovered = false;
        let ended = self.drag.finish(DragEnd::PointerLeft);
        if let Some(summary) = ended {
            debug!(offset = ?summary.total_offset(), "overview drag ended by pointer leave");
        }
        ended.is_some()
    }

    fn navigate(&mut self, pos: Point) -> Option<ViewportChanged> {
        let geometry = self.geometry?;
        let center = geometry.normalized_point(pos);
        self.viewport = self.viewport.centered_on(center);
        Some(ViewportChanged {
            x: self.viewport.x,
            y: self.viewport.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use overlook_thumbnail::{ImageId, ThumbnailProvider};
    use overlook_view::{ImageDimensions, SurfaceDimensions, ViewportRect};

    use super::{BirdsEye, SourceImage};

    /// Hands out `(image, size)` and counts requests.
    #[derive(Default)]
    struct Counting {
        requests: Vec<(ImageId, u32)>,
    }

    impl ThumbnailProvider for Counting {
        type Bitmap = (u64, u32);

        fn get_or_create(&mut self, image: ImageId, max_dimension: u32) -> Option<(u64, u32)> {
            self.requests.push((image, max_dimension));
            Some((image.get(), max_dimension))
        }
    }

    fn source() -> SourceImage {
        SourceImage {
            id: ImageId::new(1),
            dimensions: ImageDimensions::new(4000.0, 3000.0),
        }
    }

    #[test]
    fn layout_requests_thumbnail_for_longest_side() {
        let mut overview = BirdsEye::new(Counting::default());
        overview.layout(SurfaceDimensions::new(200.7, 150.0));
        assert!(overview.provider().requests.is_empty());

        overview.set_image(Some(source()));
        assert_eq!(overview.thumbnail(), Some(&(1, 200)));
        assert_eq!(overview.provider().requests, vec![(ImageId::new(1), 200)]);
    }

    struct Failing;

    impl ThumbnailProvider for Failing {
        type Bitmap = ();

        fn get_or_create(&mut self, _image: ImageId, _max_dimension: u32) -> Option<()> {
            None
        }
    }

    #[test]
    fn failed_thumbnail_keeps_geometry_and_navigation() {
        let mut overview = BirdsEye::new(Failing);
        overview.layout(SurfaceDimensions::new(200.0, 200.0));
        overview.set_image(Some(source()));

        assert!(overview.thumbnail().is_none());
        assert!(overview.geometry().is_some());
        overview.set_viewport(ViewportRect::new(0.1, 0.1, 0.5, 0.5));
        assert!(overview.indicator().is_some());
        assert!(overview.pointer_down(Point::new(100.0, 100.0)).is_some());
    }

    #[test]
    fn clearing_the_image_clears_everything() {
        let mut overview = BirdsEye::new(Counting::default());
        overview.layout(SurfaceDimensions::new(200.0, 200.0));
        overview.set_image(Some(source()));
        overview.set_viewport(ViewportRect::new(0.1, 0.1, 0.5, 0.5));
        assert!(overview.indicator().is_some());

        overview.set_image(None);
        assert!(overview.thumbnail().is_none());
        assert!(overview.geometry().is_none());
        assert!(overview.indicator().is_none());
        assert_eq!(overview.pointer_down(Point::new(100.0, 100.0)), None);
        assert!(!overview.is_dragging());
    }

    #[test]
    fn zero_sized_control_shows_nothing() {
        let mut overview = BirdsEye::new(Counting::default());
        overview.set_image(Some(source()));
        assert!(overview.thumbnail().is_none());
        assert!(overview.provider().requests.is_empty());
    }

    #[test]
    fn hover_widens_the_stroke() {
        let mut overview = BirdsEye::new(Counting::default());
        overview.layout(SurfaceDimensions::new(200.0, 200.0));
        overview.set_image(Some(source()));
        overview.set_viewport(ViewportRect::new(0.0, 0.0, 0.5, 0.5));

        let stroke = |o: &BirdsEye<Counting>| o.indicator().map(|i| i.stroke_width);
        assert_eq!(stroke(&overview), Some(2.0));
        overview.pointer_enter();
        assert_eq!(stroke(&overview), Some(3.0));
        overview.pointer_leave();
        assert_eq!(stroke(&overview), Some(2.0));
    }
}
