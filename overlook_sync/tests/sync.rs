// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end synchronization between the main view and the overview.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use overlook_birdseye::SourceImage;
use overlook_sync::{Coordinator, TransformCause, ViewerConfig, ViewportChanged};
use overlook_thumbnail::{Downscaler, ImageId, ThumbnailCache, ThumbnailError};
use overlook_view::{ImageDimensions, SurfaceDimensions, ViewportRect, transform_to_viewport};

/// Thumbnails are just their requested size.
struct SizeOnly;

impl Downscaler for SizeOnly {
    type Bitmap = u32;

    fn downscale(&mut self, _image: ImageId, max_dimension: u32) -> Result<u32, ThumbnailError> {
        Ok(max_dimension)
    }
}

type Viewer = Coordinator<ThumbnailCache<SizeOnly>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn viewer() -> Viewer {
    init_tracing();
    let config = ViewerConfig::default();
    let mut viewer = Coordinator::with_config(&config, config.thumbnail_cache(SizeOnly));
    viewer.resize_main(SurfaceDimensions::new(800.0, 600.0));
    viewer.resize_overview(SurfaceDimensions::new(200.0, 200.0));
    viewer.load_image(Some(SourceImage {
        id: ImageId::new(1),
        dimensions: ImageDimensions::new(4000.0, 3000.0),
    }));
    viewer
}

/// Zooms to scale 1 at the top-left corner so a fifth of the image shows.
fn zoomed_in() -> Viewer {
    let mut viewer = viewer();
    let factor = 1.0 / viewer.main().scale();
    viewer.main_zoom_at(Point::ZERO, factor).expect("scale 1 is within limits");
    assert!(close(viewer.main().scale(), 1.0));
    viewer
}

#[test]
fn loading_fits_and_hides_the_indicator() {
    let viewer = viewer();
    assert!(close(viewer.main().scale(), 0.2));
    assert_eq!(viewer.viewport(), ViewportRect::FULL);
    assert!(viewer.overview().indicator().is_none());
    assert_eq!(viewer.overview().thumbnail(), Some(&200));
}

#[test]
fn main_changes_flow_to_the_overview() {
    let mut viewer = zoomed_in();
    let before = viewer.stats();

    viewer.main_pan_by(Vec2::new(-1000.0, -500.0)).expect("pan applies");
    let viewport = viewer.viewport();
    assert!(close(viewport.x, 0.25));
    assert!(close(viewport.y, 500.0 / 3000.0));
    assert!(close(viewport.width, 0.2));
    assert!(close(viewport.height, 0.2));

    let stats = viewer.stats();
    assert_eq!(stats.overview_updates, before.overview_updates + 1);
    assert_eq!(stats.main_updates, before.main_updates);
    assert_eq!(stats.suppressed, before.suppressed);
    assert!(!viewer.is_updating());
}

#[test]
fn overview_drag_updates_main_exactly_once() {
    let mut viewer = zoomed_in();
    let transforms = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&transforms);
    viewer
        .transform_changed()
        .subscribe(move |event| seen.borrow_mut().push(event.cause));
    let before = viewer.stats();

    // Center of the thumbnail (200x150 at y = 25).
    let event = viewer
        .overview_pointer_down(Point::new(100.0, 100.0))
        .expect("navigation");
    assert!(close(event.x, 0.4) && close(event.y, 0.4));

    let stats = viewer.stats();
    assert_eq!(stats.main_updates, before.main_updates + 1);
    assert_eq!(stats.overview_updates, before.overview_updates);
    assert_eq!(stats.suppressed, before.suppressed + 1);
    assert_eq!(*transforms.borrow(), vec![TransformCause::Navigate]);
    assert!(!viewer.is_updating());

    // Main view now shows the region the overview asked for.
    assert!(close(viewer.main().translate().x, -1600.0));
    assert!(close(viewer.main().translate().y, -1200.0));
    let main_viewport = viewer.main().viewport();
    assert!(close(main_viewport.x, 0.4) && close(main_viewport.y, 0.4));
    assert!(close(viewer.main().scale(), 1.0));
}

#[test]
fn drag_sequence_and_leave() {
    let mut viewer = zoomed_in();
    let viewports = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&viewports);
    viewer
        .viewport_changed()
        .subscribe(move |event: &ViewportChanged| seen.borrow_mut().push(*event));

    viewer.overview_pointer_down(Point::new(20.0, 40.0));
    viewer.overview_pointer_move(Point::new(60.0, 80.0));
    assert!(viewer.overview_pointer_leave());
    assert!(viewer.overview_pointer_move(Point::new(150.0, 150.0)).is_none());

    assert_eq!(viewports.borrow().len(), 2);
    assert_eq!(viewer.stats().suppressed, 2);
    let last = viewports.borrow()[1];
    let main_viewport = viewer.main().viewport();
    assert!(close(main_viewport.x, last.x) && close(main_viewport.y, last.y));
}

#[test]
fn navigation_without_image_is_skipped_and_releases_the_guard() {
    init_tracing();
    let mut viewer = Coordinator::new(ThumbnailCache::new(SizeOnly));
    viewer.resize_main(SurfaceDimensions::new(800.0, 600.0));
    viewer.notify_viewport_changed(ViewportChanged { x: 0.3, y: 0.3 });

    assert!(!viewer.is_updating());
    assert_eq!(viewer.stats().main_updates, 0);
    assert_eq!(viewer.main().translate(), Vec2::ZERO);
    assert!(viewer.overview_pointer_down(Point::new(10.0, 10.0)).is_none());

    // The guard is free for the next, real update.
    viewer.load_image(Some(SourceImage {
        id: ImageId::new(2),
        dimensions: ImageDimensions::new(1000.0, 1000.0),
    }));
    assert!(close(viewer.main().scale(), 0.6));
}

#[test]
fn resize_refreshes_the_indicator() {
    let mut viewer = zoomed_in();
    let overview_updates = viewer.stats().overview_updates;

    assert!(viewer.resize_main(SurfaceDimensions::new(400.0, 300.0)).is_none());
    assert_eq!(viewer.stats().overview_updates, overview_updates + 1);
    assert!(close(viewer.viewport().width, 0.1));
}

#[test]
fn reset_center_policy_on_resize() {
    init_tracing();
    let config = ViewerConfig::from_toml_str("resize_policy = \"reset-center\"").expect("valid");
    let mut viewer = Coordinator::with_config(&config, config.thumbnail_cache(SizeOnly));
    viewer.resize_main(SurfaceDimensions::new(800.0, 600.0));
    viewer.load_image(Some(SourceImage {
        id: ImageId::new(1),
        dimensions: ImageDimensions::new(4000.0, 3000.0),
    }));

    let event = viewer
        .resize_main(SurfaceDimensions::new(1024.0, 768.0))
        .expect("policy resets");
    assert_eq!(event.cause, TransformCause::Resize);
    assert_eq!(viewer.main().scale(), 1.0);
    assert_eq!(viewer.main().translate(), Vec2::ZERO);

    let expected = transform_to_viewport(
        ImageDimensions::new(4000.0, 3000.0),
        SurfaceDimensions::new(1024.0, 768.0),
        1.0,
        Vec2::ZERO,
    );
    assert_eq!(viewer.viewport(), expected);
}

#[test]
fn image_loaded_before_first_layout_is_fitted() {
    init_tracing();
    let mut viewer = Coordinator::new(ThumbnailCache::new(SizeOnly));
    viewer.resize_overview(SurfaceDimensions::new(200.0, 200.0));
    viewer.load_image(Some(SourceImage {
        id: ImageId::new(1),
        dimensions: ImageDimensions::new(4000.0, 3000.0),
    }));

    let causes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&causes);
    viewer
        .transform_changed()
        .subscribe(move |event| seen.borrow_mut().push(event.cause));

    let event = viewer
        .resize_main(SurfaceDimensions::new(800.0, 600.0))
        .expect("first layout fits");
    assert_eq!(event.cause, TransformCause::Fit);
    assert!(close(viewer.main().scale(), 0.2));
    assert_eq!(*causes.borrow(), vec![TransformCause::Fit]);
    assert_eq!(viewer.viewport(), ViewportRect::FULL);
    assert!(viewer.overview().indicator().is_none());
}

#[test]
fn reset_center_respects_configured_limits() {
    init_tracing();
    let config = ViewerConfig::from_toml_str(
        "resize_policy = \"reset-center\"\n[zoom]\nmin_scale = 2.0\nmax_scale = 8.0\n",
    )
    .expect("valid");
    let mut viewer = Coordinator::with_config(&config, config.thumbnail_cache(SizeOnly));
    viewer.resize_main(SurfaceDimensions::new(800.0, 600.0));
    viewer.load_image(Some(SourceImage {
        id: ImageId::new(1),
        dimensions: ImageDimensions::new(4000.0, 3000.0),
    }));
    assert!(close(viewer.main().scale(), 2.0));

    viewer
        .resize_main(SurfaceDimensions::new(1024.0, 768.0))
        .expect("policy resets");
    assert!(close(viewer.main().scale(), 2.0));
    assert!(viewer.main_wheel(Point::new(400.0, 300.0), 1.0).is_some());
}

#[test]
fn wheel_saturates_without_syncing() {
    let mut viewer = viewer();
    while viewer.main_wheel(Point::new(400.0, 300.0), -1.0).is_some() {}
    let stats = viewer.stats();
    assert!(viewer.main_wheel(Point::new(400.0, 300.0), -1.0).is_none());
    assert_eq!(viewer.stats(), stats);
    assert!(viewer.main().scale() >= viewer.main().limits().min_scale);
}
