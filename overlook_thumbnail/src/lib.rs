// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlook Thumbnail: scaled bitmaps for the overview pane.
//!
//! The overview asks for a thumbnail of the current image no larger than a
//! given dimension. This crate defines that request as the
//! [`ThumbnailProvider`] trait and ships [`ThumbnailCache`], a bounded,
//! insertion-ordered cache that memoizes the results of a host-supplied
//! [`Downscaler`].
//!
//! Pixel work stays with the host: bitmaps are an associated type, usually a
//! cheaply clonable handle such as `Arc<RgbaImage>` or a GPU texture id.
//!
//! ```rust
//! use overlook_thumbnail::{
//!     Downscaler, ImageId, ThumbnailCache, ThumbnailError, ThumbnailProvider,
//! };
//!
//! struct Sizes;
//!
//! impl Downscaler for Sizes {
//!     type Bitmap = (u32, u32);
//!
//!     fn downscale(&mut self, _image: ImageId, max_dimension: u32) -> Result<(u32, u32), ThumbnailError> {
//!         Ok((max_dimension, max_dimension / 2))
//!     }
//! }
//!
//! let mut cache = ThumbnailCache::new(Sizes);
//! let thumb = cache.get_or_create(ImageId::new(7), 200);
//! assert_eq!(thumb, Some((200, 100)));
//! assert_eq!(cache.len(), 1);
//! ```

mod cache;
mod error;
mod plan;

pub use cache::{DEFAULT_CAPACITY, Downscaler, ThumbnailCache};
pub use error::{Result, ThumbnailError};
pub use plan::{ThumbnailPlan, thumbnail_plan};

/// Identity of a loaded source image.
///
/// Hosts pick ids (a path hash, a database key, a load counter); the cache
/// only requires that an id is never reused for different pixels without
/// calling [`ThumbnailCache::forget_image`] first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ImageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Supplies a scaled bitmap for an image and a target size.
///
/// Calls after the first one for the same `(image, max_dimension)` pair are
/// expected to be O(1).
pub trait ThumbnailProvider {
    /// The bitmap handle handed to the overview.
    type Bitmap: Clone;

    /// Returns a bitmap of `image` whose longer side does not exceed
    /// `max_dimension`, or `None` if none can be produced.
    fn get_or_create(&mut self, image: ImageId, max_dimension: u32) -> Option<Self::Bitmap>;
}
