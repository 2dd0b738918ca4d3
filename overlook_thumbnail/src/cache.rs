// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded memoization of downscaled thumbnails.
//!
//! Entries are keyed by `(image, max_dimension)`. When the cache is full the
//! oldest *inserted* entry is evicted, regardless of how recently it was
//! read. Failed downscales are never cached, so a later request retries.

use std::collections::VecDeque;

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::error::Result;
use crate::{ImageId, ThumbnailProvider};

/// Number of thumbnails kept before eviction starts.
pub const DEFAULT_CAPACITY: usize = 50;

/// Produces a thumbnail bitmap for an image.
///
/// Implementations typically consult [`thumbnail_plan`](crate::thumbnail_plan)
/// and hand out the source bitmap unchanged when it already fits.
pub trait Downscaler {
    /// The bitmap handle produced.
    type Bitmap: Clone;

    /// Scales `image` so that its longer side is at most `max_dimension`.
    fn downscale(&mut self, image: ImageId, max_dimension: u32) -> Result<Self::Bitmap>;
}

type Key = (ImageId, u32);

/// A bounded [`ThumbnailProvider`] backed by a [`Downscaler`].
pub struct ThumbnailCache<D: Downscaler> {
    downscaler: D,
    capacity: usize,
    entries: HashMap<Key, D::Bitmap>,
    order: VecDeque<Key>,
}

impl<D: Downscaler> core::fmt::Debug for ThumbnailCache<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

impl<D: Downscaler> ThumbnailCache<D> {
    /// Creates a cache holding up to [`DEFAULT_CAPACITY`] thumbnails.
    #[must_use]
    pub fn new(downscaler: D) -> Self {
        Self::with_capacity(downscaler, DEFAULT_CAPACITY)
    }

    /// Creates a cache holding up to `capacity` thumbnails (at least one).
    #[must_use]
    pub fn with_capacity(downscaler: D, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            downscaler,
            capacity,
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    /// Maximum number of cached thumbnails.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached thumbnails.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if a thumbnail for this pair is cached.
    #[must_use]
    pub fn contains(&self, image: ImageId, max_dimension: u32) -> bool {
        self.entries.contains_key(&(image, max_dimension))
    }

    /// Drops every cached size of `image`, returning how many were removed.
    ///
    /// Call this before reusing an id for different pixels.
    pub fn forget_image(&mut self, image: ImageId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.0 != image);
        self.order.retain(|key| key.0 != image);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(%image, removed, "forgot cached thumbnails");
        }
        removed
    }

    /// Drops every cached thumbnail.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Shared access to the downscaler.
    #[must_use]
    pub fn downscaler(&self) -> &D {
        &self.downscaler
    }

    /// Mutable access to the downscaler.
    pub fn downscaler_mut(&mut self) -> &mut D {
        &mut self.downscaler
    }

    fn insert(&mut self, key: Key, bitmap: D::Bitmap) {
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            debug!(image = %oldest.0, max_dimension = oldest.1, "evicted thumbnail");
        }
        self.entries.insert(key, bitmap);
        self.order.push_back(key);
    }
}

impl<D: Downscaler> ThumbnailProvider for ThumbnailCache<D> {
    type Bitmap = D::Bitmap;

    fn get_or_create(&mut self, image: ImageId, max_dimension: u32) -> Option<D::Bitmap> {
        let key = (image, max_dimension);
        if let Some(bitmap) = self.entries.get(&key) {
            return Some(bitmap.clone());
        }

        match self.downscaler.downscale(image, max_dimension) {
            Ok(bitmap) => {
                debug!(%image, max_dimension, "cached new thumbnail");
                self.insert(key, bitmap.clone());
                Some(bitmap)
            }
            Err(err) => {
                warn!(%image, max_dimension, error = %err, "thumbnail generation failed");
                None
            }
        }
    }
}
