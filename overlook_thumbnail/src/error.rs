// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::ImageId;

/// Reasons a [`Downscaler`](crate::Downscaler) could not produce a thumbnail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    /// The host no longer holds pixels for this image.
    #[error("Unknown image {0}")]
    UnknownImage(ImageId),

    /// The source image has no pixels, or the requested size is zero.
    #[error("Empty image or zero target size")]
    EmptyImage,

    /// The scaler itself failed.
    #[error("Downscale failed: {0}")]
    Downscale(String),
}

/// Result alias for thumbnail generation.
pub type Result<T> = core::result::Result<T, ThumbnailError>;
