// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewer settings loaded from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! resize_policy = "preserve"   # or "reset-center", "refit"
//!
//! [zoom]
//! min_scale = 0.01
//! max_scale = 32.0
//! factor = 1.2
//!
//! [thumbnail]
//! capacity = 50
//!
//! [indicator]
//! stroke_width = 2.0
//! hover_stroke_width = 3.0
//! ```

use std::path::Path;

use overlook_birdseye::IndicatorStyle;
use overlook_thumbnail::{DEFAULT_CAPACITY, Downscaler, ThumbnailCache};
use overlook_view::{DEFAULT_ZOOM_FACTOR, ResizePolicy, ZoomLimits};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::main_view::MainView;

/// Zoom range and wheel step for the main view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Multiplier for one wheel notch; zooming out uses its inverse.
    pub factor: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: ZoomLimits::DEFAULT.min_scale,
            max_scale: ZoomLimits::DEFAULT.max_scale,
            factor: DEFAULT_ZOOM_FACTOR,
        }
    }
}

impl ZoomConfig {
    /// The configured range as [`ZoomLimits`].
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.min_scale, self.max_scale)
    }
}

/// Thumbnail cache sizing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// Number of thumbnails kept before the oldest is evicted.
    pub capacity: usize,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// All viewer settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// What the main view does on resize.
    pub resize_policy: ResizePolicy,
    /// Zoom range and step.
    pub zoom: ZoomConfig,
    /// Thumbnail cache sizing.
    pub thumbnail: ThumbnailConfig,
    /// Overview indicator strokes.
    pub indicator: IndicatorStyle,
}

impl ViewerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that every value is usable.
    pub fn validate(&self) -> Result<()> {
        let zoom = &self.zoom;
        if !(zoom.min_scale > 0.0 && zoom.min_scale.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "zoom.min_scale must be positive, got {}",
                zoom.min_scale
            )));
        }
        if !(zoom.max_scale >= zoom.min_scale && zoom.max_scale.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "zoom.max_scale must be at least zoom.min_scale ({}), got {}",
                zoom.min_scale, zoom.max_scale
            )));
        }
        if !(zoom.factor > 1.0 && zoom.factor.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "zoom.factor must be greater than 1, got {}",
                zoom.factor
            )));
        }
        if self.thumbnail.capacity == 0 {
            return Err(ConfigError::Invalid("thumbnail.capacity must be at least 1".to_owned()));
        }
        let style = &self.indicator;
        if !(style.stroke_width >= 0.0 && style.hover_stroke_width >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "indicator stroke widths must not be negative, got {} and {}",
                style.stroke_width, style.hover_stroke_width
            )));
        }
        Ok(())
    }

    /// Builds an empty main view with these settings.
    #[must_use]
    pub fn main_view(&self) -> MainView {
        MainView::new(self.zoom.limits(), self.zoom.factor, self.resize_policy)
    }

    /// Builds a thumbnail cache of the configured capacity.
    #[must_use]
    pub fn thumbnail_cache<D: Downscaler>(&self, downscaler: D) -> ThumbnailCache<D> {
        ThumbnailCache::with_capacity(downscaler, self.thumbnail.capacity)
    }
}
