// Copyright 2025 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors raised while loading a [`ViewerConfig`](crate::ViewerConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML.
    #[error("Could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result alias for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
