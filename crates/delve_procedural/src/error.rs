//! # Generator Error Types
//!
//! Generation itself never fails. These errors cover the only fallible
//! surface: loading and validating a [`GeneratorConfig`](crate::GeneratorConfig).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring the dungeon generator.
#[derive(Error, Debug)]
pub enum DungeonError {
    /// A configuration value is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration text is not valid TOML for a generator config.
    #[error("malformed configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration file {}: {source}", .path.display())]
    ConfigRead {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

/// Result type for generator configuration.
pub type DungeonResult<T> = Result<T, DungeonError>;
