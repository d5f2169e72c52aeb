//! Error type shared by rendering, configuration and output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Icons must be at least one pixel wide.
    #[error("Invalid icon size: {0}")]
    InvalidSize(u32),

    /// A shape could not be built for the requested size.
    #[error("Degenerate geometry for {size}px icon")]
    Geometry { size: u32 },

    /// The pixel buffer could not be allocated.
    #[error("Failed to allocate {size}x{size} canvas")]
    Canvas { size: u32 },

    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse SVG: {0}")]
    Svg(String),

    #[error("Invalid color: {value:?}")]
    InvalidColor { value: String },

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
