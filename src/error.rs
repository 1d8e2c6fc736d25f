//! Error types for embedding-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing the figure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer, crop region or figure.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Raw embedding coordinate outside the unit square.
    #[error("Embedding '{name}' is outside [0,1]x[0,1]: ({x}, {y})")]
    OutOfDomain {
        /// Embedding name.
        name: String,
        /// Raw x coordinate.
        x: f32,
        /// Raw y coordinate.
        y: f32,
    },

    /// Vectorized transform failed.
    #[error("Transform error: {0}")]
    Transform(String),

    /// Rendering error.
    #[error("Rendering error: {0}")]
    Rendering(String),
}
