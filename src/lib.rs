//! # Embedding-Viz
//!
//! Renders a labeled 2D vector diagram of five hand-placed word embeddings
//! to a PNG, using a small pure Rust rasterizer.
//!
//! Raw embeddings sit in the unit square (aquatic/terrestrial by
//! small/big). They are mapped into a centered `[-1, 1]` convention, then
//! drawn as colored markers with arrows from the origin, offset labels,
//! center axes, a dashed grid and word-valued tick labels.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use embedding_viz::prelude::*;
//!
//! let points = transform_all(&EMBEDDINGS)?;
//! let figure = EmbeddingFigure::new(Scene::embedding_diagram(&points));
//! figure.save("embedding_example.png")?;
//! # Ok::<(), embedding_viz::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. [`embedding`]: fixed table and the affine display transform
//! 2. [`scene`]: data-space display list
//! 3. [`figure`]: pixel layout, rasterization, tight crop
//! 4. [`output`]: PNG file and terminal preview

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and the fixed vector palette.
pub mod color;

/// RGBA pixel buffer.
pub mod framebuffer;

/// Points, lines and pixel rectangles.
pub mod geometry;

/// Data-to-pixel scales.
pub mod scale;

// ============================================================================
// Figure Modules
// ============================================================================

/// Fixed embeddings and the display transform.
pub mod embedding;

/// Data-space display list.
pub mod scene;

/// Layout and rasterization of a scene.
pub mod figure;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of primitives and text.
pub mod render;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for embedding-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust,ignore
/// use embedding_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{palette_color, Rgba, VECTOR_PALETTE};
    pub use crate::embedding::{transform_all, Embedding, TransformedPoint, EMBEDDINGS};
    pub use crate::error::{Error, Result};
    pub use crate::figure::{EmbeddingFigure, FigureStyle};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::Point;
    pub use crate::output::{PngEncoder, PreviewMode, TerminalPreview};
    pub use crate::scene::{Mark, MarkKind, Scene};
    pub use batuta_common::display::WithDimensions;
}
