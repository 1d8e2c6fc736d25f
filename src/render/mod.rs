//! Rasterization of geometric primitives and text.
//!
//! # Algorithms
//!
//! - **Scanline polygon fill**: even-odd rule sampled at pixel centers;
//!   thick lines, dashes and arrowheads are all polygons
//! - **Wu's Anti-aliased Line**: hairlines thinner than 1.5 pixels
//! - **Midpoint Circle**: filled scatter markers
//! - **Bitmap text**: integer-scaled 5x7 glyphs, horizontal or rotated
//!
//! # References
//!
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

mod primitives;
mod text;

pub use primitives::{
    draw_circle, draw_dashed_line, draw_line_aa, draw_marker, draw_thick_line, fill_polygon,
    fill_triangle,
};
pub use text::{Baseline, BitmapFont, Orientation, TextAnchor};
