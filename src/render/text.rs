//! Bitmap text rendering.
//!
//! Uses the classic 5x7 LCD font (printable ASCII, column-major, bit 0 at
//! the top) scaled up by an integer factor. Rows 0-6 sit above the baseline,
//! row 7 holds descenders.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 8;
const GLYPH_ADVANCE: u32 = 6;
const BASELINE_ROW: u32 = 7;

/// Glyph columns for `' '..='~'`.
#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x5F, 0x00, 0x00], [0x00, 0x07, 0x00, 0x07, 0x00],
    [0x14, 0x7F, 0x14, 0x7F, 0x14], [0x24, 0x2A, 0x7F, 0x2A, 0x12], [0x23, 0x13, 0x08, 0x64, 0x62],
    [0x36, 0x49, 0x56, 0x20, 0x50], [0x00, 0x08, 0x07, 0x03, 0x00], [0x00, 0x1C, 0x22, 0x41, 0x00],
    [0x00, 0x41, 0x22, 0x1C, 0x00], [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], [0x08, 0x08, 0x3E, 0x08, 0x08],
    [0x00, 0x80, 0x70, 0x30, 0x00], [0x08, 0x08, 0x08, 0x08, 0x08], [0x00, 0x00, 0x60, 0x60, 0x00],
    [0x20, 0x10, 0x08, 0x04, 0x02], [0x3E, 0x51, 0x49, 0x45, 0x3E], [0x00, 0x42, 0x7F, 0x40, 0x00],
    [0x72, 0x49, 0x49, 0x49, 0x46], [0x21, 0x41, 0x49, 0x4D, 0x33], [0x18, 0x14, 0x12, 0x7F, 0x10],
    [0x27, 0x45, 0x45, 0x45, 0x39], [0x3C, 0x4A, 0x49, 0x49, 0x31], [0x41, 0x21, 0x11, 0x09, 0x07],
    [0x36, 0x49, 0x49, 0x49, 0x36], [0x46, 0x49, 0x49, 0x29, 0x1E], [0x00, 0x00, 0x14, 0x00, 0x00],
    [0x00, 0x40, 0x34, 0x00, 0x00], [0x00, 0x08, 0x14, 0x22, 0x41], [0x14, 0x14, 0x14, 0x14, 0x14],
    [0x00, 0x41, 0x22, 0x14, 0x08], [0x02, 0x01, 0x59, 0x09, 0x06], [0x3E, 0x41, 0x5D, 0x59, 0x4E],
    [0x7C, 0x12, 0x11, 0x12, 0x7C], [0x7F, 0x49, 0x49, 0x49, 0x36], [0x3E, 0x41, 0x41, 0x41, 0x22],
    [0x7F, 0x41, 0x41, 0x41, 0x3E], [0x7F, 0x49, 0x49, 0x49, 0x41], [0x7F, 0x09, 0x09, 0x09, 0x01],
    [0x3E, 0x41, 0x41, 0x51, 0x73], [0x7F, 0x08, 0x08, 0x08, 0x7F], [0x00, 0x41, 0x7F, 0x41, 0x00],
    [0x20, 0x40, 0x41, 0x3F, 0x01], [0x7F, 0x08, 0x14, 0x22, 0x41], [0x7F, 0x40, 0x40, 0x40, 0x40],
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], [0x7F, 0x04, 0x08, 0x10, 0x7F], [0x3E, 0x41, 0x41, 0x41, 0x3E],
    [0x7F, 0x09, 0x09, 0x09, 0x06], [0x3E, 0x41, 0x51, 0x21, 0x5E], [0x7F, 0x09, 0x19, 0x29, 0x46],
    [0x26, 0x49, 0x49, 0x49, 0x32], [0x03, 0x01, 0x7F, 0x01, 0x03], [0x3F, 0x40, 0x40, 0x40, 0x3F],
    [0x1F, 0x20, 0x40, 0x20, 0x1F], [0x3F, 0x40, 0x38, 0x40, 0x3F], [0x63, 0x14, 0x08, 0x14, 0x63],
    [0x03, 0x04, 0x78, 0x04, 0x03], [0x61, 0x59, 0x49, 0x4D, 0x43], [0x00, 0x7F, 0x41, 0x41, 0x41],
    [0x02, 0x04, 0x08, 0x10, 0x20], [0x00, 0x41, 0x41, 0x41, 0x7F], [0x04, 0x02, 0x01, 0x02, 0x04],
    [0x40, 0x40, 0x40, 0x40, 0x40], [0x00, 0x03, 0x07, 0x08, 0x00], [0x20, 0x54, 0x54, 0x78, 0x40],
    [0x7F, 0x28, 0x44, 0x44, 0x38], [0x38, 0x44, 0x44, 0x44, 0x28], [0x38, 0x44, 0x44, 0x28, 0x7F],
    [0x38, 0x54, 0x54, 0x54, 0x18], [0x00, 0x08, 0x7E, 0x09, 0x02], [0x18, 0xA4, 0xA4, 0x9C, 0x78],
    [0x7F, 0x08, 0x04, 0x04, 0x78], [0x00, 0x44, 0x7D, 0x40, 0x00], [0x20, 0x40, 0x40, 0x3D, 0x00],
    [0x7F, 0x10, 0x28, 0x44, 0x00], [0x00, 0x41, 0x7F, 0x40, 0x00], [0x7C, 0x04, 0x78, 0x04, 0x78],
    [0x7C, 0x08, 0x04, 0x04, 0x78], [0x38, 0x44, 0x44, 0x44, 0x38], [0xFC, 0x18, 0x24, 0x24, 0x18],
    [0x18, 0x24, 0x24, 0x18, 0xFC], [0x7C, 0x08, 0x04, 0x04, 0x08], [0x48, 0x54, 0x54, 0x54, 0x24],
    [0x04, 0x04, 0x3F, 0x44, 0x24], [0x3C, 0x40, 0x40, 0x20, 0x7C], [0x1C, 0x20, 0x40, 0x20, 0x1C],
    [0x3C, 0x40, 0x30, 0x40, 0x3C], [0x44, 0x28, 0x10, 0x28, 0x44], [0x4C, 0x90, 0x90, 0x90, 0x7C],
    [0x44, 0x64, 0x54, 0x4C, 0x44], [0x00, 0x08, 0x36, 0x41, 0x00], [0x00, 0x00, 0x77, 0x00, 0x00],
    [0x00, 0x41, 0x36, 0x08, 0x00], [0x02, 0x01, 0x02, 0x04, 0x02],
];

/// Horizontal alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// Anchor is the top of the glyph cell.
    Top,
    /// Anchor is the middle of the glyph cell.
    Middle,
    /// Anchor sits on the baseline (descenders hang below).
    #[default]
    Alphabetic,
    /// Anchor is the bottom of the glyph cell.
    Bottom,
}

/// Text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Rotated 90 degrees counter-clockwise, reading bottom to top.
    Vertical,
}

/// An integer-scaled bitmap font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapFont {
    scale: u32,
}

impl BitmapFont {
    /// Font drawn with each glyph pixel as a `scale` x `scale` block.
    #[must_use]
    pub const fn new(scale: u32) -> Self {
        Self { scale: if scale == 0 { 1 } else { scale } }
    }

    /// Font whose glyph cell height matches a point size at the given DPI.
    #[must_use]
    pub fn for_points(points: f32, dpi: f32) -> Self {
        let cell_px = points * dpi / 72.0;
        Self::new((cell_px / GLYPH_HEIGHT as f32).round() as u32)
    }

    /// Pixel block size.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Size of the rendered text block as `(along, across)` in pixels,
    /// before rotation.
    #[must_use]
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return (0, 0);
        }
        let along = (chars * GLYPH_ADVANCE - (GLYPH_ADVANCE - GLYPH_WIDTH)) * self.scale;
        (along, GLYPH_HEIGHT * self.scale)
    }

    /// Draw `text` positioned relative to `anchor`.
    pub fn draw(
        &self,
        fb: &mut Framebuffer,
        text: &str,
        anchor: Point,
        align: (TextAnchor, Baseline),
        orientation: Orientation,
        color: Rgba,
    ) {
        let (along, across) = self.measure(text);
        if along == 0 {
            return;
        }
        let s = self.scale as i32;

        let offset_u = match align.0 {
            TextAnchor::Start => 0,
            TextAnchor::Middle => -(along as i32) / 2,
            TextAnchor::End => -(along as i32),
        };
        let offset_v = match align.1 {
            Baseline::Top => 0,
            Baseline::Middle => -(across as i32) / 2,
            Baseline::Alphabetic => -((BASELINE_ROW * self.scale) as i32),
            Baseline::Bottom => -(across as i32),
        };

        let ax = anchor.x.round() as i32;
        let ay = anchor.y.round() as i32;

        for (i, ch) in text.chars().enumerate() {
            let glyph = glyph_for(ch);
            let cell_u = offset_u + (i as i32) * (GLYPH_ADVANCE as i32) * s;

            for (col, bits) in glyph.iter().enumerate() {
                for row in 0..GLYPH_HEIGHT {
                    if bits & (1 << row) == 0 {
                        continue;
                    }
                    let u = cell_u + (col as i32) * s;
                    let v = offset_v + (row as i32) * s;
                    let (x, y) = match orientation {
                        Orientation::Horizontal => (ax + u, ay + v),
                        Orientation::Vertical => (ax + v, ay - u - s),
                    };
                    for dy in 0..s {
                        fb.paint_span(x, x + s, y + dy, color);
                    }
                }
            }
        }
    }
}

fn glyph_for(ch: char) -> &'static [u8; 5] {
    let code = ch as u32;
    let index = if (0x20..=0x7E).contains(&code) { code - 0x20 } else { u32::from(b'?') - 0x20 };
    &GLYPHS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> Framebuffer {
        let mut fb = Framebuffer::new(200, 200).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_for_points_scale() {
        assert_eq!(BitmapFont::for_points(12.0, 300.0).scale(), 6);
        assert_eq!(BitmapFont::for_points(16.0, 300.0).scale(), 8);
        assert_eq!(BitmapFont::for_points(1.0, 72.0).scale(), 1);
    }

    #[test]
    fn test_measure() {
        let font = BitmapFont::new(2);
        assert_eq!(font.measure(""), (0, 0));
        assert_eq!(font.measure("A"), (10, 16));
        assert_eq!(font.measure("Big"), (34, 16));
    }

    #[test]
    fn test_draw_horizontal_stays_in_box() {
        let mut fb = canvas();
        let font = BitmapFont::new(3);
        font.draw(
            &mut fb,
            "Fish",
            Point::new(50.0, 50.0),
            (TextAnchor::Start, Baseline::Top),
            Orientation::Horizontal,
            Rgba::BLUE,
        );

        let bounds = fb.content_bounds(Rgba::WHITE).unwrap();
        let (w, h) = font.measure("Fish");
        assert!(bounds.x >= 50 && bounds.right() <= 50 + w);
        assert!(bounds.y >= 50 && bounds.bottom() <= 50 + h);
        assert!(fb.count_color(Rgba::BLUE) > 0);
    }

    #[test]
    fn test_draw_end_anchor_ends_at_anchor() {
        let mut fb = canvas();
        let font = BitmapFont::new(2);
        font.draw(
            &mut fb,
            "Small",
            Point::new(150.0, 100.0),
            (TextAnchor::End, Baseline::Middle),
            Orientation::Horizontal,
            Rgba::BLACK,
        );

        let bounds = fb.content_bounds(Rgba::WHITE).unwrap();
        assert!(bounds.right() <= 150);
        assert!(bounds.right() >= 140);
    }

    #[test]
    fn test_draw_vertical_is_taller_than_wide() {
        let mut fb = canvas();
        let font = BitmapFont::new(2);
        font.draw(
            &mut fb,
            "Terrestrial",
            Point::new(100.0, 100.0),
            (TextAnchor::Middle, Baseline::Bottom),
            Orientation::Vertical,
            Rgba::BLACK,
        );

        let bounds = fb.content_bounds(Rgba::WHITE).unwrap();
        assert!(bounds.height > bounds.width);
        assert!(bounds.right() <= 100);
    }

    #[test]
    fn test_unknown_char_renders_placeholder() {
        let mut fb = canvas();
        let font = BitmapFont::new(1);
        font.draw(
            &mut fb,
            "\u{e9}",
            Point::new(10.0, 10.0),
            (TextAnchor::Start, Baseline::Top),
            Orientation::Horizontal,
            Rgba::RED,
        );
        assert!(fb.count_color(Rgba::RED) > 0);
    }
}
