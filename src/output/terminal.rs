//! Terminal preview of a rendered figure.
//!
//! Stands in for an interactive viewer: the framebuffer is downsampled to
//! character cells and printed as ANSI half-blocks (two pixels per cell)
//! or as an ASCII ink ramp for terminals without color.
//!
//! Downsampling keeps the pixel with the most "ink" (furthest from the
//! background) in each cell, so one-pixel-wide arrows and text survive a
//! 30x reduction instead of averaging away into the background.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use std::fmt::Write as FmtWrite;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    /// ASCII characters by ink density (no color).
    Ascii,
    /// Upper half-block with 24-bit foreground and background colors.
    #[default]
    HalfBlock,
}

/// Downsampling terminal renderer.
#[derive(Debug, Clone)]
pub struct TerminalPreview {
    mode: PreviewMode,
    columns: u32,
    background: Rgba,
}

impl Default for TerminalPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPreview {
    /// Ink ramp from empty to full.
    const ASCII_RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Monospace cells are about twice as tall as they are wide.
    const CELL_ASPECT: f32 = 2.0;

    /// An 80-column half-block preview on a white background.
    #[must_use]
    pub fn new() -> Self {
        Self { mode: PreviewMode::default(), columns: 80, background: Rgba::WHITE }
    }

    /// Set the rendering mode.
    #[must_use]
    pub fn mode(mut self, mode: PreviewMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output width in characters (at least 1).
    #[must_use]
    pub fn columns(mut self, columns: u32) -> Self {
        self.columns = columns.max(1);
        self
    }

    /// Set the color treated as empty paper.
    #[must_use]
    pub fn background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// Output size as (columns, text lines).
    #[must_use]
    pub fn grid_size(&self, fb: &Framebuffer) -> (u32, u32) {
        let columns = self.columns.min(fb.width());
        let cell = fb.width() as f32 / columns as f32;
        let lines = (fb.height() as f32 / (cell * Self::CELL_ASPECT)).round() as u32;
        (columns, lines.max(1))
    }

    /// Render a framebuffer to a string of text lines.
    #[must_use]
    pub fn render(&self, fb: &Framebuffer) -> String {
        let (columns, lines) = self.grid_size(fb);
        let cell_w = fb.width() as f32 / columns as f32;
        let cell_h = fb.height() as f32 / lines as f32;

        let mut output = String::new();
        for line in 0..lines {
            let y0 = line as f32 * cell_h;
            for col in 0..columns {
                let x0 = col as f32 * cell_w;
                match self.mode {
                    PreviewMode::Ascii => {
                        let ink = self.ink(self.sample(fb, x0, y0, cell_w, cell_h));
                        output.push(Self::ASCII_RAMP[Self::ramp_index(ink)]);
                    }
                    PreviewMode::HalfBlock => {
                        let top = self.sample(fb, x0, y0, cell_w, cell_h / 2.0);
                        let bottom = self.sample(fb, x0, y0 + cell_h / 2.0, cell_w, cell_h / 2.0);
                        let _ = write!(
                            output,
                            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m\u{2580}",
                            top.r, top.g, top.b, bottom.r, bottom.g, bottom.b
                        );
                    }
                }
            }
            if self.mode == PreviewMode::HalfBlock {
                output.push_str("\x1b[0m");
            }
            output.push('\n');
        }
        output
    }

    /// Write the preview to stdout.
    pub fn print(&self, fb: &Framebuffer) {
        print!("{}", self.render(fb));
    }

    /// Pixel with the most ink inside the given cell.
    fn sample(&self, fb: &Framebuffer, x0: f32, y0: f32, w: f32, h: f32) -> Rgba {
        let xs = x0.floor() as u32..((x0 + w).ceil() as u32).min(fb.width()).max(x0 as u32 + 1);
        let ys = y0.floor() as u32..((y0 + h).ceil() as u32).min(fb.height()).max(y0 as u32 + 1);

        let mut best = self.background;
        let mut best_ink = 0.0;
        for y in ys {
            for x in xs.clone() {
                if let Some(pixel) = fb.get_pixel(x, y) {
                    let ink = self.ink(pixel);
                    if ink > best_ink {
                        best_ink = ink;
                        best = pixel;
                    }
                }
            }
        }
        best
    }

    /// Distance from the background, 0.0 (paper) to 1.0 (opposite corner).
    fn ink(&self, pixel: Rgba) -> f32 {
        let d = |a: u8, b: u8| (f32::from(a) - f32::from(b)).abs() / 255.0;
        let bg = self.background;
        d(pixel.r, bg.r).max(d(pixel.g, bg.g)).max(d(pixel.b, bg.b))
    }

    fn ramp_index(ink: f32) -> usize {
        let idx = (ink * (Self::ASCII_RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::ASCII_RAMP.len() - 1)
    }
}
