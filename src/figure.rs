//! Figure layout and rasterization of a [`Scene`].
//!
//! Sizes in [`FigureStyle`] are in typographic points (1/72 inch) and are
//! converted to pixels with the figure DPI, so the same style renders the
//! same picture at any resolution.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::{PixelRect, Point};
use crate::output::PngEncoder;
use crate::render::{
    draw_dashed_line, draw_marker, draw_thick_line, fill_triangle, Baseline, BitmapFont,
    Orientation, TextAnchor,
};
use crate::scale::{LinearScale, PointScale, Scale};
use crate::scene::{ArrowShape, Mark, Scene, HEAD_LENGTH, HEAD_WIDTH};
use std::path::Path;

/// Non-data appearance of the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureStyle {
    /// Canvas color; also the color trimmed by the tight crop.
    pub background: Rgba,
    /// Color of tick marks, tick labels, captions and title.
    pub text_color: Rgba,
    /// Axes box edges as fractions of the canvas: (left, right, bottom, top),
    /// measured from the bottom-left corner.
    pub subplot: (f32, f32, f32, f32),
    /// Marker diameter (pt).
    pub marker_size: f32,
    /// Arrow shaft width (pt).
    pub arrow_width: f32,
    /// Center axis line color.
    pub axis_color: Rgba,
    /// Center axis line width (pt).
    pub axis_width: f32,
    /// Grid line color before alpha.
    pub grid_color: Rgba,
    /// Grid opacity (0.0-1.0).
    pub grid_alpha: f32,
    /// Grid line width (pt).
    pub grid_width: f32,
    /// Grid dash pattern as (on, off) in pt.
    pub grid_dash: (f32, f32),
    /// Tick mark length (pt).
    pub tick_length: f32,
    /// Tick mark width (pt).
    pub tick_width: f32,
    /// Gap between tick mark and tick label (pt).
    pub tick_pad: f32,
    /// Tick label font size (pt).
    pub tick_font: f32,
    /// Point label font size (pt).
    pub label_font: f32,
    /// Axis caption font size (pt).
    pub caption_font: f32,
    /// Gap between tick labels and captions (pt).
    pub caption_pad: f32,
    /// Title font size (pt).
    pub title_font: f32,
    /// Gap between the axes box and the title (pt).
    pub title_pad: f32,
    /// Padding kept around the content by the tight crop (inches).
    pub tight_pad: f32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            text_color: Rgba::BLACK,
            subplot: (0.125, 0.9, 0.11, 0.88),
            marker_size: 6.0,
            arrow_width: 1.0,
            axis_color: Rgba::BLACK,
            axis_width: 1.2,
            grid_color: Rgba::GRID_GREY,
            grid_alpha: 0.5,
            grid_width: 0.8,
            grid_dash: (2.96, 1.28),
            tick_length: 3.5,
            tick_width: 0.8,
            tick_pad: 3.5,
            tick_font: 10.0,
            label_font: 12.0,
            caption_font: 14.0,
            caption_pad: 4.0,
            title_font: 16.0,
            title_pad: 6.0,
            tight_pad: 0.1,
        }
    }
}

/// Pixel placement of the axes box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Axes box in canvas pixels.
    pub axes: PixelRect,
    /// Data-to-pixel mapping inside the axes box.
    pub scale: PointScale,
}

/// Renders a [`Scene`] at a fixed physical size and resolution.
#[derive(Debug, Clone)]
pub struct EmbeddingFigure {
    scene: Scene,
    style: FigureStyle,
    width: u32,
    height: u32,
    dpi: f32,
    tight: bool,
}

impl EmbeddingFigure {
    /// Default figure side length in inches.
    pub const DEFAULT_SIZE_INCHES: f32 = 8.0;
    /// Default resolution.
    pub const DEFAULT_DPI: f32 = 300.0;

    /// An 8x8 inch, 300 DPI figure with a tight bounding box.
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        let side = (Self::DEFAULT_SIZE_INCHES * Self::DEFAULT_DPI).round() as u32;
        Self {
            scene,
            style: FigureStyle::default(),
            width: side,
            height: side,
            dpi: Self::DEFAULT_DPI,
            tight: true,
        }
    }

    /// Set the resolution, keeping the physical size.
    #[must_use]
    pub fn dpi(mut self, dpi: f32) -> Self {
        let ratio = dpi / self.dpi;
        self.width = (self.width as f32 * ratio).round() as u32;
        self.height = (self.height as f32 * ratio).round() as u32;
        self.dpi = dpi;
        self
    }

    /// Set the physical size at the current resolution.
    #[must_use]
    pub fn size_inches(mut self, width: f32, height: f32) -> Self {
        self.width = (width * self.dpi).round() as u32;
        self.height = (height * self.dpi).round() as u32;
        self
    }

    /// Crop the output to the drawn content plus [`FigureStyle::tight_pad`].
    #[must_use]
    pub fn tight(mut self, tight: bool) -> Self {
        self.tight = tight;
        self
    }

    /// Replace the style.
    #[must_use]
    pub fn style(mut self, style: FigureStyle) -> Self {
        self.style = style;
        self
    }

    /// Canvas size in pixels before any crop.
    #[must_use]
    pub const fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The scene being drawn.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Points to pixels at the figure resolution.
    fn px(&self, points: f32) -> f32 {
        points * self.dpi / 72.0
    }

    fn font(&self, points: f32) -> BitmapFont {
        BitmapFont::for_points(points, self.dpi)
    }

    /// Place the axes box and build the data-to-pixel scales.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas or the axes box is empty.
    pub fn layout(&self) -> Result<Layout> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions { width: self.width, height: self.height });
        }

        let (left, right, bottom, top) = self.style.subplot;
        let w = self.width as f32;
        let h = self.height as f32;
        let x0 = (left * w).round();
        let x1 = (right * w).round();
        let y0 = ((1.0 - top) * h).round();
        let y1 = ((1.0 - bottom) * h).round();
        if x1 <= x0 || y1 <= y0 {
            return Err(Error::Rendering(format!(
                "empty axes box for subplot {:?}",
                self.style.subplot
            )));
        }

        let scale = PointScale::new(
            LinearScale::new(self.scene.x_limits, (x0, x1))?,
            LinearScale::new(self.scene.y_limits, (y1, y0))?,
        );
        let axes = PixelRect::new(x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32);
        tracing::debug!(?axes, dpi = self.dpi, "figure layout");

        Ok(Layout { axes, scale })
    }

    /// Rasterize the figure, applying the tight crop if enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is invalid.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let layout = self.layout()?;
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(self.style.background);

        // Markers and arrows sit under the grid; axes and labels go on top.
        for mark in self.scene.marks() {
            if !matches!(mark, Mark::Label { .. }) {
                self.draw_mark(&mut fb, &layout, mark);
            }
        }
        if self.scene.show_grid {
            self.draw_grid(&mut fb, &layout);
        }
        if self.scene.show_center_axes {
            self.draw_center_axes(&mut fb, &layout);
        }
        for mark in self.scene.marks() {
            if matches!(mark, Mark::Label { .. }) {
                self.draw_mark(&mut fb, &layout, mark);
            }
        }
        if self.scene.show_spines {
            self.draw_spines(&mut fb, &layout);
        }
        self.draw_decorations(&mut fb, &layout);

        if !self.tight {
            return Ok(fb);
        }

        let Some(content) = fb.content_bounds(self.style.background) else {
            return Ok(fb);
        };
        let pad = (self.style.tight_pad * self.dpi).round() as u32;
        let region = content.padded(pad, fb.width(), fb.height());
        tracing::debug!(?content, ?region, "tight bounding box");
        fb.crop(region)
    }

    /// Render and write an RGB PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering, encoding or the file write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<Framebuffer> {
        let fb = self.to_framebuffer()?;
        PngEncoder::write_to_file(&fb, path.as_ref())?;
        tracing::info!(
            path = %path.as_ref().display(),
            width = fb.width(),
            height = fb.height(),
            dpi = self.dpi,
            "saved figure"
        );
        Ok(fb)
    }

    fn draw_grid(&self, fb: &mut Framebuffer, layout: &Layout) {
        let color = self.style.grid_color.fade(self.style.grid_alpha);
        let width = self.px(self.style.grid_width);
        let dash = self.px(self.style.grid_dash.0);
        let gap = self.px(self.style.grid_dash.1);
        let (top, bottom) = (layout.axes.y as f32, layout.axes.bottom() as f32);
        let (left, right) = (layout.axes.x as f32, layout.axes.right() as f32);

        for tick in &self.scene.x_ticks {
            let x = layout.scale.x.scale(tick.value);
            let (start, end) = (Point::new(x, bottom), Point::new(x, top));
            draw_dashed_line(fb, start, end, width, dash, gap, color);
        }
        for tick in &self.scene.y_ticks {
            let y = layout.scale.y.scale(tick.value);
            let (start, end) = (Point::new(left, y), Point::new(right, y));
            draw_dashed_line(fb, start, end, width, dash, gap, color);
        }
    }

    fn draw_center_axes(&self, fb: &mut Framebuffer, layout: &Layout) {
        let width = self.px(self.style.axis_width);
        let color = self.style.axis_color;
        let origin = layout.scale.map(Point::ORIGIN);
        let axes = layout.axes;

        draw_thick_line(
            fb,
            Point::new(axes.x as f32, origin.y),
            Point::new(axes.right() as f32, origin.y),
            width,
            color,
        );
        draw_thick_line(
            fb,
            Point::new(origin.x, axes.y as f32),
            Point::new(origin.x, axes.bottom() as f32),
            width,
            color,
        );
    }

    fn draw_spines(&self, fb: &mut Framebuffer, layout: &Layout) {
        let width = self.px(self.style.tick_width);
        let a = layout.axes;
        let corners = [
            Point::new(a.x as f32, a.y as f32),
            Point::new(a.right() as f32, a.y as f32),
            Point::new(a.right() as f32, a.bottom() as f32),
            Point::new(a.x as f32, a.bottom() as f32),
        ];
        for i in 0..corners.len() {
            let next = corners[(i + 1) % corners.len()];
            draw_thick_line(fb, corners[i], next, width, self.style.text_color);
        }
    }

    fn draw_mark(&self, fb: &mut Framebuffer, layout: &Layout, mark: &Mark) {
        match *mark {
            Mark::Point { center, color, .. } => {
                draw_marker(fb, layout.scale.map(center), self.px(self.style.marker_size), color);
            }
            Mark::Arrow { tail, tip, color, .. } => {
                let Some(shape) = ArrowShape::new(tail, tip, HEAD_WIDTH, HEAD_LENGTH) else {
                    return;
                };
                let shaft_start = layout.scale.map(shape.shaft.start);
                let shaft_end = layout.scale.map(shape.shaft.end);
                draw_thick_line(fb, shaft_start, shaft_end, self.px(self.style.arrow_width), color);

                let [t, l, r] = shape.head.map(|p| layout.scale.map(p));
                fill_triangle(fb, t, l, r, color);
            }
            Mark::Label { name, anchor, color } => {
                self.font(self.style.label_font).draw(
                    fb,
                    name,
                    layout.scale.map(anchor),
                    (TextAnchor::Start, Baseline::Alphabetic),
                    Orientation::Horizontal,
                    color,
                );
            }
        }
    }

    /// Tick marks, tick labels, axis captions and title.
    fn draw_decorations(&self, fb: &mut Framebuffer, layout: &Layout) {
        let color = self.style.text_color;
        let tick_len = self.px(self.style.tick_length);
        let tick_width = self.px(self.style.tick_width);
        let tick_pad = self.px(self.style.tick_pad);
        let tick_font = self.font(self.style.tick_font);
        let caption_font = self.font(self.style.caption_font);
        let caption_pad = self.px(self.style.caption_pad);
        let axes = layout.axes;
        let (left, bottom) = (axes.x as f32, axes.bottom() as f32);

        // x ticks hang below the axes box.
        let x_label_top = bottom + tick_len + tick_pad;
        let mut x_label_bottom = x_label_top;
        for tick in &self.scene.x_ticks {
            let x = layout.scale.x.scale(tick.value);
            let (start, end) = (Point::new(x, bottom), Point::new(x, bottom + tick_len));
            draw_thick_line(fb, start, end, tick_width, color);
            if !tick.label.is_empty() {
                let (_, h) = tick_font.measure(tick.label);
                x_label_bottom = x_label_bottom.max(x_label_top + h as f32);
                tick_font.draw(
                    fb,
                    tick.label,
                    Point::new(x, x_label_top),
                    (TextAnchor::Middle, Baseline::Top),
                    Orientation::Horizontal,
                    color,
                );
            }
        }

        // y ticks stick out to the left.
        let y_label_right = left - tick_len - tick_pad;
        let mut y_label_left = y_label_right;
        for tick in &self.scene.y_ticks {
            let y = layout.scale.y.scale(tick.value);
            let (start, end) = (Point::new(left - tick_len, y), Point::new(left, y));
            draw_thick_line(fb, start, end, tick_width, color);
            if !tick.label.is_empty() {
                let (w, _) = tick_font.measure(tick.label);
                y_label_left = y_label_left.min(y_label_right - w as f32);
                tick_font.draw(
                    fb,
                    tick.label,
                    Point::new(y_label_right, y),
                    (TextAnchor::End, Baseline::Middle),
                    Orientation::Horizontal,
                    color,
                );
            }
        }

        let center = layout.scale.map(Point::new(
            (self.scene.x_limits.0 + self.scene.x_limits.1) / 2.0,
            (self.scene.y_limits.0 + self.scene.y_limits.1) / 2.0,
        ));

        caption_font.draw(
            fb,
            self.scene.x_label,
            Point::new(center.x, x_label_bottom + caption_pad),
            (TextAnchor::Middle, Baseline::Top),
            Orientation::Horizontal,
            color,
        );
        caption_font.draw(
            fb,
            self.scene.y_label,
            Point::new(y_label_left - caption_pad, center.y),
            (TextAnchor::Middle, Baseline::Bottom),
            Orientation::Vertical,
            color,
        );
        self.font(self.style.title_font).draw(
            fb,
            self.scene.title,
            Point::new(center.x, axes.y as f32 - self.px(self.style.title_pad)),
            (TextAnchor::Middle, Baseline::Bottom),
            Orientation::Horizontal,
            color,
        );
    }
}

impl batuta_common::display::WithDimensions for EmbeddingFigure {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
