//! Primitive rendering functions.
//!
//! All coordinates are in pixel space with `(0, 0)` at the top-left corner
//! and pixel centers at half-integer positions.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

// ============================================================================
// Polygons
// ============================================================================

/// Fill a simple polygon with the even-odd rule.
///
/// Each row is sampled at its pixel center; a pixel is painted when its
/// center falls inside the polygon. Rows never receive overlapping spans,
/// so translucent colors blend exactly once per pixel.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let min_y = vertices.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = vertices.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);
    let row_start = (min_y - 0.5).ceil().max(0.0) as i32;
    let row_end = (max_y - 0.5).floor().min(fb.height() as f32 - 1.0) as i32;

    let mut crossings = Vec::with_capacity(vertices.len());
    for row in row_start..=row_end {
        let sample_y = row as f32 + 0.5;
        crossings.clear();

        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            let spans_row =
                (a.y <= sample_y && sample_y < b.y) || (b.y <= sample_y && sample_y < a.y);
            if spans_row {
                let t = (sample_y - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }

        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            let x_start = (pair[0] - 0.5).ceil() as i32;
            let x_end = (pair[1] - 0.5).ceil() as i32;
            fb.paint_span(x_start, x_end, row, color);
        }
    }
}

/// Fill a triangle.
pub fn fill_triangle(fb: &mut Framebuffer, a: Point, b: Point, c: Point, color: Rgba) {
    fill_polygon(fb, &[a, b, c], color);
}

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line segment of the given pixel width with butt caps.
///
/// Widths below 1.5 pixels fall back to a Wu anti-aliased hairline.
pub fn draw_thick_line(fb: &mut Framebuffer, start: Point, end: Point, width: f32, color: Rgba) {
    if width < 1.5 {
        draw_line_aa(fb, start.x, start.y, end.x, end.y, color);
        return;
    }

    let Some(dir) = (end - start).normalized() else {
        return;
    };
    let offset = dir.perpendicular() * (width / 2.0);
    fill_polygon(fb, &[start + offset, end + offset, end - offset, start - offset], color);
}

/// Draw a dashed line: `dash` pixels on, `gap` pixels off, starting with a dash.
pub fn draw_dashed_line(
    fb: &mut Framebuffer,
    start: Point,
    end: Point,
    width: f32,
    dash: f32,
    gap: f32,
    color: Rgba,
) {
    let length = start.distance(end);
    let Some(dir) = (end - start).normalized() else {
        return;
    };
    if dash <= 0.0 {
        return;
    }

    let mut along = 0.0;
    while along < length {
        let dash_end = (along + dash).min(length);
        draw_thick_line(fb, start + dir * along, start + dir * dash_end, width, color);
        along = dash_end + gap.max(0.0);
    }
}

/// Draw an anti-aliased hairline using Wu's algorithm.
///
/// # References
///
/// Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    let mut put = |major: i32, minor: i32, intensity: f32| {
        if steep {
            plot(fb, minor, major, color, intensity);
        } else {
            plot(fb, major, minor, color, intensity);
        }
    };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    put(xpxl1, yend.floor() as i32, rfpart(yend) * xgap);
    put(xpxl1, yend.floor() as i32 + 1, fpart(yend) * xgap);
    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    put(xpxl2, yend.floor() as i32, rfpart(yend) * xgap);
    put(xpxl2, yend.floor() as i32 + 1, fpart(yend) * xgap);

    for x in (xpxl1 + 1)..xpxl2 {
        let ipart = intery.floor() as i32;
        put(x, ipart, rfpart(intery));
        put(x, ipart + 1, fpart(intery));
        intery += gradient;
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 {
        fb.blend_pixel(x as u32, y as u32, color.fade(intensity));
    }
}

#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

// ============================================================================
// Circles
// ============================================================================

/// Draw a filled circle using the midpoint algorithm.
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.blend_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    // Each row is painted once so translucent fills do not double-blend.
    let mut half_widths = vec![0i32; (radius as usize) + 1];
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        half_widths[y as usize] = half_widths[y as usize].max(x);
        half_widths[x as usize] = half_widths[x as usize].max(y);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    for (dy, &hw) in half_widths.iter().enumerate() {
        let dy = dy as i32;
        fb.paint_span(cx - hw, cx + hw + 1, cy + dy, color);
        if dy != 0 {
            fb.paint_span(cx - hw, cx + hw + 1, cy - dy, color);
        }
    }
}

/// Draw a marker of the given diameter centered on a fractional position.
pub fn draw_marker(fb: &mut Framebuffer, center: Point, diameter: f32, color: Rgba) {
    let radius = (diameter / 2.0).round() as i32;
    draw_circle(fb, center.x.floor() as i32, center.y.floor() as i32, radius, color);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn white_canvas(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).expect("framebuffer creation should succeed");
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_fill_polygon_square() {
        let mut fb = white_canvas(20, 20);
        let square = [
            Point::new(5.0, 5.0),
            Point::new(15.0, 5.0),
            Point::new(15.0, 15.0),
            Point::new(5.0, 15.0),
        ];
        fill_polygon(&mut fb, &square, Rgba::RED);

        assert_eq!(fb.count_color(Rgba::RED), 100);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(15, 15), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_polygon_degenerate_is_noop() {
        let mut fb = white_canvas(10, 10);
        fill_polygon(&mut fb, &[Point::new(1.0, 1.0), Point::new(8.0, 8.0)], Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_fill_triangle_tip_and_base() {
        let mut fb = white_canvas(40, 40);
        let tip = Point::new(20.0, 2.0);
        fill_triangle(&mut fb, tip, Point::new(35.0, 30.0), Point::new(5.0, 30.0), Rgba::BLUE);

        assert_eq!(fb.get_pixel(20, 25), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::WHITE));
    }

    #[test]
    fn test_thick_horizontal_line_width() {
        let mut fb = white_canvas(50, 50);
        draw_thick_line(&mut fb, Point::new(10.0, 25.0), Point::new(40.0, 25.0), 4.0, Rgba::BLACK);

        // Rows 23..27 covered, 30 columns each.
        assert_eq!(fb.count_color(Rgba::BLACK), 4 * 30);
        assert_eq!(fb.get_pixel(20, 23), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(20, 27), Some(Rgba::WHITE));
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut fb = white_canvas(100, 10);
        let (start, end) = (Point::new(0.0, 5.0), Point::new(100.0, 5.0));
        draw_dashed_line(&mut fb, start, end, 2.0, 10.0, 5.0, Rgba::BLACK);

        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(12, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(17, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_draw_line_aa_marks_path() {
        let mut fb = white_canvas(100, 100);
        draw_line_aa(&mut fb, 10.0, 10.0, 90.0, 50.0, Rgba::BLACK);
        let p = fb.get_pixel(50, 30).unwrap();
        assert!(p.r < 255 || fb.get_pixel(50, 29).unwrap().r < 255);
    }

    #[test]
    fn test_draw_circle_filled() {
        let mut fb = white_canvas(100, 100);
        draw_circle(&mut fb, 50, 50, 20, Rgba::BLUE);

        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(70, 50), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(50, 30), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(66, 66), Some(Rgba::WHITE));
    }

    #[test]
    fn test_translucent_circle_blends_once() {
        let mut fb = white_canvas(40, 40);
        draw_circle(&mut fb, 20, 20, 10, Rgba::BLACK.with_alpha(128));
        let center = fb.get_pixel(20, 20).unwrap();
        let edge = fb.get_pixel(28, 20).unwrap();
        assert_eq!(center, edge);
    }

    #[test]
    fn test_circle_zero_radius() {
        let mut fb = white_canvas(10, 10);
        draw_circle(&mut fb, 5, 5, 0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 1);
    }

    #[test]
    fn test_thick_line_at_hairline_threshold_is_solid() {
        let mut fb = white_canvas(100, 100);
        draw_thick_line(&mut fb, Point::new(10.0, 50.5), Point::new(90.0, 50.5), 1.5, Rgba::BLACK);
        assert_eq!(fb.get_pixel(50, 50), Some(Rgba::BLACK));
    }

    #[test]
    fn test_marker_centered_on_fractional_position() {
        let mut fb = white_canvas(40, 40);
        draw_marker(&mut fb, Point::new(20.7, 10.2), 8.0, Rgba::RED);

        assert_eq!(fb.get_pixel(20, 10), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(24, 10), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(25, 10), Some(Rgba::WHITE));
    }

    #[test]
    fn test_out_of_bounds_shapes_do_not_panic() {
        let mut fb = white_canvas(20, 20);
        let (start, end) = (Point::new(-50.0, -50.0), Point::new(70.0, 70.0));
        draw_thick_line(&mut fb, start, end, 6.0, Rgba::BLACK);
        draw_circle(&mut fb, -5, 25, 10, Rgba::RED);
        draw_line_aa(&mut fb, -10.0, 5.0, 30.0, 5.0, Rgba::BLUE);
        assert!(fb.count_color(Rgba::BLACK) > 0);
    }
}
