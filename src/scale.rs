//! Scale functions for data-to-pixel mappings.
//!
//! The figure maps the fixed data window `[-1.1, 1.1]` onto the axes box.
//! The y scale is built with an inverted range so larger data values land
//! higher on the canvas.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is empty.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::Rendering("Scale domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }
}

/// A pair of linear scales mapping data points to pixel points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    /// Horizontal scale.
    pub x: LinearScale,
    /// Vertical scale (range usually inverted).
    pub y: LinearScale,
}

impl PointScale {
    /// Combine two scales.
    #[must_use]
    pub const fn new(x: LinearScale, y: LinearScale) -> Self {
        Self { x, y }
    }

    /// Map a data-space point to pixel space.
    #[must_use]
    pub fn map(&self, p: Point) -> Point {
        Point::new(self.x.scale(p.x), self.y.scale(p.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((-1.1, 1.1), (0.0, 220.0)).unwrap();
        assert!((scale.scale(-1.1)).abs() < 1e-3);
        assert!((scale.scale(0.0) - 110.0).abs() < 1e-3);
        assert!((scale.scale(1.1) - 220.0).abs() < 1e-3);
        assert!((scale.scale(0.5) - scale.scale(-0.5) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_empty_domain_rejected() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 100.0)).is_err());
    }

    #[test]
    fn test_inverted_y_range() {
        let y = LinearScale::new((-1.1, 1.1), (220.0, 0.0)).unwrap();
        assert!(y.scale(1.0) < y.scale(-1.0));
        assert!((y.scale(1.1)).abs() < 1e-3);
    }

    #[test]
    fn test_point_scale_maps_corners_to_axes_box() {
        let ps = PointScale::new(
            LinearScale::new((-1.1, 1.1), (300.0, 2160.0)).unwrap(),
            LinearScale::new((-1.1, 1.1), (2136.0, 288.0)).unwrap(),
        );
        let top_left = ps.map(Point::new(-1.1, 1.1));
        assert!((top_left.x - 300.0).abs() < 1e-2);
        assert!((top_left.y - 288.0).abs() < 1e-2);

        let origin = ps.map(Point::ORIGIN);
        assert!((origin.x - 1230.0).abs() < 1e-2);
        assert!((origin.y - 1212.0).abs() < 1e-2);
    }
}
