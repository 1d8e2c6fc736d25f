//! The fixed embedding table and its display transform.
//!
//! Raw embeddings live in the unit square: x runs from terrestrial (0) to
//! aquatic (1), y from small (0) to big (1). The display convention centers
//! the square on the origin and flips x so terrestrial points right:
//!
//! ```text
//! x' = 1 - 2x        y' = 2y - 1
//! ```

use crate::error::{Error, Result};
use crate::geometry::Point;
use trueno::{Backend, Vector};

/// A named raw embedding coordinate in `[0, 1] x [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Embedding {
    /// Word this embedding represents.
    pub name: &'static str,
    /// Aquatic/terrestrial axis (1 = aquatic).
    pub x: f32,
    /// Size axis (1 = big).
    pub y: f32,
}

/// The five embeddings drawn by the figure, in drawing order.
pub const EMBEDDINGS: [Embedding; 5] = [
    Embedding::new("Mouse", 0.1, 0.2),
    Embedding::new("Lion", 0.2, 0.7),
    Embedding::new("Whale", 0.9, 0.9),
    Embedding::new("Fish", 0.9, 0.2),
    Embedding::new("Shark", 0.7, 0.6),
];

impl Embedding {
    /// Create an embedding. The domain is checked when it is transformed.
    #[must_use]
    pub const fn new(name: &'static str, x: f32, y: f32) -> Self {
        Self { name, x, y }
    }

    /// Whether both coordinates lie in `[0, 1]`.
    #[must_use]
    pub fn in_domain(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }

    /// Map into the centered display convention.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if the embedding is outside the unit square.
    ///
    /// # Example
    ///
    /// ```
    /// use embedding_viz::embedding::Embedding;
    ///
    /// let p = Embedding::new("Mouse", 0.1, 0.2).transform().unwrap();
    /// assert!((p.x() - 0.8).abs() < 1e-6);
    /// assert!((p.y() + 0.6).abs() < 1e-6);
    /// ```
    pub fn transform(&self) -> Result<TransformedPoint> {
        self.check_domain()?;
        Ok(TransformedPoint { name: self.name, x: 1.0 - 2.0 * self.x, y: 2.0 * self.y - 1.0 })
    }

    fn check_domain(&self) -> Result<()> {
        if self.in_domain() {
            Ok(())
        } else {
            Err(Error::OutOfDomain { name: self.name.to_string(), x: self.x, y: self.y })
        }
    }
}

/// An embedding in display coordinates, `[-1, 1] x [-1, 1]`.
///
/// Only obtainable from [`Embedding::transform`] or [`transform_all`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformedPoint {
    name: &'static str,
    x: f32,
    y: f32,
}

impl TransformedPoint {
    /// Word this point represents.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Display x (positive = terrestrial).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Display y (positive = big).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Position as a data-space point.
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Recover the raw embedding coordinates.
    #[must_use]
    pub fn inverse(&self) -> (f32, f32) {
        ((1.0 - self.x) / 2.0, (self.y + 1.0) / 2.0)
    }

    /// Label offset pushing away from the origin: `+distance` on an axis
    /// where the coordinate is `>= 0`, `-distance` otherwise.
    #[must_use]
    pub fn label_offset(&self, distance: f32) -> (f32, f32) {
        let dx = if self.x >= 0.0 { distance } else { -distance };
        let dy = if self.y >= 0.0 { distance } else { -distance };
        (dx, dy)
    }

    /// Tip of the arrow drawn from the origin, pulled back by `shrink`
    /// (0.98 keeps the head from covering the marker).
    #[must_use]
    pub fn arrow_tip(&self, shrink: f32) -> Point {
        self.position() * shrink
    }
}

/// Transform a batch of embeddings with SIMD vector arithmetic.
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns [`Error::OutOfDomain`] for the first embedding outside the unit
/// square, or [`Error::Transform`] if the vector backend fails.
pub fn transform_all(embeddings: &[Embedding]) -> Result<Vec<TransformedPoint>> {
    for embedding in embeddings {
        embedding.check_domain()?;
    }
    if embeddings.is_empty() {
        return Ok(Vec::new());
    }

    let n = embeddings.len();
    let xs: Vec<f32> = embeddings.iter().map(|e| e.x).collect();
    let ys: Vec<f32> = embeddings.iter().map(|e| e.y).collect();

    let twos = Vector::from_vec(vec![2.0; n]);
    let ones = Vector::from_vec(vec![1.0; n]);
    let neg_twos = Vector::from_vec(vec![-2.0; n]);
    let neg_ones = Vector::from_vec(vec![-1.0; n]);

    // x' = -2x + 1, y' = 2y - 1
    let tx = Vector::from_vec(xs)
        .mul(&neg_twos)
        .and_then(|v| v.add(&ones))
        .map_err(|e| Error::Transform(e.to_string()))?;
    let ty = Vector::from_vec(ys)
        .mul(&twos)
        .and_then(|v| v.add(&neg_ones))
        .map_err(|e| Error::Transform(e.to_string()))?;

    tracing::debug!(backend = ?Backend::select_best(), count = n, "transformed embeddings");

    Ok(embeddings
        .iter()
        .zip(tx.as_slice().iter().zip(ty.as_slice()))
        .map(|(e, (&x, &y))| TransformedPoint { name: e.name, x, y })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn find<'a>(points: &'a [TransformedPoint], name: &str) -> &'a TransformedPoint {
        points.iter().find(|p| p.name() == name).unwrap()
    }

    #[test]
    fn test_table_order() {
        let names: Vec<_> = EMBEDDINGS.iter().map(|e| e.name).collect();
        assert_eq!(names, ["Mouse", "Lion", "Whale", "Fish", "Shark"]);
        assert!(EMBEDDINGS.iter().all(Embedding::in_domain));
    }

    #[test]
    fn test_known_transforms() {
        let points = transform_all(&EMBEDDINGS).unwrap();

        let mouse = find(&points, "Mouse");
        assert_abs_diff_eq!(mouse.x(), 0.8, epsilon = 1e-6);
        assert_abs_diff_eq!(mouse.y(), -0.6, epsilon = 1e-6);

        let whale = find(&points, "Whale");
        assert_abs_diff_eq!(whale.x(), -0.8, epsilon = 1e-6);
        assert_abs_diff_eq!(whale.y(), 0.8, epsilon = 1e-6);

        let fish = find(&points, "Fish");
        assert_abs_diff_eq!(fish.x(), -0.8, epsilon = 1e-6);
        assert_abs_diff_eq!(fish.y(), -0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_formula_and_range_for_every_entry() {
        let points = transform_all(&EMBEDDINGS).unwrap();
        assert_eq!(points.len(), EMBEDDINGS.len());

        for (e, p) in EMBEDDINGS.iter().zip(&points) {
            assert_eq!(e.name, p.name());
            assert_abs_diff_eq!(p.x(), 1.0 - 2.0 * e.x, epsilon = 1e-6);
            assert_abs_diff_eq!(p.y(), 2.0 * e.y - 1.0, epsilon = 1e-6);
            assert!((-1.0..=1.0).contains(&p.x()));
            assert!((-1.0..=1.0).contains(&p.y()));
        }
    }

    #[test]
    fn test_batch_matches_scalar() {
        let batch = transform_all(&EMBEDDINGS).unwrap();
        for (e, p) in EMBEDDINGS.iter().zip(&batch) {
            let single = e.transform().unwrap();
            assert_abs_diff_eq!(single.x(), p.x(), epsilon = 1e-6);
            assert_abs_diff_eq!(single.y(), p.y(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_inverse_recovers_input() {
        for e in &EMBEDDINGS {
            let (x, y) = e.transform().unwrap().inverse();
            assert_abs_diff_eq!(x, e.x, epsilon = 1e-6);
            assert_abs_diff_eq!(y, e.y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_out_of_domain_rejected() {
        let bad = Embedding::new("Kraken", 1.2, 0.5);
        assert!(matches!(bad.transform(), Err(Error::OutOfDomain { .. })));
        assert!(transform_all(&[EMBEDDINGS[0], bad]).is_err());
    }

    #[test]
    fn test_empty_batch() {
        assert!(transform_all(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_label_offset_signs() {
        let points = transform_all(&EMBEDDINGS).unwrap();
        assert_eq!(find(&points, "Mouse").label_offset(0.07), (0.07, -0.07));
        assert_eq!(find(&points, "Whale").label_offset(0.07), (-0.07, 0.07));
        assert_eq!(find(&points, "Fish").label_offset(0.07), (-0.07, -0.07));
    }

    #[test]
    fn test_label_offset_zero_counts_as_positive() {
        let p = Embedding::new("Center", 0.5, 0.5).transform().unwrap();
        assert_eq!(p.label_offset(0.07), (0.07, 0.07));
    }

    #[test]
    fn test_arrow_tip_shrinks_toward_origin() {
        let whale = Embedding::new("Whale", 0.9, 0.9).transform().unwrap();
        let tip = whale.arrow_tip(0.98);
        assert_abs_diff_eq!(tip.x, -0.784, epsilon = 1e-6);
        assert_abs_diff_eq!(tip.y, 0.784, epsilon = 1e-6);
        assert!(tip.length() < whale.position().length());
    }
}
