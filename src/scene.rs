//! Data-space display list for the embedding diagram.
//!
//! A [`Scene`] says *what* is drawn, in data coordinates: one marker, one
//! arrow and one label per embedding, plus the axes furniture. Pixel layout
//! happens later in [`crate::figure`].

use crate::color::{palette_color, Rgba};
use crate::embedding::TransformedPoint;
use crate::geometry::{Line, Point};

/// Arrow length relative to the point it targets.
pub const ARROW_SHRINK: f32 = 0.98;
/// Arrowhead full width in data units.
pub const HEAD_WIDTH: f32 = 0.03;
/// Arrowhead length in data units (included in the arrow length).
pub const HEAD_LENGTH: f32 = 0.03;
/// Label displacement away from the origin on each axis.
pub const LABEL_OFFSET: f32 = 0.07;
/// Symmetric data window on both axes.
pub const AXIS_LIMIT: f32 = 1.1;

/// Kind of per-embedding mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Scatter marker at the point.
    Point,
    /// Vector from the origin.
    Arrow,
    /// Word label next to the point.
    Label,
}

/// One per-embedding visual element.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// Filled marker.
    Point {
        /// Embedding name.
        name: &'static str,
        /// Marker center.
        center: Point,
        /// Fill color.
        color: Rgba,
    },
    /// Arrow from `tail` to `tip`; the head is part of the length.
    Arrow {
        /// Embedding name.
        name: &'static str,
        /// Start of the shaft.
        tail: Point,
        /// Point of the head.
        tip: Point,
        /// Fill and edge color.
        color: Rgba,
    },
    /// Text anchored at its left baseline.
    Label {
        /// Embedding name (also the text).
        name: &'static str,
        /// Left end of the baseline.
        anchor: Point,
        /// Text color.
        color: Rgba,
    },
}

impl Mark {
    /// What kind of mark this is.
    #[must_use]
    pub const fn kind(&self) -> MarkKind {
        match self {
            Self::Point { .. } => MarkKind::Point,
            Self::Arrow { .. } => MarkKind::Arrow,
            Self::Label { .. } => MarkKind::Label,
        }
    }

    /// Embedding this mark belongs to.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Point { name, .. } | Self::Arrow { name, .. } | Self::Label { name, .. } => *name,
        }
    }

    /// Mark color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Point { color, .. } | Self::Arrow { color, .. } | Self::Label { color, .. } => {
                *color
            }
        }
    }
}

/// Shaft and head of an arrow, in the same space as its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowShape {
    /// Tail to the base of the head.
    pub shaft: Line,
    /// Tip, then the two base corners.
    pub head: [Point; 3],
}

impl ArrowShape {
    /// Build an arrow whose head (of the given width and length) ends at `tip`.
    ///
    /// Returns `None` for a zero-length arrow. Arrows shorter than the head
    /// are all head.
    #[must_use]
    pub fn new(tail: Point, tip: Point, head_width: f32, head_length: f32) -> Option<Self> {
        let span = tip - tail;
        let dir = span.normalized()?;
        let head_length = head_length.min(span.length());
        let base = tip - dir * head_length;
        let half = dir.perpendicular() * (head_width / 2.0);

        Some(Self { shaft: Line::new(tail, base), head: [tip, base + half, base - half] })
    }
}

/// A labeled tick position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Data value.
    pub value: f32,
    /// Text shown at the tick; empty strings draw no text.
    pub label: &'static str,
}

impl Tick {
    const fn new(value: f32, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Everything the embedding diagram contains.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    marks: Vec<Mark>,
    /// Ticks along the x axis.
    pub x_ticks: Vec<Tick>,
    /// Ticks along the y axis.
    pub y_ticks: Vec<Tick>,
    /// Visible x range.
    pub x_limits: (f32, f32),
    /// Visible y range.
    pub y_limits: (f32, f32),
    /// Figure title.
    pub title: &'static str,
    /// Caption under the x axis.
    pub x_label: &'static str,
    /// Caption beside the y axis.
    pub y_label: &'static str,
    /// Whether to draw the bounding-box spines.
    pub show_spines: bool,
    /// Whether to draw lines through `x = 0` and `y = 0`.
    pub show_center_axes: bool,
    /// Whether to draw the grid at tick positions.
    pub show_grid: bool,
}

impl Scene {
    /// Build the word-embedding diagram for `points`.
    ///
    /// Marks are grouped by kind (all markers, then all arrows, then all
    /// labels) and follow the order of `points` within each group. Colors
    /// come from [`palette_color`] by position, so each embedding's marker,
    /// arrow and label share a color.
    #[must_use]
    pub fn embedding_diagram(points: &[TransformedPoint]) -> Self {
        let mut marks = Vec::with_capacity(points.len() * 3);

        for (i, p) in points.iter().enumerate() {
            marks.push(Mark::Point {
                name: p.name(),
                center: p.position(),
                color: palette_color(i),
            });
        }
        for (i, p) in points.iter().enumerate() {
            marks.push(Mark::Arrow {
                name: p.name(),
                tail: Point::ORIGIN,
                tip: p.arrow_tip(ARROW_SHRINK),
                color: palette_color(i),
            });
        }
        for (i, p) in points.iter().enumerate() {
            let (dx, dy) = p.label_offset(LABEL_OFFSET);
            marks.push(Mark::Label {
                name: p.name(),
                anchor: Point::new(p.x() + dx, p.y() + dy),
                color: palette_color(i),
            });
        }

        Self {
            marks,
            x_ticks: vec![
                Tick::new(-1.0, "Aquatic"),
                Tick::new(-0.5, ""),
                Tick::new(0.0, "0"),
                Tick::new(0.5, ""),
                Tick::new(1.0, "Terrestrial"),
            ],
            y_ticks: vec![
                Tick::new(-1.0, "Small"),
                Tick::new(-0.5, ""),
                Tick::new(0.0, "0"),
                Tick::new(0.5, ""),
                Tick::new(1.0, "Big"),
            ],
            x_limits: (-AXIS_LIMIT, AXIS_LIMIT),
            y_limits: (-AXIS_LIMIT, AXIS_LIMIT),
            title: "Word Embeddings",
            x_label: "Terrestrial",
            y_label: "Big",
            show_spines: false,
            show_center_axes: true,
            show_grid: true,
        }
    }

    /// All marks in drawing order.
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Number of marks of one kind.
    #[must_use]
    pub fn count(&self, kind: MarkKind) -> usize {
        self.marks.iter().filter(|m| m.kind() == kind).count()
    }

    /// Marks belonging to one embedding.
    #[must_use]
    pub fn marks_for(&self, name: &str) -> Vec<&Mark> {
        self.marks.iter().filter(|m| m.name() == name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{transform_all, EMBEDDINGS};
    use approx::assert_abs_diff_eq;

    fn diagram() -> Scene {
        Scene::embedding_diagram(&transform_all(&EMBEDDINGS).unwrap())
    }

    #[test]
    fn test_one_of_each_mark_per_embedding() {
        let scene = diagram();
        assert_eq!(scene.count(MarkKind::Point), 5);
        assert_eq!(scene.count(MarkKind::Arrow), 5);
        assert_eq!(scene.count(MarkKind::Label), 5);
        assert_eq!(scene.marks().len(), 15);

        for e in &EMBEDDINGS {
            let kinds: Vec<_> = scene.marks_for(e.name).iter().map(|m| m.kind()).collect();
            assert_eq!(kinds, [MarkKind::Point, MarkKind::Arrow, MarkKind::Label]);
        }
    }

    #[test]
    fn test_colors_consistent_per_embedding() {
        let scene = diagram();
        for (i, e) in EMBEDDINGS.iter().enumerate() {
            for mark in scene.marks_for(e.name) {
                assert_eq!(mark.color(), palette_color(i), "{} {:?}", e.name, mark.kind());
            }
        }
    }

    #[test]
    fn test_arrow_and_label_positions() {
        let scene = diagram();
        let mouse = scene.marks_for("Mouse");

        let Mark::Arrow { tail, tip, .. } = mouse[1] else { panic!("expected arrow") };
        assert_eq!(*tail, Point::ORIGIN);
        assert_abs_diff_eq!(tip.x, 0.784, epsilon = 1e-6);
        assert_abs_diff_eq!(tip.y, -0.588, epsilon = 1e-6);

        let Mark::Label { anchor, .. } = mouse[2] else { panic!("expected label") };
        assert_abs_diff_eq!(anchor.x, 0.87, epsilon = 1e-6);
        assert_abs_diff_eq!(anchor.y, -0.67, epsilon = 1e-6);
    }

    #[test]
    fn test_axes_furniture() {
        let scene = diagram();
        let x_labels: Vec<_> = scene.x_ticks.iter().map(|t| t.label).collect();
        let y_labels: Vec<_> = scene.y_ticks.iter().map(|t| t.label).collect();
        assert_eq!(x_labels, ["Aquatic", "", "0", "", "Terrestrial"]);
        assert_eq!(y_labels, ["Small", "", "0", "", "Big"]);
        assert_eq!(scene.x_limits, (-1.1, 1.1));
        assert!(!scene.show_spines);
        assert!(scene.show_grid);
    }

    #[test]
    fn test_arrow_shape_head_ends_at_tip() {
        let tip = Point::new(0.784, -0.588);
        let shape = ArrowShape::new(Point::ORIGIN, tip, HEAD_WIDTH, HEAD_LENGTH).unwrap();
        assert_eq!(shape.head[0], tip);
        assert_abs_diff_eq!(shape.shaft.length(), 0.98 - HEAD_LENGTH, epsilon = 1e-5);
        assert_abs_diff_eq!(shape.head[1].distance(shape.head[2]), HEAD_WIDTH, epsilon = 1e-6);
    }

    #[test]
    fn test_arrow_shape_degenerate() {
        assert!(ArrowShape::new(Point::ORIGIN, Point::ORIGIN, 0.03, 0.03).is_none());
        let tiny = ArrowShape::new(Point::ORIGIN, Point::new(0.01, 0.0), 0.03, 0.03).unwrap();
        assert_eq!(tiny.shaft.start, tiny.shaft.end);
    }
}
