//! Ordered point-series container.

use super::{Bounds, Point};

/// An ordered series of 2D points with a display name.
///
/// The series may be empty; rendering an empty series is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSeries {
    /// Display name, usually the source file stem.
    pub name: String,
    /// Points in file order.
    pub points: Vec<Point>,
}

impl PointSeries {
    /// Create a new series.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Data-space bounds of the series, `None` when empty.
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_has_no_bounds() {
        let series = PointSeries::new("empty", Vec::new());
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert_eq!(series.bounds(), None);
    }

    #[test]
    fn series_bounds_match_point_scan() {
        let series = PointSeries::new(
            "wave",
            vec![Point::new(0.0, 1.0), Point::new(2.0, -1.0)],
        );
        let bounds = series.bounds().unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 2.0);
        assert_eq!(bounds.min_y, -1.0);
        assert_eq!(bounds.max_y, 1.0);
    }
}
