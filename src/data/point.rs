//! Point and bounds primitives for 2D series data.

/// A single 2D data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal data coordinate.
    pub x: f64,
    /// Vertical data coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned data-space bounds of a point series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest x over the series.
    pub min_x: f64,
    /// Largest x over the series.
    pub max_x: f64,
    /// Smallest y over the series.
    pub min_y: f64,
    /// Largest y over the series.
    pub max_y: f64,
}

impl Bounds {
    /// Compute bounds with a linear scan over the points.
    ///
    /// Returns `None` for an empty slice; bounds over zero points are
    /// undefined.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        for point in points {
            bounds.min_x = bounds.min_x.min(point.x);
            bounds.max_x = bounds.max_x.max(point.x);
            bounds.min_y = bounds.min_y.min(point.y);
            bounds.max_y = bounds.max_y.max(point.y);
        }

        Some(bounds)
    }

    /// Width of the x range.
    pub fn x_span(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the y range.
    pub fn y_span(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_empty_slice_is_none() {
        assert_eq!(Bounds::from_points(&[]), None);
    }

    #[test]
    fn bounds_of_single_point_collapse_to_it() {
        let bounds = Bounds::from_points(&[Point::new(3.0, -2.0)]).unwrap();
        assert_eq!(bounds.min_x, 3.0);
        assert_eq!(bounds.max_x, 3.0);
        assert_eq!(bounds.min_y, -2.0);
        assert_eq!(bounds.max_y, -2.0);
        assert_eq!(bounds.x_span(), 0.0);
        assert_eq!(bounds.y_span(), 0.0);
    }

    #[test]
    fn bounds_scan_finds_min_and_max_per_axis() {
        let points = [
            Point::new(1.0, 10.0),
            Point::new(-4.0, 2.0),
            Point::new(7.0, -5.0),
            Point::new(0.0, 0.0),
        ];
        let bounds = Bounds::from_points(&points).unwrap();
        assert_eq!(bounds.min_x, -4.0);
        assert_eq!(bounds.max_x, 7.0);
        assert_eq!(bounds.min_y, -5.0);
        assert_eq!(bounds.max_y, 10.0);
        assert_eq!(bounds.x_span(), 11.0);
        assert_eq!(bounds.y_span(), 15.0);
    }
}
