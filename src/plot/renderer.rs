//! Core renderer: transforms a point series into draw operations.
//!
//! Rendering is a pure, synchronous function of (data, options, viewport):
//! identical inputs always produce identical operation lists. Axis
//! operations come first, then connecting segments, then markers.

use super::{DisplayOptions, DrawOp, PlotPalette, Viewport};
use crate::data::{Bounds, Point};

/// Pixel offset of diamond marker vertices from the marker center.
const MARKER_RADIUS: i32 = 5;

/// Inset of the "X" and "Y" axis labels from the viewport edges.
const LABEL_INSET: i32 = 2;

/// Maps data coordinates into the pixel viewport.
///
/// A zero-span dimension has no defined scale; points collapse to the
/// midpoint of that viewport dimension instead.
#[derive(Debug, Clone, Copy)]
struct Transform {
    min_x: f64,
    min_y: f64,
    scale_x: Option<f64>,
    scale_y: Option<f64>,
    width: i32,
    height: i32,
}

impl Transform {
    fn new(bounds: &Bounds, viewport: Viewport) -> Self {
        let scale_x =
            (bounds.x_span() != 0.0).then(|| f64::from(viewport.width) / bounds.x_span());
        let scale_y =
            (bounds.y_span() != 0.0).then(|| f64::from(viewport.height) / bounds.y_span());

        Self {
            min_x: bounds.min_x,
            min_y: bounds.min_y,
            scale_x,
            scale_y,
            width: i32::from(viewport.width),
            height: i32::from(viewport.height),
        }
    }

    fn x(&self, x: f64) -> i32 {
        match self.scale_x {
            Some(scale) => ((x - self.min_x) * scale).round() as i32,
            None => self.width / 2,
        }
    }

    fn y(&self, y: f64) -> i32 {
        match self.scale_y {
            Some(scale) => self.height - ((y - self.min_y) * scale).round() as i32,
            None => self.height / 2,
        }
    }
}

/// Render a point series into a list of draw operations.
///
/// Produces nothing for an empty slice. When enabled, axis lines and
/// labels are emitted first, followed by the connecting polyline and one
/// diamond marker per point.
pub fn render(
    points: &[Point],
    options: &DisplayOptions,
    viewport: Viewport,
    palette: &PlotPalette,
) -> Vec<DrawOp> {
    let Some(bounds) = Bounds::from_points(points) else {
        return Vec::new();
    };

    let mut ops = Vec::new();

    if options.show_axis {
        push_axis(&mut ops, viewport, palette);
    }

    let transform = Transform::new(&bounds, viewport);

    push_segments(&mut ops, points, &transform, palette);

    if options.show_markers {
        push_markers(&mut ops, points, &transform, options, palette);
    }

    ops
}

/// Whether a point is picked out by special-point highlighting.
///
/// Inspects the decimal digits of `floor(abs(y))` from least significant
/// upward and reports whether any of them is even. Zero has no digits to
/// inspect and is not special.
pub fn is_special_point(point: &Point) -> bool {
    let mut value = point.y.abs().floor() as u64;

    while value > 0 {
        if (value % 10) % 2 == 0 {
            return true;
        }
        value /= 10;
    }

    false
}

fn push_axis(ops: &mut Vec<DrawOp>, viewport: Viewport, palette: &PlotPalette) {
    let width = i32::from(viewport.width);
    let height = i32::from(viewport.height);
    let center_x = width / 2;
    let center_y = height / 2;

    // X axis through the vertical center, Y axis through the horizontal one.
    ops.push(DrawOp::Line {
        x1: 0,
        y1: center_y,
        x2: width,
        y2: center_y,
        color: palette.axis,
    });
    ops.push(DrawOp::Line {
        x1: center_x,
        y1: 0,
        x2: center_x,
        y2: height,
        color: palette.axis,
    });

    ops.push(DrawOp::Text {
        x: width - LABEL_INSET,
        y: center_y - LABEL_INSET,
        text: "X".to_string(),
        color: palette.axis,
    });
    ops.push(DrawOp::Text {
        x: center_x + LABEL_INSET,
        y: LABEL_INSET,
        text: "Y".to_string(),
        color: palette.axis,
    });
}

fn push_segments(
    ops: &mut Vec<DrawOp>,
    points: &[Point],
    transform: &Transform,
    palette: &PlotPalette,
) {
    for pair in points.windows(2) {
        ops.push(DrawOp::Line {
            x1: transform.x(pair[0].x),
            y1: transform.y(pair[0].y),
            x2: transform.x(pair[1].x),
            y2: transform.y(pair[1].y),
            color: palette.line,
        });
    }
}

fn push_markers(
    ops: &mut Vec<DrawOp>,
    points: &[Point],
    transform: &Transform,
    options: &DisplayOptions,
    palette: &PlotPalette,
) {
    for point in points {
        let x = transform.x(point.x);
        let y = transform.y(point.y);

        let color = if options.highlight_special && is_special_point(point) {
            palette.highlight
        } else {
            palette.marker
        };

        // Diamond: top, left, bottom, right.
        ops.push(DrawOp::Polygon {
            vertices: vec![
                (x, y - MARKER_RADIUS),
                (x - MARKER_RADIUS, y),
                (x, y + MARKER_RADIUS),
                (x + MARKER_RADIUS, y),
            ],
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 100,
        height: 80,
    };

    fn options(show_axis: bool, show_markers: bool, highlight_special: bool) -> DisplayOptions {
        DisplayOptions {
            show_axis,
            show_markers,
            highlight_special,
        }
    }

    fn lines(ops: &[DrawOp]) -> Vec<&DrawOp> {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .collect()
    }

    fn polygons(ops: &[DrawOp]) -> Vec<&DrawOp> {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::Polygon { .. }))
            .collect()
    }

    fn texts(ops: &[DrawOp]) -> Vec<&DrawOp> {
        ops.iter()
            .filter(|op| matches!(op, DrawOp::Text { .. }))
            .collect()
    }

    #[test]
    fn empty_series_renders_nothing() {
        let palette = PlotPalette::default();
        let ops = render(&[], &options(true, true, true), VIEWPORT, &palette);
        assert!(ops.is_empty());
    }

    #[test]
    fn single_point_renders_one_marker_and_no_segments() {
        let palette = PlotPalette::default();
        let points = [Point::new(3.0, 7.0)];
        let ops = render(&points, &options(false, true, false), VIEWPORT, &palette);

        assert_eq!(lines(&ops).len(), 0);
        assert_eq!(polygons(&ops).len(), 1);

        // Both spans are zero, so the marker sits at the viewport center.
        assert_eq!(
            ops[0],
            DrawOp::Polygon {
                vertices: vec![(50, 35), (45, 40), (50, 45), (55, 40)],
                color: palette.marker,
            }
        );
    }

    #[test]
    fn boundary_points_map_to_viewport_corners() {
        let palette = PlotPalette::default();
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 5.0)];
        let ops = render(&points, &options(false, false, false), VIEWPORT, &palette);

        // min maps to (0, height), max to (width, 0); y grows downward.
        assert_eq!(
            ops,
            vec![DrawOp::Line {
                x1: 0,
                y1: 80,
                x2: 100,
                y2: 0,
                color: palette.line,
            }]
        );
    }

    #[test]
    fn interior_points_round_to_nearest_pixel() {
        let palette = PlotPalette::default();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
        ];
        let ops = render(&points, &options(false, false, false), VIEWPORT, &palette);

        // x = 1 of [0, 3] in 100 px: 33.33 rounds to 33.
        // y = 1 of [0, 3] in 80 px: 80 - round(26.67) = 53.
        assert_eq!(
            ops[0],
            DrawOp::Line {
                x1: 0,
                y1: 80,
                x2: 33,
                y2: 53,
                color: palette.line,
            }
        );
    }

    #[test]
    fn polyline_is_always_emitted() {
        let palette = PlotPalette::default();
        let points = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 1.0),
        ];
        let ops = render(&points, &options(false, false, false), VIEWPORT, &palette);

        assert_eq!(lines(&ops).len(), 2);
        assert_eq!(polygons(&ops).len(), 0);
        assert_eq!(texts(&ops).len(), 0);
    }

    #[test]
    fn axis_ops_lead_and_leave_data_ops_unchanged() {
        let palette = PlotPalette::default();
        let points = [Point::new(0.0, 0.0), Point::new(4.0, 2.0)];

        let with_axis = render(&points, &options(true, true, false), VIEWPORT, &palette);
        let without_axis = render(&points, &options(false, true, false), VIEWPORT, &palette);

        assert_eq!(with_axis.len(), without_axis.len() + 4);
        assert_eq!(&with_axis[4..], &without_axis[..]);
    }

    #[test]
    fn axis_lines_cross_the_viewport_center() {
        let palette = PlotPalette::default();
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
        let ops = render(&points, &options(true, false, false), VIEWPORT, &palette);

        assert_eq!(
            ops[0],
            DrawOp::Line {
                x1: 0,
                y1: 40,
                x2: 100,
                y2: 40,
                color: palette.axis,
            }
        );
        assert_eq!(
            ops[1],
            DrawOp::Line {
                x1: 50,
                y1: 0,
                x2: 50,
                y2: 80,
                color: palette.axis,
            }
        );
        assert_eq!(
            ops[2],
            DrawOp::Text {
                x: 98,
                y: 38,
                text: "X".to_string(),
                color: palette.axis,
            }
        );
        assert_eq!(
            ops[3],
            DrawOp::Text {
                x: 52,
                y: 2,
                text: "Y".to_string(),
                color: palette.axis,
            }
        );
    }

    #[test]
    fn highlight_colors_only_special_markers() {
        let palette = PlotPalette::default();
        let points = [Point::new(0.0, 24.0), Point::new(1.0, 11.0)];

        let ops = render(&points, &options(false, true, true), VIEWPORT, &palette);
        let colors: Vec<_> = polygons(&ops)
            .iter()
            .map(|op| match op {
                DrawOp::Polygon { color, .. } => *color,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(colors, vec![palette.highlight, palette.marker]);

        // With highlighting off, every marker uses the default color.
        let ops = render(&points, &options(false, true, false), VIEWPORT, &palette);
        for op in polygons(&ops) {
            match op {
                DrawOp::Polygon { color, .. } => assert_eq!(*color, palette.marker),
                _ => unreachable!(),
            }
        }
    }

    #[test]
    fn flat_series_centers_the_zero_span_dimension() {
        let palette = PlotPalette::default();
        let points = [
            Point::new(0.0, 5.0),
            Point::new(1.0, 5.0),
            Point::new(2.0, 5.0),
        ];
        let ops = render(&points, &options(false, false, false), VIEWPORT, &palette);

        assert_eq!(
            ops,
            vec![
                DrawOp::Line {
                    x1: 0,
                    y1: 40,
                    x2: 50,
                    y2: 40,
                    color: palette.line,
                },
                DrawOp::Line {
                    x1: 50,
                    y1: 40,
                    x2: 100,
                    y2: 40,
                    color: palette.line,
                },
            ]
        );
    }

    #[test]
    fn render_is_deterministic() {
        let palette = PlotPalette::default();
        let points = [
            Point::new(-1.0, 2.0),
            Point::new(0.5, -3.0),
            Point::new(2.0, 24.0),
        ];
        let opts = options(true, true, true);

        let first = render(&points, &opts, VIEWPORT, &palette);
        let second = render(&points, &opts, VIEWPORT, &palette);
        assert_eq!(first, second);
    }

    #[test]
    fn special_point_checks_each_decimal_digit() {
        let special = |y: f64| is_special_point(&Point::new(0.0, y));

        assert!(special(24.0)); // last digit 4 is even
        assert!(!special(11.0)); // digits 1, 1
        assert!(!special(0.0)); // no digits
        assert!(!special(7.0));
        assert!(special(123.0)); // tens digit 2 is even
        assert!(special(20.0)); // last digit 0 is even
        assert!(!special(1111.0));
        assert!(!special(13579.0));
        assert!(special(-24.5)); // sign and fraction are ignored
        assert!(!special(-3.9));
    }
}
