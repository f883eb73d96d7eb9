//! Draw commands and the pixel viewport they target.

use ratatui::style::Color;

/// Pixel-space rectangle into which data points are transformed.
///
/// Supplied at render time and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u16,
    /// Height in pixels.
    pub height: u16,
}

impl Viewport {
    /// Create a new viewport.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors used for emitted draw operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPalette {
    /// Axis lines and labels.
    pub axis: Color,
    /// Connecting line segments.
    pub line: Color,
    /// Default marker fill.
    pub marker: Color,
    /// Highlighted marker fill.
    pub highlight: Color,
}

impl Default for PlotPalette {
    fn default() -> Self {
        Self {
            axis: Color::Gray,
            line: Color::Blue,
            marker: Color::Blue,
            highlight: Color::Red,
        }
    }
}

/// A single draw operation in pixel space.
///
/// Pixel coordinates have their origin at the top-left corner with y
/// growing downward. Marker vertices near the viewport edge may fall
/// outside it; the drawing surface clips them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Straight line segment between two pixel positions.
    Line {
        /// Start x.
        x1: i32,
        /// Start y.
        y1: i32,
        /// End x.
        x2: i32,
        /// End y.
        y2: i32,
        /// Stroke color.
        color: Color,
    },
    /// Filled polygon given by its vertices.
    Polygon {
        /// Vertices in drawing order.
        vertices: Vec<(i32, i32)>,
        /// Fill color.
        color: Color,
    },
    /// Text label anchored at a pixel position.
    Text {
        /// Anchor x.
        x: i32,
        /// Anchor y.
        y: i32,
        /// Label contents.
        text: String,
        /// Text color.
        color: Color,
    },
}
