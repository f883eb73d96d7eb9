//! Display flags for the plot renderer.

/// Boolean display flags controlling what the renderer emits.
///
/// The connecting polyline is always drawn; the flags add or remove the
/// axis and marker layers on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Draw center axes with "X" and "Y" labels.
    pub show_axis: bool,
    /// Draw a diamond marker at every point.
    pub show_markers: bool,
    /// Color markers of special points differently.
    pub highlight_special: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_markers: true,
            highlight_special: false,
        }
    }
}
