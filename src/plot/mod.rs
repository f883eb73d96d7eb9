//! Plot rendering: point series in, draw command list out.
//!
//! The renderer is pure and owns no state; it maps data-space points into
//! a pixel viewport and emits [`DrawOp`]s. The UI layer executes the
//! operations against a drawing surface.

mod options;
mod ops;
mod renderer;

pub use options::DisplayOptions;
pub use ops::{DrawOp, PlotPalette, Viewport};
pub use renderer::{is_special_point, render};
