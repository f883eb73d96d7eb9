//! Argand - a fast, terminal-based 2D point-series plotter.
//!
//! Argand draws a series of 2D points as a plot in the terminal: center
//! axes with "X"/"Y" labels, connecting line segments, and diamond point
//! markers, with vim-style keys toggling each layer.
//!
//! # Features
//!
//! - CSV/TSV and whitespace-table point files
//! - Pure draw-command rendering (axes, polyline, markers)
//! - Special-point highlighting
//! - Gruvbox color themes
//! - Clipboard summary export
//!
//! # Example
//!
//! ```ignore
//! use argand::data::SeriesReader;
//! use argand::plot::{self, DisplayOptions, PlotPalette, Viewport};
//! use std::path::Path;
//!
//! // Load a point series
//! let series = SeriesReader::read_file(Path::new("points.csv"))?;
//!
//! // Render it into a draw command list
//! let ops = plot::render(
//!     &series.points,
//!     &DisplayOptions::default(),
//!     Viewport::new(160, 96),
//!     &PlotPalette::default(),
//! );
//! println!("{} draw operations", ops.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod file_browser;
pub mod plot;
pub mod ui;
pub mod util;

pub use error::{ArgandError, Result};
