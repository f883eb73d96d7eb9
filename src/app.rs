//! Application state and logic.

use std::path::PathBuf;

use crate::data::{PointSeries, SeriesReader};
use crate::file_browser::FileBrowserState;
use crate::plot::DisplayOptions;
use crate::util;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Current file path.
    pub file_path: Option<PathBuf>,
    /// Loaded point series.
    pub series: Option<PointSeries>,
    /// Display flags for the plot renderer.
    pub options: DisplayOptions,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message.
    pub error_message: Option<String>,
    /// File browser mode.
    pub file_browser_mode: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(file_path: Option<PathBuf>) -> Self {
        let mut app = Self {
            file_path: file_path.clone(),
            series: None,
            options: DisplayOptions::default(),
            file_browser: FileBrowserState::new(),
            status: "Ready".to_string(),
            theme: Theme::GruvboxDark,
            error_message: None,
            file_browser_mode: false,
        };

        // Check if we need to show the file browser
        match file_path {
            Some(path) if path.is_dir() => {
                app.file_browser.current_dir = path;
                app.file_browser.load_directory();
                app.file_browser_mode = true;
            },
            Some(path) if path.is_file() => {
                app.load_file(path);
            },
            None => {
                app.file_browser.load_directory();
                app.file_browser_mode = true;
            },
            _ => {
                app.error_message = Some("Invalid path provided".to_string());
            },
        }

        app
    }

    /// Load a point-series file.
    pub fn load_file(&mut self, path: PathBuf) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());
        self.status = format!("Loading {}...", file_name);

        let canonical_path = match std::fs::canonicalize(&path) {
            Ok(p) => p,
            Err(e) => {
                self.error_message = Some(format!("Failed to resolve path: {}", e));
                self.status = "Error resolving file path".to_string();
                return;
            },
        };

        match SeriesReader::read_file(&canonical_path) {
            Ok(series) => {
                self.status = format!("{} loaded ({} points)", file_name, series.len());
                self.series = Some(series);
                self.error_message = None;
                self.file_path = Some(canonical_path.clone());

                if let Some(parent) = canonical_path.parent() {
                    self.file_browser.current_dir = parent.to_path_buf();
                }

                tracing::info!("File loaded successfully");
            },
            Err(e) => {
                self.error_message = Some(format!("Error loading file: {}", e));
                self.status = "Error loading file".to_string();
                tracing::error!("Error loading file: {}", e);
            },
        }
    }

    /// Replace the displayed series directly.
    pub fn show_series(&mut self, series: PointSeries) {
        self.status = format!("{}: {} points", series.name, series.len());
        self.series = Some(series);
    }

    /// Toggle the axis layer.
    pub fn toggle_axis(&mut self) {
        self.options.show_axis = !self.options.show_axis;
        self.status = if self.options.show_axis {
            "Axis: ON".to_string()
        } else {
            "Axis: OFF".to_string()
        };
    }

    /// Toggle the marker layer.
    pub fn toggle_markers(&mut self) {
        self.options.show_markers = !self.options.show_markers;
        self.status = if self.options.show_markers {
            "Markers: ON".to_string()
        } else {
            "Markers: OFF".to_string()
        };
    }

    /// Toggle special-point highlighting.
    pub fn toggle_highlight(&mut self) {
        self.options.highlight_special = !self.options.highlight_special;
        self.status = if self.options.highlight_special {
            "Highlight special: ON".to_string()
        } else {
            "Highlight special: OFF".to_string()
        };
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Reload the current file from disk.
    pub fn reload(&mut self) {
        match self.file_path.clone() {
            Some(path) => self.load_file(path),
            None => self.status = "No file loaded".to_string(),
        }
    }

    /// Copy a summary of the loaded series to the clipboard.
    pub fn copy_summary(&mut self) {
        let Some(ref series) = self.series else {
            self.status = "No file loaded".to_string();
            return;
        };

        match util::copy_series_summary(series) {
            Ok(_) => self.status = format!("Copied {} summary!", series.name),
            Err(e) => self.status = format!("Copy failed: {}", e),
        }
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = format!(
            "Show hidden: {}",
            if self.file_browser.show_hidden {
                "ON"
            } else {
                "OFF"
            }
        );
    }

    /// Navigate to selected file/directory in browser.
    pub fn browser_select(&mut self) {
        if let Some(path) = self.file_browser.select_current() {
            self.file_browser_mode = false;
            self.load_file(path);

            if self.error_message.is_some() {
                self.file_browser_mode = true;
                self.status =
                    "Error loading file (press q to quit, navigate to try another)".to_string();
            }
        }
    }

    /// Navigate to parent directory in file browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
    }

    /// Move cursor up in file browser.
    pub fn browser_up(&mut self) {
        self.file_browser.cursor_up();
    }

    /// Move cursor down in file browser.
    pub fn browser_down(&mut self) {
        self.file_browser.cursor_down();
    }

    /// Open file browser.
    pub fn open_file_browser_at_current(&mut self) {
        let start_dir = self
            .file_path
            .as_ref()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

        self.file_browser.current_dir = start_dir;
        self.file_browser.load_directory();
        self.file_browser_mode = true;
        self.status = format!("File browser: {}", self.file_browser.current_dir.display());
    }
}
