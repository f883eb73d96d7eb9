//! Utility functions for Argand.

use crate::data::PointSeries;
use crate::error::Result;
use crate::plot::is_special_point;

/// Copy a plain-text summary of a series to the clipboard.
pub fn copy_series_summary(series: &PointSeries) -> Result<()> {
    copy_to_clipboard(&series_summary(series))
}

/// Build the plain-text summary of a series.
pub fn series_summary(series: &PointSeries) -> String {
    let mut text = format!("Series: {}\n", series.name);
    text.push_str(&format!("Points: {}\n", series.len()));

    if let Some(bounds) = series.bounds() {
        text.push_str(&format!("X range: [{}, {}]\n", bounds.min_x, bounds.max_x));
        text.push_str(&format!("Y range: [{}, {}]\n", bounds.min_y, bounds.max_y));
    }

    let special = series
        .points
        .iter()
        .filter(|p| is_special_point(p))
        .count();
    text.push_str(&format!("Special points: {}\n", special));

    text
}

/// Copy text to clipboard.
fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Point;

    #[test]
    fn summary_lists_name_count_bounds_and_special_points() {
        let series = PointSeries::new(
            "wave",
            vec![
                Point::new(0.0, 24.0),
                Point::new(1.0, 11.0),
                Point::new(2.0, -3.0),
            ],
        );

        let summary = series_summary(&series);
        assert!(summary.contains("Series: wave"));
        assert!(summary.contains("Points: 3"));
        assert!(summary.contains("X range: [0, 2]"));
        assert!(summary.contains("Y range: [-3, 24]"));
        assert!(summary.contains("Special points: 1"));
    }

    #[test]
    fn summary_of_empty_series_omits_bounds() {
        let series = PointSeries::new("empty", Vec::new());
        let summary = series_summary(&series);
        assert!(summary.contains("Points: 0"));
        assert!(!summary.contains("X range"));
    }
}
