//! Point-series file reader.

use super::{Point, PointSeries};
use crate::error::{ArgandError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Point-series data reader.
#[derive(Debug)]
pub struct SeriesReader;

impl SeriesReader {
    /// Read a point-series file.
    ///
    /// Dispatches on the file extension: `.csv` and `.tsv` are parsed as
    /// delimited records, everything else as whitespace-separated columns.
    pub fn read_file(path: &Path) -> Result<PointSeries> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let points = match extension {
            "csv" => Self::read_delimited(path, b',')?,
            "tsv" => Self::read_delimited(path, b'\t')?,
            _ => Self::read_table(path)?,
        };

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "series".to_string());

        Ok(PointSeries::new(name, points))
    }

    /// Parse delimited records with the `csv` crate.
    ///
    /// A non-numeric first record is treated as a header and skipped.
    fn read_delimited(path: &Path, delimiter: u8) -> Result<Vec<Point>> {
        let file =
            File::open(path).map_err(|e| ArgandError::file_open(path.to_path_buf(), e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(file);

        let mut points = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let record = record?;

            if record.iter().all(|field| field.is_empty()) {
                continue;
            }

            match Self::parse_pair(record.get(0), record.get(1)) {
                Some(point) => points.push(point),
                None if idx == 0 => continue,
                None => {
                    return Err(ArgandError::parse(
                        path.to_path_buf(),
                        idx + 1,
                        "expected two numeric columns",
                    ))
                }
            }
        }

        Ok(points)
    }

    /// Parse whitespace-separated columns.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    fn read_table(path: &Path) -> Result<Vec<Point>> {
        let file =
            File::open(path).map_err(|e| ArgandError::file_open(path.to_path_buf(), e))?;
        let reader = BufReader::new(file);

        let mut points = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            match Self::parse_pair(fields.next(), fields.next()) {
                Some(point) => points.push(point),
                None => {
                    return Err(ArgandError::parse(
                        path.to_path_buf(),
                        idx + 1,
                        "expected two numeric columns",
                    ))
                }
            }
        }

        Ok(points)
    }

    fn parse_pair(x: Option<&str>, y: Option<&str>) -> Option<Point> {
        let x = x?.parse().ok()?;
        let y = y?.parse().ok()?;
        Some(Point::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn reads_csv_with_header_row() {
        let file = temp_file(".csv", "x,y\n0.0,1.5\n1.0,-2.0\n2.0,3.25\n");
        let series = SeriesReader::read_file(file.path()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points[0], Point::new(0.0, 1.5));
        assert_eq!(series.points[1], Point::new(1.0, -2.0));
        assert_eq!(series.points[2], Point::new(2.0, 3.25));
    }

    #[test]
    fn reads_csv_without_header_row() {
        let file = temp_file(".csv", "0,0\n1,1\n");
        let series = SeriesReader::read_file(file.path()).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn reads_whitespace_table_with_comments() {
        let file = temp_file(
            ".dat",
            "# generated by a simulation\n0.0  1.0\n\n0.5\t2.0\n1.0 4.0\n",
        );
        let series = SeriesReader::read_file(file.path()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points[1], Point::new(0.5, 2.0));
    }

    #[test]
    fn malformed_table_line_reports_line_number() {
        let file = temp_file(".dat", "0.0 1.0\nnot numbers\n");
        let err = SeriesReader::read_file(file.path()).unwrap_err();
        match err {
            ArgandError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_csv_row_past_header_is_an_error() {
        let file = temp_file(".csv", "x,y\n1,2\noops,3\n");
        let err = SeriesReader::read_file(file.path()).unwrap_err();
        match err {
            ArgandError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_file_yields_empty_series() {
        let file = temp_file(".csv", "");
        let series = SeriesReader::read_file(file.path()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn missing_file_is_a_file_open_error() {
        let err = SeriesReader::read_file(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, ArgandError::FileOpen { .. }));
    }

    #[test]
    fn series_name_comes_from_file_stem() {
        let file = temp_file(".csv", "1,2\n");
        let series = SeriesReader::read_file(file.path()).unwrap();
        let stem = file
            .path()
            .file_stem()
            .unwrap()
            .to_string_lossy()
            .to_string();
        assert_eq!(series.name, stem);
    }
}
