//! CSV serialization of the geotag table.

use crate::constants::CSV_HEADER;
use crate::error::Result;
use crate::models::GeotagRow;
use std::path::Path;
use tracing::debug;

/// Write the table with the fixed `SourceFile,GPSLatitude,GPSLongitude,
/// GPSAltitude` header, one row per valid record, in log order. An empty
/// table still produces the header line.
pub fn write_csv(rows: &[GeotagRow], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if rows.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = rows.len(), "wrote geotag CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn row(index: usize, lat: f64, lon: f64, alt: Option<f64>) -> GeotagRow {
        GeotagRow {
            source_file: format!("dummies/IMG_{index:04}.JPG"),
            gps_latitude: lat,
            gps_longitude: lon,
            gps_altitude: alt,
        }
    }

    #[test]
    fn test_header_and_row_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_csv(
            &[row(1, 12.5, 45.6, Some(120.0)), row(2, 12.6, 45.7, None)],
            &path,
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "SourceFile,GPSLatitude,GPSLongitude,GPSAltitude");
        assert_eq!(lines[1], "dummies/IMG_0001.JPG,12.5,45.6,120.0");
        assert_eq!(lines[2], "dummies/IMG_0002.JPG,12.6,45.7,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_table_is_header_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_csv(&[], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "SourceFile,GPSLatitude,GPSLongitude,GPSAltitude"
        );
    }
}
