//! Core data structures for flight-log geotagging.
//!
//! Defines the typed field values produced by the extractor, the assembled
//! telemetry records, the projected track points, the exported CSV rows,
//! and run statistics reported by the pipeline.

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Typed value of one extracted telemetry field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Float(f64),
    Int(i64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the value; text fields have none
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(v) => Some(*v),
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// One assembled telemetry snapshot, keyed by its boundary timestamp.
///
/// Fields accumulate from any number of physical lines between two
/// boundaries; the label set varies per snapshot. Setting a field that is
/// already present overwrites it (last-write-wins).
#[derive(Debug, Clone)]
pub struct FlightRecord {
    pub time: String,
    fields: HashMap<&'static str, FieldValue>,
}

impl FlightRecord {
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            fields: HashMap::new(),
        }
    }

    pub fn set(&mut self, name: &'static str, value: FieldValue) {
        self.fields.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(FieldValue::as_f64)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields carried by this snapshot (timestamp excluded)
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// A projected row with a usable GPS fix, before image binding.
///
/// Invariant: latitude and longitude are present and non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<f64>,
}

/// One exported CSV row, bound to its placeholder image.
///
/// Serialized headers are the exact tag names ExifTool expects.
#[derive(Debug, Clone, Serialize)]
pub struct GeotagRow {
    #[serde(rename = "SourceFile")]
    pub source_file: String,
    #[serde(rename = "GPSLatitude")]
    pub gps_latitude: f64,
    #[serde(rename = "GPSLongitude")]
    pub gps_longitude: f64,
    #[serde(rename = "GPSAltitude")]
    pub gps_altitude: Option<f64>,
}

/// Statistics for one pipeline run
#[derive(Debug, Default)]
pub struct PipelineStats {
    pub lines_read: usize,
    pub records_assembled: usize,
    pub rows_projected: usize,
    pub rows_dropped: usize,
    pub images_created: usize,
    pub images_reused: usize,
    pub csv_path: PathBuf,
    pub processing_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_numeric_views() {
        assert_eq!(FieldValue::Float(12.5).as_f64(), Some(12.5));
        assert_eq!(FieldValue::Int(7).as_f64(), Some(7.0));
        assert_eq!(FieldValue::Text("GPS Mode".into()).as_f64(), None);
        assert_eq!(
            FieldValue::Text("GPS Mode".into()).as_text(),
            Some("GPS Mode")
        );
    }

    #[test]
    fn test_record_last_write_wins() {
        let mut record = FlightRecord::new("2024:01:01 10:00:00.000000");
        record.set("Altitude", FieldValue::Float(100.0));
        record.set("Altitude", FieldValue::Float(120.0));

        assert_eq!(record.field_count(), 1);
        assert_eq!(record.get_f64("Altitude"), Some(120.0));
    }
}
