//! Projection of assembled records onto the geotag table.
//!
//! Selects the geotagging subset (timestamp, aircraft coordinates,
//! altitude), drops records without a usable GPS fix, and preserves the
//! log's chronological order. A coordinate of exactly zero is the
//! receiver's "no fix" sentinel and is treated as missing; a genuine
//! equatorial or prime-meridian fix is rejected with it (known
//! approximation).

use crate::constants::fields;
use crate::models::{FlightRecord, TrackPoint};
use tracing::debug;

/// Outcome of projecting one batch of records
#[derive(Debug, Default)]
pub struct Projection {
    pub points: Vec<TrackPoint>,
    pub dropped: usize,
}

/// Project records onto track points, dropping rows that fail the
/// validity predicate. Surviving rows keep their relative order.
pub fn project(records: &[FlightRecord]) -> Projection {
    let mut projection = Projection::default();

    for record in records {
        let latitude = record.get_f64(fields::AIRCRAFT_LAT);
        let longitude = record.get_f64(fields::AIRCRAFT_LON);

        match (latitude, longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => {
                projection.points.push(TrackPoint {
                    time: record.time.clone(),
                    latitude: lat,
                    longitude: lon,
                    altitude: record.get_f64(fields::ALTITUDE),
                });
            }
            _ => {
                projection.dropped += 1;
                debug!(time = %record.time, "dropping record without a usable GPS fix");
            }
        }
    }

    projection
}
