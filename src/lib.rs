//! Flight-Log Geotagger Library
//!
//! Converts a raw drone flight-telemetry log (mixed-language labels,
//! irregular field ordering, multiple facts per physical line) into a
//! cleaned geotag CSV plus a directory of placeholder images, then drives
//! an external ExifTool-compatible process to embed the coordinates.
//!
//! The stages, in order:
//! - Extracting labeled fields line by line against a fixed pattern catalog
//! - Assembling timestamp-delimited telemetry records
//! - Projecting records onto the geotag table and filtering unusable fixes
//! - Materializing placeholder images, one per surviving row
//! - Exporting the CSV and invoking the metadata-embedding tool

pub mod assembler;
pub mod cli;
pub mod config;
pub mod constants;
pub mod embedder;
pub mod error;
pub mod export;
pub mod extractor;
pub mod materializer;
pub mod models;
pub mod modes;
pub mod pipeline;
pub mod projector;

pub use config::PipelineConfig;
pub use error::{GeotagError, Result};
pub use models::{FieldValue, FlightRecord, GeotagRow, PipelineStats, TrackPoint};
pub use pipeline::GeotagPipeline;
