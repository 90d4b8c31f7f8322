//! Error handling for the geotagging pipeline.
//!
//! Parse-level noise (unmatched lines, malformed numbers) is recovered
//! in place and never surfaces here; these variants cover the failures
//! that abort a run or must be reported to the operator.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeotagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Flight log not found at path: {path}")]
    LogNotFound { path: PathBuf },

    #[error("Failed to write placeholder image {path}: {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Could not launch metadata embedder '{program}': {source}")]
    EmbedderNotFound {
        program: String,
        source: std::io::Error,
    },

    #[error("Metadata embedding failed ({status}): {stderr}")]
    EmbedFailed { status: String, stderr: String },
}

pub type Result<T> = std::result::Result<T, GeotagError>;
