//! Placeholder image creation and path binding.
//!
//! Every surviving table row gets a deterministic image path,
//! `dummies/IMG_0001.JPG` onward, dense in row order. Creation is
//! idempotent: an existing file at the computed path is left untouched, so
//! re-running over a partially-completed output directory only fills the
//! gaps.

use crate::config::PipelineConfig;
use crate::constants::{IMAGE_FILE_EXTENSION, IMAGE_FILE_PREFIX};
use crate::error::{GeotagError, Result};
use crate::models::{GeotagRow, TrackPoint};
use image::{Rgb, RgbImage};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Files created and reused while materializing one table
#[derive(Debug, Default)]
pub struct MaterializeStats {
    pub created: usize,
    pub reused: usize,
}

/// Placeholder file name for a 1-based row index
pub fn image_file_name(index: usize) -> String {
    format!("{IMAGE_FILE_PREFIX}{index:04}.{IMAGE_FILE_EXTENSION}")
}

/// Ensure a placeholder image exists for every track point and bind the
/// relative path into the exported row. No row is ever skipped, even when
/// its image already existed.
pub fn materialize(
    points: &[TrackPoint],
    output_root: &Path,
    config: &PipelineConfig,
) -> Result<(Vec<GeotagRow>, MaterializeStats)> {
    let image_dir = output_root.join(&config.dummy_dir_name);
    fs::create_dir_all(&image_dir)?;

    let progress = if config.show_progress && !points.is_empty() {
        let pb = ProgressBar::new(points.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Creating placeholder images");
        Some(pb)
    } else {
        None
    };

    let mut rows = Vec::with_capacity(points.len());
    let mut stats = MaterializeStats::default();

    for (index, point) in points.iter().enumerate() {
        let file_name = image_file_name(index + 1);
        let image_path = image_dir.join(&file_name);

        if image_path.exists() {
            stats.reused += 1;
            debug!(path = %image_path.display(), "placeholder exists, leaving untouched");
        } else {
            write_placeholder(&image_path, config.image_width, config.image_height)?;
            stats.created += 1;
        }

        rows.push(GeotagRow {
            source_file: format!("{}/{}", config.dummy_dir_name, file_name),
            gps_latitude: point.latitude,
            gps_longitude: point.longitude,
            gps_altitude: point.altitude,
        });

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok((rows, stats))
}

fn write_placeholder(path: &Path, width: u32, height: u32) -> Result<()> {
    let canvas = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    canvas.save(path).map_err(|source| GeotagError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
