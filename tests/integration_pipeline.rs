//! End-to-end tests for the geotagging pipeline over temporary directories.
//!
//! Each test writes a raw log, runs the pipeline with a stub embedder (or
//! the embedding step skipped), and inspects the CSV and image artifacts
//! on disk.

use flightlog_geotagger::embedder::{EmbedReport, MetadataEmbedder};
use flightlog_geotagger::{GeotagPipeline, PipelineConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Embedder stub that records its invocations instead of spawning a process
#[derive(Default)]
struct RecordingEmbedder {
    calls: Mutex<Vec<(PathBuf, String)>>,
}

impl MetadataEmbedder for RecordingEmbedder {
    fn embed(&self, csv_path: &Path, image_dir: &str) -> flightlog_geotagger::Result<EmbedReport> {
        self.calls
            .lock()
            .unwrap()
            .push((csv_path.to_path_buf(), image_dir.to_string()));
        Ok(EmbedReport::default())
    }
}

const SAMPLE_LOG: &str = "\
ZLL flight controller boot
飞机型号:ZLL-X2, 版本号: v1.2.7
2024:05:11 09:30:00.000000
飞行模式: GPS模式
GPS卫星数:14, 精度:1.8
飞机坐标:(Lat:41.015137,Lon:28.979530
飞行高度:35m
飞机电压:11.4V
2024:05:11 09:30:01.000000
飞机坐标:(Lat:41.015301,Lon:28.979611
俯仰角:-2.5 横滚角:0.3 偏航角:175.0
2024:05:11 09:30:02.000000
飞机坐标:(Lat:0.0,Lon:28.979700
飞行高度:37m
2024:05:11 09:30:03.000000
飞机坐标:(Lat:41.015624,Lon:28.979802
飞行高度:38m
";

/// Small image dimensions keep the placeholder writes fast in tests
fn test_config() -> PipelineConfig {
    PipelineConfig::default()
        .with_image_dimensions(40, 30)
        .without_progress()
        .with_skip_embed()
}

fn write_log(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("ZLL_Raw.txt");
    fs::write(&path, content).unwrap();
    path
}

fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    (headers, rows)
}

#[test]
fn test_full_pipeline_produces_csv_and_images() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, SAMPLE_LOG);

    let pipeline = GeotagPipeline::new(log, None, None)
        .unwrap()
        .with_config(test_config());
    let stats = pipeline.run().unwrap();

    // Four boundaries, one record rejected for its zero latitude
    assert_eq!(stats.records_assembled, 4);
    assert_eq!(stats.rows_projected, 3);
    assert_eq!(stats.rows_dropped, 1);
    assert_eq!(stats.images_created, 3);
    assert_eq!(stats.images_reused, 0);

    let (headers, rows) = read_csv(&dir.path().join("ZLL_Raw_cleaned.csv"));
    assert_eq!(
        headers,
        ["SourceFile", "GPSLatitude", "GPSLongitude", "GPSAltitude"]
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        ["dummies/IMG_0001.JPG", "41.015137", "28.97953", "35.0"]
    );
    // The second record carried no altitude field
    assert_eq!(rows[1][0], "dummies/IMG_0002.JPG");
    assert_eq!(rows[1][3], "");
    assert_eq!(rows[2][0], "dummies/IMG_0003.JPG");

    // Every SourceFile resolves to an image of the configured dimensions
    for row in &rows {
        let image_path = dir.path().join(&row[0]);
        assert!(image_path.is_file());
        assert_eq!(image::image_dimensions(&image_path).unwrap(), (40, 30));
    }
}

#[test]
fn test_log_without_boundaries_exports_header_only() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, "飞行高度:120m\n飞机坐标:(Lat:12.5,Lon:45.6\n");

    let pipeline = GeotagPipeline::new(log, None, None)
        .unwrap()
        .with_config(test_config());
    let stats = pipeline.run().unwrap();

    assert_eq!(stats.records_assembled, 0);
    assert_eq!(stats.rows_projected, 0);
    assert_eq!(stats.images_created, 0);

    let content = fs::read_to_string(dir.path().join("ZLL_Raw_cleaned.csv")).unwrap();
    assert_eq!(
        content.trim_end(),
        "SourceFile,GPSLatitude,GPSLongitude,GPSAltitude"
    );
}

#[test]
fn test_rerun_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, SAMPLE_LOG);

    let pipeline = GeotagPipeline::new(log, None, None)
        .unwrap()
        .with_config(test_config());

    let first = pipeline.run().unwrap();
    assert_eq!(first.images_created, 3);

    let second = pipeline.run().unwrap();
    assert_eq!(second.images_created, 0);
    assert_eq!(second.images_reused, 3);
}

#[test]
fn test_rerun_regenerates_only_the_deleted_image() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, SAMPLE_LOG);

    let pipeline = GeotagPipeline::new(log, None, None)
        .unwrap()
        .with_config(test_config());
    pipeline.run().unwrap();

    let survivor = dir.path().join("dummies/IMG_0001.JPG");
    let survivor_bytes = fs::read(&survivor).unwrap();
    fs::remove_file(dir.path().join("dummies/IMG_0002.JPG")).unwrap();

    let stats = pipeline.run().unwrap();
    assert_eq!(stats.images_created, 1);
    assert_eq!(stats.images_reused, 2);
    assert!(dir.path().join("dummies/IMG_0002.JPG").is_file());
    // Untouched placeholders are byte-identical after the re-run
    assert_eq!(fs::read(&survivor).unwrap(), survivor_bytes);
}

#[test]
fn test_embedder_receives_csv_and_image_dir() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, SAMPLE_LOG);

    let pipeline = GeotagPipeline::new(log, None, None)
        .unwrap()
        .with_config(
            PipelineConfig::default()
                .with_image_dimensions(40, 30)
                .without_progress(),
        );

    let embedder = RecordingEmbedder::default();
    pipeline.run_with(&embedder).unwrap();

    let calls = embedder.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, dir.path().join("ZLL_Raw_cleaned.csv"));
    assert_eq!(calls[0].1, "dummies");
}

#[test]
fn test_parse_only_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let log = write_log(&dir, SAMPLE_LOG);

    let pipeline = GeotagPipeline::new(log, None, None)
        .unwrap()
        .with_config(PipelineConfig::default().with_parse_only().without_progress());
    let stats = pipeline.run().unwrap();

    assert_eq!(stats.records_assembled, 4);
    assert_eq!(stats.rows_projected, 3);
    assert!(!dir.path().join("ZLL_Raw_cleaned.csv").exists());
    assert!(!dir.path().join("dummies").exists());
}

#[test]
fn test_output_directory_override() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let log = write_log(&dir, SAMPLE_LOG);

    let pipeline = GeotagPipeline::new(
        log,
        Some(out.path().to_path_buf()),
        Some("track.csv".to_string()),
    )
    .unwrap()
    .with_config(test_config());
    let stats = pipeline.run().unwrap();

    assert_eq!(stats.csv_path, out.path().join("track.csv"));
    assert!(out.path().join("track.csv").is_file());
    assert!(out.path().join("dummies/IMG_0001.JPG").is_file());
    assert!(!dir.path().join("dummies").exists());
}
