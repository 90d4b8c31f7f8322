//! Pipeline orchestration: read, assemble, project, materialize, export,
//! embed.
//!
//! Single-threaded one-shot batch. The whole log is read before projection
//! begins; the only suspension points are blocking file and process I/O.
//! An embedding failure leaves the CSV and images on disk for inspection.

use crate::assembler;
use crate::config::PipelineConfig;
use crate::constants::{CSV_SUFFIX, fields};
use crate::embedder::{ExifToolEmbedder, MetadataEmbedder};
use crate::error::{GeotagError, Result};
use crate::export;
use crate::materializer;
use crate::models::{FlightRecord, PipelineStats};
use crate::projector;
use colored::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::debug;

/// Orchestrates one geotagging run over a single flight log
pub struct GeotagPipeline {
    log_path: PathBuf,
    output_root: PathBuf,
    csv_name: String,
    config: PipelineConfig,
}

impl GeotagPipeline {
    /// Create a pipeline for a log file. Output defaults to the log's
    /// directory; the CSV name defaults to `<log-stem>_cleaned.csv`.
    pub fn new(
        log_path: PathBuf,
        output_root: Option<PathBuf>,
        csv_name: Option<String>,
    ) -> Result<Self> {
        if !log_path.is_file() {
            return Err(GeotagError::LogNotFound { path: log_path });
        }

        let output_root = output_root.unwrap_or_else(|| {
            log_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        let csv_name = csv_name.unwrap_or_else(|| default_csv_name(&log_path));

        Ok(Self {
            log_path,
            output_root,
            csv_name,
            config: PipelineConfig::default(),
        })
    }

    /// Configure the pipeline
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_root.join(&self.csv_name)
    }

    /// Run the pipeline with the configured ExifTool embedder
    pub fn run(&self) -> Result<PipelineStats> {
        let embedder = ExifToolEmbedder::new(&self.config.exiftool_program);
        self.run_with(&embedder)
    }

    /// Run the pipeline with a caller-supplied embedder
    pub fn run_with(&self, embedder: &dyn MetadataEmbedder) -> Result<PipelineStats> {
        let start_time = Instant::now();
        let mut stats = PipelineStats::default();

        println!("{}", "Starting flight-log geotagging".bright_green().bold());
        println!("  {} {}", "Log:".bright_cyan(), self.log_path.display());
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            self.output_root.display()
        );

        // Step 1: read and assemble records
        println!("\n{}", "Parsing flight log...".bright_yellow());
        let records = self.read_records(&mut stats)?;
        stats.records_assembled = records.len();
        println!(
            "  {} {} records from {} lines",
            "Assembled".bright_green(),
            records.len().to_string().bright_white().bold(),
            stats.lines_read.to_string().bright_white()
        );

        // Step 2: project onto the geotag table
        let projection = projector::project(&records);
        stats.rows_projected = projection.points.len();
        stats.rows_dropped = projection.dropped;
        println!(
            "  {} {} rows with a GPS fix ({} dropped)",
            "Kept".bright_green(),
            stats.rows_projected.to_string().bright_white().bold(),
            stats.rows_dropped.to_string().bright_white()
        );

        if self.config.parse_only {
            report_field_coverage(&records);
            stats.processing_time_ms = start_time.elapsed().as_millis();
            self.print_summary(&stats);
            return Ok(stats);
        }

        // Step 3: materialize placeholder images
        println!("\n{}", "Creating placeholder images...".bright_yellow());
        let (rows, image_stats) =
            materializer::materialize(&projection.points, &self.output_root, &self.config)?;
        stats.images_created = image_stats.created;
        stats.images_reused = image_stats.reused;
        println!(
            "  {} {} created, {} already present",
            "Images:".bright_cyan(),
            stats.images_created.to_string().bright_white().bold(),
            stats.images_reused.to_string().bright_white()
        );

        // Step 4: export the CSV
        let csv_path = self.csv_path();
        export::write_csv(&rows, &csv_path)?;
        stats.csv_path = csv_path.clone();
        println!(
            "  {} {}",
            "CSV written:".bright_cyan(),
            csv_path.display()
        );

        // Step 5: hand off to the embedding tool
        if self.config.skip_embed {
            debug!("skipping metadata embedding on request");
        } else {
            println!("\n{}", "Embedding GPS metadata...".bright_yellow());
            let report = embedder.embed(&csv_path, &self.config.dummy_dir_name)?;
            if !report.stdout.trim().is_empty() {
                println!("{}", report.stdout.trim().bright_black());
            }
        }

        stats.processing_time_ms = start_time.elapsed().as_millis();
        self.print_summary(&stats);
        Ok(stats)
    }

    fn read_records(&self, stats: &mut PipelineStats) -> Result<Vec<FlightRecord>> {
        let file = File::open(&self.log_path)?;
        let reader = BufReader::new(file);

        let mut assembler = assembler::RecordAssembler::new();
        for line in reader.lines() {
            let line = line?;
            stats.lines_read += 1;
            assembler.push_line(&line);
        }
        Ok(assembler.finish())
    }

    fn print_summary(&self, stats: &PipelineStats) {
        println!("\n{}", "Geotagging Summary".bright_green().bold());
        println!(
            "  {} {}ms",
            "Time elapsed:".bright_cyan(),
            stats.processing_time_ms.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Records assembled:".bright_cyan(),
            stats.records_assembled.to_string().bright_white()
        );
        println!(
            "  {} {}",
            "Rows exported:".bright_cyan(),
            stats.rows_projected.to_string().bright_white().bold()
        );
        if stats.rows_dropped > 0 {
            println!(
                "  {} {}",
                "Rows without fix:".bright_cyan(),
                stats.rows_dropped.to_string().bright_white()
            );
        }
    }
}

/// Per-field record coverage, reported in parse-only mode
fn report_field_coverage(records: &[FlightRecord]) {
    println!("\n{}", "Field coverage".bright_green().bold());
    for field in [
        fields::AIRCRAFT_LAT,
        fields::AIRCRAFT_LON,
        fields::ALTITUDE,
        fields::FLIGHT_MODE,
        fields::GPS_SATELLITES,
        fields::BATTERY_VOLTAGE,
    ] {
        let count = records.iter().filter(|r| r.contains(field)).count();
        println!(
            "  {} {}/{}",
            format!("{field}:").bright_cyan(),
            count.to_string().bright_white(),
            records.len()
        );
    }
}

fn default_csv_name(log_path: &Path) -> String {
    let stem = log_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "flightlog".to_string());
    format!("{stem}{CSV_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_csv_name() {
        assert_eq!(
            default_csv_name(Path::new("/logs/ZLL_Raw.txt")),
            "ZLL_Raw_cleaned.csv"
        );
    }

    #[test]
    fn test_missing_log_is_fatal() {
        let result = GeotagPipeline::new(PathBuf::from("/nonexistent/ZLL_Raw.txt"), None, None);
        assert!(matches!(result, Err(GeotagError::LogNotFound { .. })));
    }
}
