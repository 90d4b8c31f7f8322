//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "flightlog-geotagger")]
#[command(about = "Convert raw flight-telemetry logs into geotagged placeholder images")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the raw flight log file
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,

    /// Output directory for the CSV and placeholder images (defaults to
    /// the log file's directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File name for the cleaned CSV (defaults to <log-stem>_cleaned.csv)
    #[arg(long)]
    pub csv_name: Option<String>,

    /// ExifTool executable to invoke for metadata embedding
    #[arg(long, default_value = "exiftool")]
    pub exiftool: String,

    /// Write the CSV and images but skip the embedding step
    #[arg(long)]
    pub skip_embed: bool,

    /// Parse the log and report statistics only; write nothing
    #[arg(long, conflicts_with = "skip_embed")]
    pub parse_only: bool,

    /// Enable verbose logging (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flightlog_geotagger={log_level}")));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Input-path resolution for the binary entry point
pub mod input {
    use anyhow::{Context, Result, bail};
    use std::path::{Path, PathBuf};

    /// Resolve the log file argument to a canonical, existing file
    pub fn resolve_log_file(path: &Path) -> Result<PathBuf> {
        let resolved = path
            .canonicalize()
            .with_context(|| format!("Flight log not found: {}", path.display()))?;

        if !resolved.is_file() {
            bail!("Not a file: {}", resolved.display());
        }

        Ok(resolved)
    }
}
