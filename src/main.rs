use clap::Parser;
use colored::*;
use flightlog_geotagger::cli::{self, Args, input};
use flightlog_geotagger::config::PipelineConfig;
use flightlog_geotagger::pipeline::GeotagPipeline;
use std::process;

fn main() {
    let args = Args::parse();

    cli::setup_logging(&args);

    let log_file = match input::resolve_log_file(&args.log_file) {
        Ok(path) => path,
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    };

    let mut config = PipelineConfig::default().with_exiftool(&args.exiftool);
    if args.skip_embed {
        config = config.with_skip_embed();
    }
    if args.parse_only {
        config = config.with_parse_only();
    }
    if !args.should_show_progress() {
        config = config.without_progress();
    }

    let result = GeotagPipeline::new(log_file, args.output, args.csv_name)
        .map(|pipeline| pipeline.with_config(config))
        .and_then(|pipeline| pipeline.run());

    match result {
        Ok(_stats) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("{} {:#}", "Error:".bright_red().bold(), error);
            process::exit(1);
        }
    }
}
