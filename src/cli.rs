//! Command-line interface components.

use crate::config::PickerConfig;
use crate::error::PickerError;
use crate::loader::load_report;
use crate::models::PipelineOutput;
use crate::processor::ReportTransformer;
use crate::writer::write_outputs;
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "point-picker")]
#[command(about = "Transform Final_Report.csv into top and bottom picked-point coordinate files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Input CSV report
    #[arg(short, long, default_value = "Final_Report.csv")]
    pub input: PathBuf,

    /// Output directory for the generated files
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Validate and transform the report without writing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }

    /// Check the input file and output directory before any processing
    pub fn check_paths(&self) -> std::result::Result<(), PickerError> {
        if !self.input.exists() {
            let expected =
                std::path::absolute(&self.input).unwrap_or_else(|_| self.input.clone());
            return Err(PickerError::InputNotFound {
                path: self.input.clone(),
                expected,
            });
        }

        if !self.output_dir.is_dir() {
            return Err(PickerError::OutputDirNotFound {
                path: self.output_dir.clone(),
            });
        }

        Ok(())
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("point_picker={}", log_level)));

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

/// Load, transform and write a report; the blocking body of the command
pub fn process_report(
    input: &Path,
    output_dir: &Path,
    config: PickerConfig,
    dry_run: bool,
) -> Result<PipelineOutput> {
    println!(
        "  {} {}",
        "Reading input file:".bright_cyan(),
        input.display()
    );
    let table = load_report(input)
        .with_context(|| format!("Failed to read input report {}", input.display()))?;

    let transformer = ReportTransformer::new().with_config(config);
    let output = transformer.run(&table)?;

    if dry_run {
        println!("  {}", "Dry run - no files written".bright_yellow());
    } else {
        let written = write_outputs(&output, output_dir, transformer.config())?;
        println!(
            "  {} {} ({} rows)",
            "Written:".bright_green(),
            written.top_path.display(),
            written.top_rows
        );
        println!(
            "  {} {} ({} rows)",
            "Written:".bright_green(),
            written.bottom_path.display(),
            written.bottom_rows
        );
    }

    Ok(output)
}

/// Run the command on a blocking worker and print the summary
pub async fn run(args: Args) -> Result<PipelineOutput> {
    args.check_paths()?;

    let input = args.input.clone();
    let output_dir = args.output_dir.clone();
    let dry_run = args.dry_run;
    let output = tokio::task::spawn_blocking(move || {
        process_report(&input, &output_dir, PickerConfig::default(), dry_run)
    })
    .await
    .context("Processing task failed")??;

    print_summary(&output);
    Ok(output)
}

/// Print run statistics and quality warnings
pub fn print_summary(output: &PipelineOutput) {
    let stats = &output.statistics;

    println!("\n{}", "Processing complete!".bright_green().bold());
    println!(
        "  {} {}",
        "Input rows:".bright_cyan(),
        stats.input_rows.to_string().bright_white().bold()
    );
    if stats.zero_depth_removed > 0 {
        println!(
            "  {} {}",
            "Removed (zero depth):".bright_yellow(),
            stats.zero_depth_removed.to_string().bright_white()
        );
    }
    println!(
        "  {} {}",
        "Detected:".bright_cyan(),
        stats.detected_count.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Non-detected:".bright_cyan(),
        stats.non_detected_count.to_string().bright_white()
    );
    println!(
        "  {} {} rows",
        "Top output:".bright_cyan(),
        stats.top_output_rows.to_string().bright_white()
    );
    println!(
        "  {} {} rows",
        "Bottom output:".bright_cyan(),
        stats.bottom_output_rows.to_string().bright_white()
    );

    for line in warning_lines(output) {
        println!("  {} {}", "Warning:".bright_red(), line);
    }
}

/// One summary line per quality warning of a run
pub fn warning_lines(output: &PipelineOutput) -> Vec<String> {
    output.warnings.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(input: PathBuf, output_dir: PathBuf) -> Args {
        Args {
            input,
            output_dir,
            dry_run: false,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["point-picker"]);
        assert_eq!(args.input, PathBuf::from("Final_Report.csv"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(!args.dry_run);
        assert_eq!(args.get_log_level(), "info");
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from(["point-picker", "-i", "in.csv", "-o", "out", "-v"]);
        assert_eq!(args.input, PathBuf::from("in.csv"));
        assert_eq!(args.output_dir, PathBuf::from("out"));
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["point-picker", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_missing_input_reports_expected_location() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("Final_Report.csv");

        match args(input.clone(), temp_dir.path().to_path_buf()).check_paths() {
            Err(PickerError::InputNotFound { path, expected }) => {
                assert_eq!(path, input);
                assert!(expected.is_absolute());
            }
            other => panic!("Expected InputNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("Final_Report.csv");
        fs::write(&input, "UPN\n1\n").unwrap();

        let result = args(input, temp_dir.path().join("missing")).check_paths();
        assert!(matches!(result, Err(PickerError::OutputDirNotFound { .. })));
    }

    #[test]
    fn test_each_warning_reported_once() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("Final_Report.csv");
        fs::write(
            &input,
            "UPN,Detected,Top_X,Top_Y,Top_Z,Bot_X,Bot_Y,Bot_Z\n\
             1.0,True,0,2,3,4,5,6\n\
             2.0,False,1,2,3,4,5,6\n",
        )
        .unwrap();

        let output =
            process_report(&input, temp_dir.path(), PickerConfig::default(), true).unwrap();
        assert_eq!(
            warning_lines(&output),
            vec![
                "1 rows have Detected=True but zero coordinates".to_string(),
                "1 rows have Detected=False but non-zero coordinates".to_string(),
            ]
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("Final_Report.csv");
        fs::write(
            &input,
            "UPN,Detected,Top_X,Top_Y,Top_Z,Bot_X,Bot_Y,Bot_Z\n1.0,True,1,2,3,4,5,6\n",
        )
        .unwrap();
        let out_dir = temp_dir.path().join("out");
        fs::create_dir(&out_dir).unwrap();

        let output = process_report(&input, &out_dir, PickerConfig::default(), true).unwrap();
        assert_eq!(output.statistics.input_rows, 1);
        assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 0);
    }
}
