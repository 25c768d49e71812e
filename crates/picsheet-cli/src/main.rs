//! picsheet-cli: build an image list workbook from image files on disk.
//!
//! Runs the same ingestion and export pipeline as the web app. Every input
//! file becomes one row: sequence number, file name, and an embedded
//! thumbnail scaled to fit the configured cell bounds.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin picsheet-cli -- [OPTIONS] <IMAGES>...
//! ```

#![allow(clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use picsheet_catalog::{NoPreview, SelectedFile, assemble_batch};
use picsheet_export::ExportConfig;

/// Export images to an xlsx workbook with one thumbnail per row.
///
/// Fails without writing anything if any input cannot be read or is not a
/// supported image (PNG, JPEG, GIF, BMP).
#[derive(Parser)]
#[command(name = "picsheet-cli", version)]
struct Cli {
    /// Image files, in row order.
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Output workbook path (defaults to the configured file name).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Largest thumbnail width in display pixels.
    #[arg(long, default_value_t = ExportConfig::DEFAULT_MAX_CELL_WIDTH)]
    max_cell_width: f64,

    /// Largest thumbnail height in display pixels.
    #[arg(long, default_value_t = ExportConfig::DEFAULT_MAX_CELL_HEIGHT)]
    max_cell_height: f64,

    /// Worksheet name.
    #[arg(long, default_value = ExportConfig::DEFAULT_SHEET_NAME)]
    sheet_name: String,

    /// Path to a JSON file holding a full export config.
    ///
    /// When provided, the individual layout flags are ignored.
    #[arg(long, conflicts_with = "config_json")]
    config: Option<PathBuf>,

    /// Full export config as a JSON string.
    ///
    /// When provided, the individual layout flags are ignored. Missing
    /// fields take their default values.
    #[arg(long)]
    config_json: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Build an [`ExportConfig`] from CLI arguments.
///
/// `--config` and `--config-json` replace the individual layout flags.
fn config_from_cli(cli: &Cli) -> Result<ExportConfig, String> {
    if let Some(ref path) = cli.config {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Error reading config {}: {e}", path.display()))?;
        return serde_json::from_str(&json)
            .map_err(|e| format!("Error parsing config {}: {e}", path.display()));
    }
    if let Some(ref json) = cli.config_json {
        return serde_json::from_str(json).map_err(|e| format!("Error parsing --config-json: {e}"));
    }

    Ok(ExportConfig {
        max_cell_width: cli.max_cell_width,
        max_cell_height: cli.max_cell_height,
        sheet_name: cli.sheet_name.clone(),
        ..ExportConfig::default()
    })
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// The name shown in the workbook: the path's final component.
fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Read every input before any is probed, so a missing file fails fast.
fn read_inputs(paths: &[PathBuf]) -> Result<Vec<SelectedFile>, String> {
    paths
        .iter()
        .map(|path| {
            std::fs::read(path)
                .map(|bytes| SelectedFile::new(display_name(path), bytes))
                .map_err(|e| format!("Error reading {}: {e}", path.display()))
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = match config_from_cli(&cli) {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "export config");

    let files = match read_inputs(&cli.images) {
        Ok(files) => files,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    let entries = match assemble_batch(files, |_| Ok(NoPreview)) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error processing images: {e}");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match picsheet_export::to_xlsx(&entries, &config) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error exporting to Excel: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.file_name));
    if let Err(e) = std::fs::write(&output, &bytes) {
        eprintln!("Error writing {}: {e}", output.display());
        return ExitCode::FAILURE;
    }

    tracing::info!(
        path = %output.display(),
        rows = entries.len(),
        bytes = bytes.len(),
        "wrote workbook"
    );
    eprintln!("Wrote {} images to {}", entries.len(), output.display());
    ExitCode::SUCCESS
}
