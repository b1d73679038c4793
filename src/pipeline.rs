use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::info;

use crate::models::{FlightLog, LogMetadata};
use crate::parser;
use crate::segmentation::{generate_flight_metrics, SegmentationConfig};

/// Processing pipeline for an individual FlySight log file.
///
/// The log date comes from the parent directory name since the FlySight hardware
/// groups logs by date and keeps only the time in the CSV filename.
pub fn process_log(
    log_file: &Path,
    config: &SegmentationConfig,
    classify_segments: bool,
) -> Result<FlightLog> {
    let log_date = log_file
        .parent()
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let log_time = log_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("invalid log file path {}", log_file.display()))?;

    let flight_data = parser::load_flysight(log_file)?;
    let mut flight_log = FlightLog::new(flight_data, LogMetadata::new(log_date, log_time));

    generate_flight_metrics(&mut flight_log, config, classify_segments)
        .with_context(|| format!("could not segment flights in {}", log_file.display()))?;

    Ok(flight_log)
}

/// Batch processing pipeline for a directory of FlySight logs.
///
/// Discovery is not recursive; any file with a `.csv` extension (case-insensitive)
/// directly under `top_dir` is processed.
pub fn batch_process(
    top_dir: &Path,
    config: &SegmentationConfig,
    classify_segments: bool,
) -> Result<Vec<FlightLog>> {
    let mut log_files: Vec<PathBuf> = std::fs::read_dir(top_dir)
        .with_context(|| format!("failed to read log directory {}", top_dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    log_files.sort();

    info!("Found {} log files to process", log_files.len());

    let mut parsed_logs = Vec::with_capacity(log_files.len());
    for log_file in &log_files {
        info!("Processing {}", log_file.display());
        parsed_logs.push(process_log(log_file, config, classify_segments)?);
    }

    Ok(parsed_logs)
}
