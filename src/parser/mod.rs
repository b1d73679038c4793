use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::DateTime;
use csv::StringRecord;

use crate::models::FlightData;

/// FlySight logs carry a second header row of units under the column labels.
const N_UNIT_ROWS: usize = 1;

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| anyhow!("missing required column '{name}'"))
}

fn parse_field(record: &StringRecord, idx: usize, name: &str, row: usize) -> Result<f64> {
    record
        .get(idx)
        .ok_or_else(|| anyhow!("row {row} is missing column '{name}'"))?
        .trim()
        .parse::<f64>()
        .with_context(|| format!("row {row}: could not parse '{name}'"))
}

/// Parse a FlySight log into a `FlightData` series.
///
/// Two derived columns come out of the raw data: `elapsed_time`, decimal seconds
/// since the first sample, and `groundspeed` (m/s), the magnitude of the north/east
/// velocity components.
pub fn load_flysight(filepath: &Path) -> Result<FlightData> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(filepath)
        .with_context(|| format!("failed to open log file {}", filepath.display()))?;

    let headers = reader.headers()?.clone();
    let time_idx = column_index(&headers, "time")?;
    let vel_n_idx = column_index(&headers, "velN")?;
    let vel_e_idx = column_index(&headers, "velE")?;

    let mut elapsed_time = Vec::new();
    let mut groundspeed = Vec::new();
    let mut first_timestamp = None;

    for (i, record) in reader.records().enumerate() {
        // The units row sits between the labels and the data
        if i < N_UNIT_ROWS {
            continue;
        }
        let record = record.with_context(|| format!("failed to read row {i}"))?;
        let row = i + 1;

        let raw_time = record
            .get(time_idx)
            .ok_or_else(|| anyhow!("row {row} is missing column 'time'"))?
            .trim();
        let timestamp = DateTime::parse_from_rfc3339(raw_time)
            .with_context(|| format!("row {row}: invalid timestamp '{raw_time}'"))?;

        let first = *first_timestamp.get_or_insert(timestamp);
        let elapsed = (timestamp - first).num_milliseconds() as f64 / 1000.0;
        elapsed_time.push(elapsed);

        let vel_n = parse_field(&record, vel_n_idx, "velN", row)?;
        let vel_e = parse_field(&record, vel_e_idx, "velE", row)?;
        groundspeed.push(vel_n.hypot(vel_e));
    }

    if elapsed_time.is_empty() {
        return Err(anyhow!(
            "log file {} contains no data rows",
            filepath.display()
        ));
    }

    Ok(FlightData::new(elapsed_time, groundspeed))
}
