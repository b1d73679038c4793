use anyhow::{anyhow, bail, Context, Result};
use chrono::Utc;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::Database;
use crate::models::{FlightLog, SummaryTotals};

/// Datetime format used for the `flight_datetime` uniqueness key.
const DB_DATETIME_FMT: &str = "%Y-%m-%dT%H:%M:%S";

fn insert_entry(conn: &Connection, flight_log: &FlightLog) -> Result<bool> {
    let Some(n_flights) = flight_log.metadata.n_flight_segments else {
        bail!(
            "flight log {} {} has not been classified; refusing to insert",
            flight_log.metadata.log_date,
            flight_log.metadata.log_time
        );
    };

    let flight_datetime = flight_log.log_datetime()?.format(DB_DATETIME_FMT).to_string();

    let existing: Option<i64> = conn
        .query_row(
            "SELECT flight_log_id FROM flight_logs WHERE flight_datetime = ?1",
            params![flight_datetime],
            |row| row.get(0),
        )
        .optional()
        .context("failed to check for existing flight log")?;
    if let Some(id) = existing {
        info!("Flight log from {flight_datetime} already exists in database (ID: {id})");
        return Ok(false);
    }

    let durations: Vec<f64> = flight_log
        .metadata
        .flight_segments
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|s| s.duration_secs)
        .collect();
    let segment_durations =
        serde_json::to_string(&durations).context("failed to encode segment durations")?;

    conn.execute(
        "INSERT INTO flight_logs (flight_datetime, n_flights, total_flight_time, flight_segment_durations, added_on)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            flight_datetime,
            n_flights as i64,
            flight_log.metadata.total_flight_time_secs,
            segment_durations,
            Utc::now().to_rfc3339(),
        ],
    )
    .with_context(|| "failed to insert flight log")?;

    Ok(true)
}

impl Database {
    /// Insert a single processed flight log.
    ///
    /// Returns `false` when a log with the same starting datetime is already stored.
    pub fn insert_flight_log(&self, flight_log: &FlightLog) -> Result<bool> {
        self.with_conn(|conn| insert_entry(conn, flight_log))
    }

    /// Insert a batch of processed flight logs, skipping datetimes already present.
    ///
    /// Returns the number of rows actually inserted.
    pub fn bulk_insert(&self, flight_logs: &[FlightLog]) -> Result<usize> {
        self.with_conn(|conn| {
            let tx = conn.transaction()?;
            let mut inserted = 0usize;
            for flight_log in flight_logs {
                if insert_entry(&tx, flight_log)? {
                    inserted += 1;
                }
            }
            tx.commit().context("failed to commit bulk insert")?;
            Ok(inserted)
        })
    }

    /// Pre-aggregated totals across every stored log, for summary statistics.
    pub fn summary_totals(&self) -> Result<SummaryTotals> {
        self.with_conn(|conn| {
            let (n_logs, n_flight_segments, total_flight_time_secs): (i64, i64, f64) = conn
                .query_row(
                    "SELECT COUNT(flight_log_id),
                            COALESCE(SUM(n_flights), 0),
                            COALESCE(SUM(total_flight_time), 0.0)
                     FROM flight_logs",
                    [],
                    |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
                )
                .context("summary query failed")?;

            let mut stmt = conn.prepare(
                "SELECT flight_segment_durations FROM flight_logs ORDER BY flight_datetime ASC",
            )?;
            let mut rows = stmt.query([])?;
            let mut segment_durations = Vec::new();
            while let Some(row) = rows.next()? {
                let raw: String = row.get(0)?;
                let durations: Vec<f64> = serde_json::from_str(&raw)
                    .map_err(|err| anyhow!("corrupt segment durations column: {err}"))?;
                segment_durations.extend(durations);
            }

            Ok(SummaryTotals {
                n_logs: n_logs as usize,
                n_flight_segments: n_flight_segments as usize,
                total_flight_time_secs,
                segment_durations,
            })
        })
    }
}
