use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use log::error;

use ppglog::{
    batch_process, process_log, Database, FlightLog, LogSummary, SegmentationConfig,
};

const USAGE: &str = "\
ppglog - flight segmentation for FlySight PPG logs

Usage:
  ppglog single <log-file> [options]
  ppglog batch <log-dir> [options]
  ppglog summary [options]

Options:
  --start-trim <secs>           Seconds trimmed from the start of each log
  --airborne-threshold <m/s>    Smoothed groundspeed threshold for AIRBORNE
  --time-threshold <secs>       Noise/landing duration threshold
  --midair-start                Assume the log begins mid-air
  --db-insert                   Insert processed logs into the database
  --db <path>                   Database path (default: $DB_URL or ./ppglog.db)
";

struct CliArgs {
    command: String,
    target: Option<PathBuf>,
    config: SegmentationConfig,
    db_insert: bool,
    db_path: PathBuf,
}

fn parse_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<f64> {
    args.next()
        .ok_or_else(|| anyhow!("{flag} requires a value"))?
        .parse::<f64>()
        .with_context(|| format!("invalid value for {flag}"))
}

fn parse_args() -> Result<CliArgs> {
    let mut args = std::env::args().skip(1);
    let command = args.next().ok_or_else(|| anyhow!("missing command"))?;

    let mut target = None;
    let mut config = SegmentationConfig::default();
    let mut db_insert = false;
    let mut db_path = std::env::var("DB_URL")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./ppglog.db"));

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--start-trim" => config.start_trim_secs = parse_value(&mut args, "--start-trim")?,
            "--airborne-threshold" => {
                config.airborne_threshold = parse_value(&mut args, "--airborne-threshold")?
            }
            "--time-threshold" => {
                config.time_threshold_secs = parse_value(&mut args, "--time-threshold")?
            }
            "--midair-start" => config.midair_start = true,
            "--db-insert" => db_insert = true,
            "--db" => {
                db_path = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| anyhow!("--db requires a path"))?
            }
            other if !other.starts_with("--") && target.is_none() => {
                target = Some(PathBuf::from(other));
            }
            other => return Err(anyhow!("unrecognized argument '{other}'")),
        }
    }

    Ok(CliArgs {
        command,
        target,
        config,
        db_insert,
        db_path,
    })
}

fn print_logs_and_summary(flight_logs: &[FlightLog]) -> Result<()> {
    for flight_log in flight_logs {
        println!("{}\n", flight_log.metadata);
    }
    println!("{}", LogSummary::from_flight_logs(flight_logs)?);
    Ok(())
}

fn run() -> Result<()> {
    let args = parse_args()?;

    match args.command.as_str() {
        "single" => {
            let log_file = args
                .target
                .ok_or_else(|| anyhow!("single requires a log file path"))?;
            let flight_log = process_log(&log_file, &args.config, true)?;
            print_logs_and_summary(std::slice::from_ref(&flight_log))?;

            if args.db_insert {
                let db = Database::new(args.db_path)?;
                db.insert_flight_log(&flight_log)?;
            }
        }
        "batch" => {
            let log_dir = args
                .target
                .ok_or_else(|| anyhow!("batch requires a log directory path"))?;
            let flight_logs = batch_process(&log_dir, &args.config, true)?;
            if flight_logs.is_empty() {
                println!("No log files found in {}", log_dir.display());
                return Ok(());
            }
            print_logs_and_summary(&flight_logs)?;

            if args.db_insert {
                let db = Database::new(args.db_path)?;
                let inserted = db.bulk_insert(&flight_logs)?;
                println!("Inserted {inserted} of {} logs.", flight_logs.len());
            }
        }
        "summary" => {
            let db = Database::new(args.db_path)?;
            let totals = db.summary_totals()?;
            println!("{}", LogSummary::from_summary_totals(&totals)?);
        }
        _ => {
            eprint!("{USAGE}");
            return Err(anyhow!("unknown command '{}'", args.command));
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
