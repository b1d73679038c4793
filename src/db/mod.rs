use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use log::{error, info};
use rusqlite::Connection;

mod migrations;
mod repositories;

use migrations::run_migrations;

/// Synchronous SQLite store of per-log flight aggregates.
///
/// The segmentation engine itself never touches the database; callers persist
/// processed logs and query back pre-aggregated summary totals.
pub struct Database {
    conn: Mutex<Connection>,
    db_path: PathBuf,
}

impl Database {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let mut conn = Connection::open(&db_path)
            .with_context(|| format!("failed to open SQLite database {}", db_path.display()))?;

        if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
            error!("Failed to enable WAL mode: {err}");
        }
        if let Err(err) = conn.pragma_update(None, "foreign_keys", "ON") {
            error!("Failed to enable foreign keys: {err}");
        }

        run_migrations(&mut conn).context("failed to run database migrations")?;

        info!("Database initialized at {}", db_path.display());

        Ok(Self {
            conn: Mutex::new(conn),
            db_path,
        })
    }

    /// In-memory database, primarily for tests.
    pub fn open_in_memory() -> Result<Self> {
        let mut conn =
            Connection::open_in_memory().context("failed to open in-memory SQLite database")?;
        run_migrations(&mut conn).context("failed to run database migrations")?;

        Ok(Self {
            conn: Mutex::new(conn),
            db_path: PathBuf::from(":memory:"),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    fn with_conn<T>(&self, task: impl FnOnce(&mut Connection) -> Result<T>) -> Result<T> {
        let mut conn = match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        task(&mut conn)
    }
}
