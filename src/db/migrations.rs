use anyhow::{bail, Context, Result};
use rusqlite::Connection;

const CURRENT_SCHEMA_VERSION: i32 = 1;

fn migration_sql(version: i32) -> Result<&'static str> {
    match version {
        1 => Ok(include_str!("schemas/schema_v1.sql")),
        _ => bail!("unknown migration target version: {version}"),
    }
}

/// Bring the database schema up to `CURRENT_SCHEMA_VERSION`, tracked via the
/// SQLite `user_version` pragma. All pending migrations run in one transaction.
pub fn run_migrations(conn: &mut Connection) -> Result<()> {
    let version: i32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .context("failed to read user_version pragma")?;

    if version > CURRENT_SCHEMA_VERSION {
        bail!("database schema version {version} is newer than this build supports ({CURRENT_SCHEMA_VERSION})");
    }
    if version == CURRENT_SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn
        .transaction()
        .context("failed to open migration transaction")?;

    for next in (version + 1)..=CURRENT_SCHEMA_VERSION {
        tx.execute_batch(migration_sql(next)?)
            .with_context(|| format!("migration to schema version {next} failed"))?;
    }

    tx.pragma_update(None, "user_version", CURRENT_SCHEMA_VERSION)
        .context("failed to update user_version pragma")?;
    tx.commit().context("failed to commit migrations")
}
