use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{Connection, TransactionBehavior};
use tracing::{debug, info};

use crate::db::books::insert_seed_book;
use crate::seed::SeedBook;

/// Open the SQLite file at `path`, creating its parent directory first so a
/// fresh install does not trip over a missing data folder.
pub fn open_connection(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }

    Connection::open(path)
        .with_context(|| format!("failed to open SQLite database {}", path.display()))
}

/// Create both tables if they are missing. Safe to call on every start.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT NOT NULL,
            age_group TEXT NOT NULL,
            description TEXT,
            cover_url TEXT,
            popularity INTEGER NOT NULL DEFAULT 0
        )",
        [],
    )
    .context("failed to create books table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS suggestions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            genre TEXT NOT NULL,
            age_group TEXT NOT NULL,
            description TEXT,
            cover_url TEXT,
            submitted_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
        [],
    )
    .context("failed to create suggestions table")?;

    Ok(())
}

/// Ensure the schema exists and load `seed` when the books table is empty.
/// The emptiness check and the inserts share one immediate transaction, so
/// two processes starting at once cannot both seed. Returns the number of
/// books inserted (zero when the catalog already had rows).
pub fn initialize(conn: &mut Connection, seed: &[SeedBook]) -> Result<usize> {
    ensure_schema(conn)?;

    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .context("failed to begin seed transaction")?;

    let existing: i64 = tx
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))
        .context("failed to count books")?;

    if existing > 0 {
        debug!(existing, "catalog already populated; skipping seed");
        return Ok(0);
    }

    for book in seed {
        insert_seed_book(&tx, book)?;
    }
    tx.commit().context("failed to commit seed data")?;

    info!(inserted = seed.len(), "seeded empty catalog");
    Ok(seed.len())
}
