// Database service module
// SQLite-backed key-value store holding the JSON-encoded application records

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

/// Thin wrapper around the application's SQLite connection.
///
/// Persistence is a single `kv_store` table of JSON-encoded values, one row
/// per record (`calendar_events`, `calendar_settings`).
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a database at the provided path.
    ///
    /// # Arguments
    /// * `path` - Path to the SQLite database file (or ":memory:" for in-memory)
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .context(format!("Failed to open database at {}", path))?;

        Ok(Self { conn })
    }

    /// Opens the database at the platform default location, creating the
    /// data directory on first run.
    pub fn open_default() -> Result<Self> {
        let path = Self::default_path()?;
        let path_str = path
            .to_str()
            .context("Database path is not valid UTF-8")?;
        Self::new(path_str)
    }

    /// Default database file location in the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = directories::BaseDirs::new()
            .context("Failed to get base directories")?
            .data_dir()
            .join("shift-calendar");

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;
        }

        Ok(data_dir.join("calendar.db"))
    }

    /// Initialize the database schema.
    /// Creates the key-value table if it doesn't exist.
    pub fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS kv_store (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )
            .context("Failed to create kv_store table")?;

        Ok(())
    }

    /// Fetch the JSON value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read record '{}'", key))
    }

    /// Store a JSON value under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv_store (key, value, updated_at)
                 VALUES (?1, ?2, CURRENT_TIMESTAMP)
                 ON CONFLICT(key) DO UPDATE
                 SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
                params![key, value],
            )
            .with_context(|| format!("Failed to write record '{}'", key))?;

        Ok(())
    }

    /// Get a reference to the database connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
