//! Store construction and schema bootstrap.

use std::path::Path;

use rusqlite::Connection;

use crate::error::StoreError;

/// Owns the SQLite connection for one movie database.
///
/// Construct one per process (or per test) and hand it to whatever needs
/// it; there is no global connection.
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// Open or create a movie database at the given path.
    ///
    /// Creates the parent directory if it does not exist yet.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

        let store = Self { conn };
        store.initialize()?;
        log::debug!("Opened movie database at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database with the full schema. Useful for testing.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create all tables if they don't exist.
    ///
    /// This is idempotent and never touches existing rows.
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// Borrow the raw connection for ad-hoc inspection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT UNIQUE NOT NULL
);

-- Titles are unique per user, not globally: two users may rate the same film.
CREATE TABLE IF NOT EXISTS movies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id INTEGER NOT NULL REFERENCES users(id),
    title TEXT NOT NULL,
    year INTEGER NOT NULL,
    rating REAL NOT NULL,
    UNIQUE(user_id, title)
);
CREATE INDEX IF NOT EXISTS idx_movies_user ON movies(user_id);
"#;
