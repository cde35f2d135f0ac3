//! Local persistence for the journal.
//!
//! A single `SQLite` file holds named blobs:
//!
//! ```text
//! ~/.urge/journal.sqlite
//!   blobs(key TEXT PRIMARY KEY, value TEXT)
//! ```
//!
//! The event log is one JSON array stored under a fixed key; see [`EventStore`].

mod events;

use std::{fs, io, path::PathBuf};

use rusqlite::{Connection, OptionalExtension};

pub use events::EventStore;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Key-value blob store backed by `SQLite`.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Opens (or creates) the store at the given path.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(&path)?;
        Self::init(conn)
    }

    /// Opens a throwaway store that lives only as long as the value.
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Returns the default store path: `~/.urge/journal.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".urge").join("journal.sqlite"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS blobs (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    /// Reads a blob. Returns `None` if the key has never been written.
    pub fn get_blob(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM blobs WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes a blob, replacing any previous value in one statement.
    pub fn put_blob(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_none() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(storage.get_blob("nothing").unwrap(), None);
    }

    #[test]
    fn put_overwrites_previous_value() {
        let storage = Storage::open_in_memory().unwrap();

        storage.put_blob("k", "first").unwrap();
        storage.put_blob("k", "second").unwrap();

        assert_eq!(storage.get_blob("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn open_creates_parent_directories_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("journal.sqlite");

        {
            let storage = Storage::open(&path).unwrap();
            storage.put_blob("k", "kept").unwrap();
        }

        let reopened = Storage::open(&path).unwrap();
        assert_eq!(reopened.get_blob("k").unwrap().as_deref(), Some("kept"));
    }
}
