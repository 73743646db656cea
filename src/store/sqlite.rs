use anyhow::{Context, Result};
use rusqlite::{Connection, Row, params};
use std::path::PathBuf;

use crate::corpus::{TranslationRecord, TranslationStore};

/// `SQLite`-backed translation store.
///
/// Each call opens its own connection; the store keeps no in-process state
/// beyond the database path, so handles are cheap to clone and safe to use
/// from independent operations. Untranslated entries are stored as an empty
/// string and surfaced as `None`.
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and initializes, if needed) the corpus database at `db_path`.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create corpus directory: {}", parent.display())
            })?;
        }

        let store = Self { db_path };
        store.init_db()?;

        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS records (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT UNIQUE NOT NULL,
                source_text TEXT NOT NULL DEFAULT '',
                translated_text TEXT NOT NULL DEFAULT '',
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create records table")?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_records_id ON records(id)",
            [],
        )
        .context("Failed to create index")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).with_context(|| {
            format!("Failed to open corpus database: {}", self.db_path.display())
        })
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<TranslationRecord> {
        let translated: String = row.get(2)?;
        Ok(TranslationRecord {
            id: row.get(0)?,
            source_text: row.get(1)?,
            translated_text: if translated.is_empty() {
                None
            } else {
                Some(translated)
            },
        })
    }
}

impl TranslationStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<TranslationRecord>> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare("SELECT id, source_text, translated_text FROM records ORDER BY seq")?;
        let records = stmt
            .query_map([], Self::row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to list corpus records")?;

        Ok(records)
    }

    fn get(&self, id: &str) -> Result<Option<TranslationRecord>> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare("SELECT id, source_text, translated_text FROM records WHERE id = ?1")?;
        let record = stmt
            .query_row([id], Self::row_to_record)
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })
            .with_context(|| format!("Failed to look up record '{id}'"))?;

        Ok(record)
    }

    fn upsert(
        &self,
        id: &str,
        translated_text: &str,
        source_text: Option<&str>,
    ) -> Result<TranslationRecord> {
        let conn = self.connect()?;

        // Single statement: insert-or-overwrite with no read-modify-write
        // window. An existing row keeps its source_text.
        let record = conn
            .query_row(
                "INSERT INTO records (id, source_text, translated_text)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(id) DO UPDATE SET
                     translated_text = excluded.translated_text,
                     updated_at = CURRENT_TIMESTAMP
                 RETURNING id, source_text, translated_text",
                params![id, source_text.unwrap_or(""), translated_text],
                Self::row_to_record,
            )
            .with_context(|| format!("Failed to upsert record '{id}'"))?;

        Ok(record)
    }

    fn remove(&self, id: &str) -> Result<()> {
        let conn = self.connect()?;

        // Removing an absent id is a no-op success.
        conn.execute("DELETE FROM records WHERE id = ?1", [id])
            .with_context(|| format!("Failed to delete record '{id}'"))?;

        Ok(())
    }
}
