use anyhow::{Result, anyhow};
use std::sync::Mutex;

use crate::corpus::{TranslationRecord, TranslationStore};

/// In-memory translation store.
///
/// Reference implementation of the store contract, used by tests and
/// anywhere a throwaway corpus is needed. Keeps records in insertion order
/// behind a mutex, so the upsert is atomic the same way the durable store's
/// single-statement write is.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<TranslationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record verbatim, bypassing edit validation.
    ///
    /// Test helper: lets a corpus start from an arbitrary persisted state,
    /// including entries with an empty translation.
    pub fn seed(&self, id: &str, source_text: &str, translated_text: &str) {
        let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
        records.push(TranslationRecord {
            id: id.to_string(),
            source_text: source_text.to_string(),
            translated_text: if translated_text.is_empty() {
                None
            } else {
                Some(translated_text.to_string())
            },
        });
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<TranslationRecord>>> {
        self.records
            .lock()
            .map_err(|_| anyhow!("memory store mutex poisoned"))
    }
}

impl TranslationStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<TranslationRecord>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &str) -> Result<Option<TranslationRecord>> {
        Ok(self.lock()?.iter().find(|r| r.id == id).cloned())
    }

    fn upsert(
        &self,
        id: &str,
        translated_text: &str,
        source_text: Option<&str>,
    ) -> Result<TranslationRecord> {
        let mut records = self.lock()?;

        let record = if let Some(existing) = records.iter_mut().find(|r| r.id == id) {
            existing.translated_text = Some(translated_text.to_string());
            existing.clone()
        } else {
            let record = TranslationRecord {
                id: id.to_string(),
                source_text: source_text.unwrap_or("").to_string(),
                translated_text: Some(translated_text.to_string()),
            };
            records.push(record.clone());
            record
        };

        Ok(record)
    }

    fn remove(&self, id: &str) -> Result<()> {
        self.lock()?.retain(|r| r.id != id);
        Ok(())
    }
}
