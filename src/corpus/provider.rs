use anyhow::Result;

use crate::corpus::{LiveKey, TranslationRecord};

/// Provider of the current universe of live text keys.
///
/// The returned set is recomputed on every call; it is treated as the
/// authoritative snapshot of what the application currently references.
/// Order must be stable for a given snapshot.
pub trait KeySource {
    fn list_live_keys(&self) -> Result<Vec<LiveKey>>;
}

/// Durable record of truth for the key→translation mapping.
///
/// The store exclusively owns persisted record state; the corpus engine
/// holds no cross-request memory.
pub trait TranslationStore {
    /// Returns every persisted record in insertion order.
    fn list_all(&self) -> Result<Vec<TranslationRecord>>;

    /// Looks up a single record by id.
    fn get(&self, id: &str) -> Result<Option<TranslationRecord>>;

    /// Inserts or overwrites the translation for `id` as a single atomic
    /// write.
    ///
    /// If the id already exists, only `translated_text` is replaced and the
    /// stored `source_text` is preserved. If it does not, a new record is
    /// created with `source_text` taken from the argument, or empty when
    /// `None`. Returns the record as persisted.
    fn upsert(
        &self,
        id: &str,
        translated_text: &str,
        source_text: Option<&str>,
    ) -> Result<TranslationRecord>;

    /// Removes the record for `id`. Removing an absent id is not an error.
    fn remove(&self, id: &str) -> Result<()>;
}
