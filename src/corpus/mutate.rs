use crate::corpus::{CorpusError, TranslationRecord, TranslationStore};

/// Creates or overwrites the translation for `id`.
///
/// Both `id` and `translated_text` are required and must be non-empty
/// (whitespace-only counts as empty); otherwise the call fails with
/// [`CorpusError::Validation`] and the store is left untouched.
///
/// If `id` exists, only its translation is replaced and the stored source
/// text is preserved. If it does not, a new record is created with an empty
/// source text — a translator may pre-populate a key before the application
/// starts referencing it. The write is a single atomic upsert on the store,
/// so concurrent edits to the same id resolve to last-writer-wins without a
/// half-written value.
pub fn edit(
    store: &dyn TranslationStore,
    id: &str,
    translated_text: &str,
) -> Result<TranslationRecord, CorpusError> {
    if id.trim().is_empty() {
        return Err(CorpusError::Validation("id is required".to_string()));
    }
    if translated_text.trim().is_empty() {
        return Err(CorpusError::Validation(
            "translated text is required".to_string(),
        ));
    }

    store
        .upsert(id, translated_text, None)
        .map_err(CorpusError::provider)
}

/// Removes the record for `id` from the store.
///
/// Deleting an id that is not persisted is a no-op success: repeated deletes
/// are safe.
pub fn delete(store: &dyn TranslationStore, id: &str) -> Result<(), CorpusError> {
    store.remove(id).map_err(CorpusError::provider)
}
