use std::collections::HashSet;

use crate::corpus::{CorpusError, Filter, KeySource, TranslationRecord, TranslationStore};

/// Classifies the corpus against the live key set and returns the records
/// in the requested class.
///
/// The three classes partition the union of persisted and live keys:
///
/// - `complete`: persisted, still live, and carrying a non-empty translation.
///   Returned in the store's insertion order.
/// - `dead`: persisted but no longer live. Materialized from the store, so a
///   dead entry keeps whatever translation it had before the key fell out of
///   use. Store order.
/// - `untranslated`: live but with no non-empty persisted translation.
///   Materialized from the live key set (the store holds no copy of the
///   source text for brand-new keys). Key-source order.
///
/// Read-only: a pure function of the two providers' current snapshots. If
/// either provider fails, the whole classification fails with
/// [`CorpusError::ProviderUnavailable`] — there is no partial result.
pub fn classify(
    store: &dyn TranslationStore,
    keys: &dyn KeySource,
    filter: Filter,
) -> Result<Vec<TranslationRecord>, CorpusError> {
    let live = keys.list_live_keys().map_err(CorpusError::provider)?;
    let persisted = store.list_all().map_err(CorpusError::provider)?;

    let live_ids: HashSet<&str> = live.iter().map(|k| k.id.as_str()).collect();

    let records = match filter {
        Filter::Complete => persisted
            .into_iter()
            .filter(|r| live_ids.contains(r.id.as_str()) && r.is_translated())
            .collect(),
        Filter::Dead => persisted
            .into_iter()
            .filter(|r| !live_ids.contains(r.id.as_str()))
            .collect(),
        Filter::Untranslated => {
            let translated_ids: HashSet<&str> = persisted
                .iter()
                .filter(|r| r.is_translated())
                .map(|r| r.id.as_str())
                .collect();

            live.iter()
                .filter(|k| !translated_ids.contains(k.id.as_str()))
                .map(|k| TranslationRecord {
                    id: k.id.clone(),
                    source_text: k.source_text.clone(),
                    translated_text: None,
                })
                .collect()
        }
    };

    Ok(records)
}
