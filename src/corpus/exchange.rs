use crate::corpus::{CorpusError, Filter, KeySource, TranslationStore, classify};

/// Column headers of the exchange format.
const ID_COLUMN: &str = "id";
const SOURCE_COLUMN: &str = "source_text";
const TRANSLATED_COLUMN: &str = "translated_text";

/// Outcome of a bulk import, for caller-visible reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Rows upserted into the store.
    pub imported: usize,
    /// Rows dropped for a missing or empty id/translation.
    pub skipped: usize,
}

/// Serializes the currently untranslated records as a CSV blob.
///
/// Columns are `id,source_text` — there is no translation column, since by
/// definition none of these records has one. The translator fills in a
/// `translated_text` column before handing the file back to [`import`].
/// Read-only.
pub fn export_untranslated(
    store: &dyn TranslationStore,
    keys: &dyn KeySource,
) -> Result<Vec<u8>, CorpusError> {
    let records = classify(store, keys, Filter::Untranslated)?;

    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer
            .write_record([ID_COLUMN, SOURCE_COLUMN])
            .map_err(|e| CorpusError::provider(e.into()))?;
        for record in &records {
            writer
                .write_record([record.id.as_str(), record.source_text.as_str()])
                .map_err(|e| CorpusError::provider(e.into()))?;
        }
        writer
            .flush()
            .map_err(|e| CorpusError::provider(e.into()))?;
    }

    Ok(buf)
}

/// Merges a translated CSV blob into the store.
///
/// The blob must be a CSV table whose header names an `id` and a
/// `translated_text` column (extra columns are ignored). A blob that does
/// not parse as such fails with [`CorpusError::ImportFormat`] before any row
/// is applied — the whole file is parsed up front so a structural error
/// mid-file cannot leave a partial merge behind.
///
/// Valid rows upsert with the same semantics as an edit: overwrite the
/// translation if the id exists, create the record otherwise. Rows with an
/// empty id or empty translation are counted as skipped. Ids absent from
/// the blob are untouched; import is a merge, never a replace.
pub fn import(
    store: &dyn TranslationStore,
    blob: &[u8],
) -> Result<ImportOutcome, CorpusError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(blob);

    let headers = reader
        .headers()
        .map_err(|e| CorpusError::ImportFormat(e.to_string()))?;
    let id_at = column_index(headers, ID_COLUMN)?;
    let translated_at = column_index(headers, TRANSLATED_COLUMN)?;

    // Parse everything before applying anything.
    let mut rows: Vec<(Option<String>, Option<String>)> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| CorpusError::ImportFormat(e.to_string()))?;
        rows.push((
            record.get(id_at).map(ToString::to_string),
            record.get(translated_at).map(ToString::to_string),
        ));
    }

    let mut outcome = ImportOutcome {
        imported: 0,
        skipped: 0,
    };
    for (id, translated_text) in rows {
        match (id.as_deref(), translated_text.as_deref()) {
            (Some(id), Some(text)) if !id.trim().is_empty() && !text.trim().is_empty() => {
                store
                    .upsert(id, text, None)
                    .map_err(CorpusError::provider)?;
                outcome.imported += 1;
            }
            _ => outcome.skipped += 1,
        }
    }

    Ok(outcome)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, CorpusError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| CorpusError::ImportFormat(format!("missing required column '{name}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::StaticKeys;
    use crate::store::MemoryStore;

    fn keys_with(entries: &[(&str, &str)]) -> StaticKeys {
        StaticKeys::new(
            entries
                .iter()
                .map(|(id, source)| ((*id).to_string(), (*source).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_export_lists_untranslated_pairs() {
        let store = MemoryStore::new();
        store.seed("hello", "你好", "Hello");
        let keys = keys_with(&[("hello", "你好"), ("bye", "再见"), ("ok", "好的")]);

        let blob = export_untranslated(&store, &keys).unwrap();
        let text = String::from_utf8(blob).unwrap();

        assert_eq!(text, "id,source_text\nbye,再见\nok,好的\n");
    }

    #[test]
    fn test_import_merges_without_deleting() {
        let store = MemoryStore::new();
        store.seed("kept", "保留", "Kept");

        let blob = b"id,translated_text\nbye,Bye\nkept,Still Kept\n";
        let outcome = import(&store, blob).unwrap();

        assert_eq!(
            outcome,
            ImportOutcome {
                imported: 2,
                skipped: 0
            }
        );

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 2);
        // Existing record: translation overwritten, source preserved.
        assert_eq!(records[0].id, "kept");
        assert_eq!(records[0].source_text, "保留");
        assert_eq!(records[0].translated_text.as_deref(), Some("Still Kept"));
        // New record from the blob.
        assert_eq!(records[1].id, "bye");
        assert_eq!(records[1].source_text, "");
    }

    #[test]
    fn test_import_skips_incomplete_rows() {
        let store = MemoryStore::new();

        // One valid row, one empty translation, one empty id, one short row.
        let blob = b"id,source_text,translated_text\nbye,x,Bye\npending,x,\n,x,Orphan\nshort\n";
        let outcome = import(&store, blob).unwrap();

        assert_eq!(outcome.imported, 1);
        assert_eq!(outcome.skipped, 3);
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn test_import_rejects_missing_columns() {
        let store = MemoryStore::new();

        let err = import(&store, "id,source_text\nbye,再见\n".as_bytes()).unwrap_err();
        assert!(matches!(err, CorpusError::ImportFormat(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_structurally_broken_blob_applies_nothing() {
        let store = MemoryStore::new();

        // Invalid UTF-8 after a perfectly valid first row.
        let blob = b"id,translated_text\nbye,Bye\n\xff\xfe,X\n";
        let err = import(&store, blob.as_slice()).unwrap_err();

        assert!(matches!(err, CorpusError::ImportFormat(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_export_then_filled_import_shrinks_untranslated() {
        let store = MemoryStore::new();
        let keys = keys_with(&[("bye", "再见"), ("ok", "好的")]);

        let blob = export_untranslated(&store, &keys).unwrap();
        let exported = String::from_utf8(blob).unwrap();

        // Simulate the translator filling in the missing column.
        let mut filled = String::from("id,source_text,translated_text\n");
        for line in exported.lines().skip(1) {
            filled.push_str(line);
            filled.push_str(",Translated\n");
        }

        let outcome = import(&store, filled.as_bytes()).unwrap();
        assert_eq!(outcome.imported, 2);

        let untranslated = classify(&store, &keys, Filter::Untranslated).unwrap();
        assert!(untranslated.is_empty());
    }
}
