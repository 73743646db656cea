use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::corpus::{KeySource, LiveKey};

/// Key source backed by a JSON manifest produced by extraction tooling.
///
/// The manifest is a JSON array of `{"id": ..., "source_text": ...}`
/// objects, in the order the extractor emitted them:
///
/// ```json
/// [
///   {"id": "hello", "source_text": "你好"},
///   {"id": "bye", "source_text": "再见"}
/// ]
/// ```
///
/// The file is re-read on every call, so a fresh extraction run is picked
/// up by the next classification without restarting anything.
pub struct ManifestKeys {
    manifest_path: PathBuf,
}

impl ManifestKeys {
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest_path: manifest_path.into(),
        }
    }
}

impl KeySource for ManifestKeys {
    fn list_live_keys(&self) -> Result<Vec<LiveKey>> {
        let contents = fs::read_to_string(&self.manifest_path).with_context(|| {
            format!(
                "Failed to read key manifest: {}",
                self.manifest_path.display()
            )
        })?;

        serde_json::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse key manifest: {}",
                self.manifest_path.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_reads_keys_in_manifest_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": "hello", "source_text": "你好"}},
                {{"id": "bye", "source_text": "再见"}}
            ]"#
        )
        .unwrap();

        let keys = ManifestKeys::new(file.path()).list_live_keys().unwrap();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].id, "hello");
        assert_eq!(keys[0].source_text, "你好");
        assert_eq!(keys[1].id, "bye");
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let source = ManifestKeys::new("/nonexistent/live_keys.json");
        assert!(source.list_live_keys().is_err());
    }

    #[test]
    fn test_malformed_manifest_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let source = ManifestKeys::new(file.path());
        assert!(source.list_live_keys().is_err());
    }
}
