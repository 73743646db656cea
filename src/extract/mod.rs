//! Live key providers.
//!
//! Extraction itself (walking application source for text keys) is external
//! tooling; this crate consumes its output through the
//! [`KeySource`](crate::corpus::KeySource) trait.

/// Key source backed by a JSON manifest file.
pub mod manifest;

pub use manifest::ManifestKeys;

use anyhow::Result;

use crate::corpus::{KeySource, LiveKey};

/// In-memory key source for tests.
#[derive(Debug, Default)]
pub struct StaticKeys {
    keys: Vec<LiveKey>,
}

impl StaticKeys {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self {
            keys: entries
                .into_iter()
                .map(|(id, source_text)| LiveKey { id, source_text })
                .collect(),
        }
    }
}

impl KeySource for StaticKeys {
    fn list_live_keys(&self) -> Result<Vec<LiveKey>> {
        Ok(self.keys.clone())
    }
}
