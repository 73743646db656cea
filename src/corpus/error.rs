use thiserror::Error;

/// Errors surfaced by corpus operations.
///
/// Nothing here is fatal to the process: every failure is returned to the
/// caller as a typed value. Provider failures (store or key source) are
/// wrapped in `ProviderUnavailable`; retry policy belongs to the provider,
/// not to the corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The classification filter is not one of complete/dead/untranslated.
    #[error("unknown classification filter '{0}' (expected complete, dead, or untranslated)")]
    InvalidFilter(String),

    /// A required field on a mutation was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The store or the key source could not be read or written.
    #[error("provider unavailable: {0:#}")]
    ProviderUnavailable(anyhow::Error),

    /// The import blob is not in the expected tabular shape.
    #[error("import rejected: {0}")]
    ImportFormat(String),
}

impl CorpusError {
    pub(crate) fn provider(err: anyhow::Error) -> Self {
        Self::ProviderUnavailable(err)
    }
}
