//! Core corpus engine: classification, search, mutation, and bulk exchange.
//!
//! The engine is stateless per call. Every operation takes the provider
//! handles it needs ([`TranslationStore`], [`KeySource`]) explicitly, so
//! independent corpora (per test, per locale) never share state.

/// Typed error taxonomy for corpus operations.
pub mod error;

/// Bulk CSV export and merge import.
pub mod exchange;

/// Edit and delete operations against the store.
pub mod mutate;

/// Provider traits the engine consumes.
pub mod provider;

/// Record types and classification filters.
pub mod record;

/// Classification of records against the live key set.
pub mod reconcile;

/// Fuzzy ranked matching over classified records.
pub mod search;

pub use error::CorpusError;
pub use exchange::{ImportOutcome, export_untranslated, import};
pub use mutate::{delete, edit};
pub use provider::{KeySource, TranslationStore};
pub use record::{Filter, LiveKey, TranslationRecord};
pub use reconcile::classify;
pub use search::search;
