//! # locman - Localization Corpus Manager
//!
//! `locman` maintains a localization corpus: a persistent mapping from
//! canonical source-text keys to their translated counterparts, reconciled
//! against the live set of keys the surrounding application references.
//!
//! ## Features
//!
//! - **Classification**: every key is complete, dead, or untranslated
//! - **Fuzzy search**: ranked matching over ids, source, and translations
//! - **Safe mutation**: validated edits, idempotent deletes
//! - **Bulk exchange**: CSV export of untranslated keys, merge import
//!
//! ## Quick Start
//!
//! ```bash
//! # Point locman at the extraction output once
//! locman configure
//!
//! # What still needs translating?
//! locman list --filter untranslated
//!
//! # Translate a key
//! locman edit checkout.title "Checkout"
//!
//! # Hand a CSV to a translator, merge it back later
//! locman export -o todo.csv
//! locman import done.csv
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/locman/config.toml`:
//!
//! ```toml
//! [corpus]
//! store = "/home/me/.local/share/locman/corpus.db"
//! keys = "/home/me/app/build/live_keys.json"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Core corpus engine: classification, search, mutation, bulk exchange.
pub mod corpus;

/// Live key providers.
pub mod extract;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration and data.
pub mod paths;

/// Translation store providers.
pub mod store;

/// Terminal UI helpers (styling, prompt handling).
pub mod ui;
