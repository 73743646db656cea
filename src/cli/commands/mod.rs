//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Delete command handler.
pub mod delete;

/// Edit command handler.
pub mod edit;

/// Export command handler.
pub mod export;

/// Import command handler.
pub mod import;

/// List command handler.
pub mod list;

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::extract::ManifestKeys;
use crate::store::SqliteStore;

/// Loads the config file, applies CLI overrides, and opens the store.
fn open_store(options: &ResolveOptions) -> Result<(SqliteStore, ResolvedConfig)> {
    let config_file = ConfigManager::new().load_or_default();
    let resolved = resolve_config(options, &config_file);
    let store = SqliteStore::open(&resolved.store_path)?;

    Ok((store, resolved))
}

/// Like [`open_store`], additionally wiring up the live key manifest.
fn open_corpus(options: &ResolveOptions) -> Result<(SqliteStore, ManifestKeys)> {
    let (store, resolved) = open_store(options)?;
    let keys = ManifestKeys::new(resolved.require_keys()?);

    Ok((store, keys))
}
