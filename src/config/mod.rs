//! Configuration file management.

/// Config file structure, loading, and CLI-override resolution.
pub mod manager;

pub use manager::{
    ConfigFile, ConfigManager, CorpusConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
