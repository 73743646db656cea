use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Settings in the `[corpus]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Path to the corpus database.
    pub store: Option<PathBuf>,
    /// Path to the live key manifest produced by extraction tooling.
    pub keys: Option<PathBuf>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/locman/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub corpus: CorpusConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Path to the corpus database.
    pub store_path: PathBuf,
    /// Path to the live key manifest, when configured. Only commands that
    /// classify against live keys need one; edits and deletes do not.
    pub keys_path: Option<PathBuf>,
}

impl ResolvedConfig {
    /// Returns the key manifest path, or an actionable error when none is
    /// configured.
    pub fn require_keys(&self) -> Result<&PathBuf> {
        self.keys_path.as_ref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'keys' (live key manifest)\n\n\
                 Please provide it via:\n  \
                 - CLI option: locman --keys <path> <command>\n  \
                 - Config file: run 'locman configure' to set it up"
            )
        })
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub store: Option<PathBuf>,
    pub keys: Option<PathBuf>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. The store path has
/// a built-in default under the XDG data directory; the key manifest has
/// none, since there is no sensible guess for where extraction output
/// lives.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let store_path = options
        .store
        .clone()
        .or_else(|| config_file.corpus.store.clone())
        .unwrap_or_else(|| paths::data_dir().join("corpus.db"));

    let keys_path = options
        .keys
        .clone()
        .or_else(|| config_file.corpus.keys.clone());

    ResolvedConfig {
        store_path,
        keys_path,
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/locman/config.toml`
    /// or `~/.config/locman/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            corpus: CorpusConfig {
                store: Some(PathBuf::from("/data/corpus.db")),
                keys: Some(PathBuf::from("/data/live_keys.json")),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.corpus.store, Some(PathBuf::from("/data/corpus.db")));
        assert_eq!(
            loaded.corpus.keys,
            Some(PathBuf::from("/data/live_keys.json"))
        );
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let config = ConfigFile {
            corpus: CorpusConfig {
                store: Some(PathBuf::from("/config/corpus.db")),
                keys: Some(PathBuf::from("/config/live_keys.json")),
            },
        };
        let options = ResolveOptions {
            store: Some(PathBuf::from("/cli/corpus.db")),
            keys: Some(PathBuf::from("/cli/live_keys.json")),
        };

        let resolved = resolve_config(&options, &config);

        assert_eq!(resolved.store_path, PathBuf::from("/cli/corpus.db"));
        assert_eq!(
            resolved.keys_path,
            Some(PathBuf::from("/cli/live_keys.json"))
        );
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let config = ConfigFile {
            corpus: CorpusConfig {
                store: Some(PathBuf::from("/config/corpus.db")),
                keys: Some(PathBuf::from("/config/live_keys.json")),
            },
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config);

        assert_eq!(resolved.store_path, PathBuf::from("/config/corpus.db"));
        assert_eq!(
            resolved.keys_path,
            Some(PathBuf::from("/config/live_keys.json"))
        );
    }

    #[test]
    fn test_resolve_config_store_has_builtin_default() {
        let config = ConfigFile {
            corpus: CorpusConfig {
                store: None,
                keys: Some(PathBuf::from("/config/live_keys.json")),
            },
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config);

        assert!(resolved.store_path.ends_with("corpus.db"));
    }

    #[test]
    fn test_require_keys_fails_when_unconfigured() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        let result = resolved.require_keys();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("keys"));
    }
}
