//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Text;
use std::path::PathBuf;

use crate::config::{ConfigFile, ConfigManager, CorpusConfig};
use crate::paths;
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `--show`, prints the current settings. Otherwise interactively
/// edits the store and key manifest paths and saves the config file.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        show_configuration();
        return Ok(());
    }

    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    let store_default = config
        .corpus
        .store
        .clone()
        .unwrap_or_else(|| paths::data_dir().join("corpus.db"));
    let store = Text::new("Corpus database path:")
        .with_default(&store_default.display().to_string())
        .with_help_message("Where translations are persisted")
        .prompt()?;

    let keys_default = config
        .corpus
        .keys
        .as_ref()
        .map(|p| p.display().to_string());
    let mut keys_prompt = Text::new("Live key manifest path:")
        .with_help_message("JSON file produced by your key extraction tooling");
    if let Some(ref d) = keys_default {
        keys_prompt = keys_prompt.with_default(d);
    }
    let keys = keys_prompt.prompt()?;

    let config = ConfigFile {
        corpus: CorpusConfig {
            store: Some(PathBuf::from(store.trim())),
            keys: if keys.trim().is_empty() {
                None
            } else {
                Some(PathBuf::from(keys.trim()))
            },
        },
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn show_configuration() {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();

    println!("{}", Style::header("Current settings"));
    println!(
        "  {}  {}",
        Style::label("store"),
        config.corpus.store.as_ref().map_or_else(
            || Style::secondary("(not set)"),
            |p| Style::id(p.display().to_string())
        )
    );
    println!(
        "  {}   {}",
        Style::label("keys"),
        config.corpus.keys.as_ref().map_or_else(
            || Style::secondary("(not set)"),
            |p| Style::id(p.display().to_string())
        )
    );
    println!();
    println!(
        "{}",
        Style::secondary(format!("config file: {}", manager.config_path().display()))
    );
}
