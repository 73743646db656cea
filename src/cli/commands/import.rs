use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::commands::open_store;
use crate::config::ResolveOptions;
use crate::corpus;
use crate::ui::Style;
use crate::{status, warn};

pub struct ImportOptions {
    pub file: PathBuf,
    pub config: ResolveOptions,
}

/// Merges a translated CSV file into the corpus.
///
/// Rows with an empty id or translation are skipped and reported; a file
/// that is not the expected table shape is rejected outright without
/// touching the store.
pub fn run_import(options: &ImportOptions) -> Result<()> {
    let blob = fs::read(&options.file)
        .with_context(|| format!("Failed to read import file: {}", options.file.display()))?;

    let (store, _) = open_store(&options.config)?;

    let outcome = corpus::import(&store, &blob)?;

    status!(
        "{} imported {} row(s), skipped {}",
        Style::success("✓"),
        outcome.imported,
        outcome.skipped
    );
    if outcome.skipped > 0 {
        warn!(
            "{}",
            Style::warning("Skipped rows are missing an id or a translation")
        );
    }

    Ok(())
}
