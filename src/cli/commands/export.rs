use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::commands::open_corpus;
use crate::config::ResolveOptions;
use crate::corpus::export_untranslated;
use crate::status;

pub struct ExportOptions {
    pub output: Option<PathBuf>,
    pub config: ResolveOptions,
}

/// Exports the currently untranslated keys as a CSV blob.
///
/// Writes to stdout by default so the output can be piped; `-o` writes a
/// file for handing to a translator.
pub fn run_export(options: &ExportOptions) -> Result<()> {
    let (store, keys) = open_corpus(&options.config)?;

    let blob = export_untranslated(&store, &keys)?;

    match &options.output {
        Some(path) => {
            fs::write(path, &blob)
                .with_context(|| format!("Failed to write export: {}", path.display()))?;
            status!("Exported untranslated keys to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&blob)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
