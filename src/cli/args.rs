use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locman")]
#[command(about = "Localization corpus manager")]
#[command(version)]
pub struct Args {
    /// Path to the corpus database (overrides config file)
    #[arg(short = 's', long, global = true)]
    pub store: Option<PathBuf>,

    /// Path to the live key manifest (overrides config file)
    #[arg(short = 'k', long, global = true)]
    pub keys: Option<PathBuf>,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List corpus records by classification, with optional fuzzy search
    List {
        /// Classification filter: complete, dead, or untranslated
        #[arg(short = 'f', long, default_value = "complete")]
        filter: String,

        /// Fuzzy search term matched against id, source, and translation
        #[arg(short = 'w', long)]
        search: Option<String>,
    },
    /// Create or overwrite the translation for a key
    Edit {
        /// Canonical key of the record
        id: String,

        /// Translated text (required, must be non-empty)
        text: String,
    },
    /// Delete a persisted record (safe to repeat)
    Delete {
        /// Canonical key of the record
        id: String,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Export untranslated keys as CSV
    Export {
        /// Write to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Import a translated CSV, merging rows into the corpus
    Import {
        /// CSV file with 'id' and 'translated_text' columns
        file: PathBuf,
    },
    /// Configure locman settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
