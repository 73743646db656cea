use anyhow::Result;
use std::io::{self, Write};

use crate::cli::commands::open_corpus;
use crate::config::ResolveOptions;
use crate::corpus::{Filter, classify, search};
use crate::status;

pub struct ListOptions {
    pub filter: String,
    pub search: Option<String>,
    pub config: ResolveOptions,
}

/// Classifies the corpus, optionally narrows by fuzzy search, and prints
/// the matching records as tab-separated rows on stdout.
pub fn run_list(options: &ListOptions) -> Result<()> {
    let filter: Filter = options.filter.parse()?;
    let (store, keys) = open_corpus(&options.config)?;

    let mut records = classify(&store, &keys, filter)?;
    if let Some(term) = options.search.as_deref() {
        records = search(records, term);
    }

    let mut stdout = io::stdout().lock();
    for record in &records {
        writeln!(
            stdout,
            "{}\t{}\t{}",
            record.id,
            record.source_text,
            record.translated_text.as_deref().unwrap_or("")
        )?;
    }
    stdout.flush()?;

    status!(
        "{} record(s) in class '{filter}'{}",
        records.len(),
        options
            .search
            .as_deref()
            .map(|term| format!(" matching '{term}'"))
            .unwrap_or_default()
    );

    Ok(())
}
