use anyhow::Result;

use crate::cli::commands::open_store;
use crate::config::ResolveOptions;
use crate::corpus;
use crate::status;
use crate::ui::Style;

pub struct EditOptions {
    pub id: String,
    pub text: String,
    pub config: ResolveOptions,
}

/// Creates or overwrites the translation for a key.
///
/// Editing a key the application does not reference yet is allowed: the
/// record is created with an empty source text and shows up as complete
/// once the key goes live.
pub fn run_edit(options: &EditOptions) -> Result<()> {
    let (store, _) = open_store(&options.config)?;

    let record = corpus::edit(&store, &options.id, &options.text)?;

    status!(
        "{} {} = {}",
        Style::success("✓"),
        Style::id(&record.id),
        record.translated_text.as_deref().unwrap_or("")
    );

    Ok(())
}
