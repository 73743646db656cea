use anyhow::Result;
use inquire::Confirm;

use crate::cli::commands::open_store;
use crate::config::ResolveOptions;
use crate::corpus::{self, TranslationStore};
use crate::status;
use crate::ui::{Style, handle_prompt_cancellation};

pub struct DeleteOptions {
    pub id: String,
    pub yes: bool,
    pub config: ResolveOptions,
}

/// Deletes a record from the corpus.
///
/// Deleting an id that is not persisted is a success: repeated deletes of
/// the same key are safe.
pub fn run_delete(options: &DeleteOptions) -> Result<()> {
    handle_prompt_cancellation(|| run_delete_inner(options))
}

fn run_delete_inner(options: &DeleteOptions) -> Result<()> {
    let (store, _) = open_store(&options.config)?;

    let Some(record) = store.get(&options.id)? else {
        status!(
            "'{}' is not in the corpus; nothing to delete",
            options.id
        );
        return Ok(());
    };

    if !options.yes {
        let confirmed = Confirm::new(&format!(
            "Delete '{}' ({})?",
            record.id,
            record.translated_text.as_deref().unwrap_or("untranslated")
        ))
        .with_default(false)
        .prompt()?;

        if !confirmed {
            status!("Aborted");
            return Ok(());
        }
    }

    corpus::delete(&store, &options.id)?;

    status!("{} deleted {}", Style::success("✓"), Style::id(&record.id));

    Ok(())
}
